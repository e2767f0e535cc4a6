mod common;

use alias_shortener::api::handlers::health_handler;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::memory_pool().await;
    let state = common::create_test_state(pool.clone()).await;
    common::insert_alias(&pool, "one", "https://example.com").await;
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["storage"]["status"], "ok");
    assert_eq!(json["storage"]["message"], "1 aliases stored");
}

#[tokio::test]
async fn test_health_endpoint_storage_down() {
    let pool = common::memory_pool().await;
    let state = common::create_test_state(pool.clone()).await;
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["storage"]["status"], "error");
}
