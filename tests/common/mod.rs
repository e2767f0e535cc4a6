#![allow(dead_code)]

use alias_shortener::application::services::AliasPolicy;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::{
    PoolSettings, SqliteAliasRepository, connect_pool,
};
use alias_shortener::state::{AppState, Credentials};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// `Authorization` header value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

/// Single-connection in-memory database; the connection is never recycled so
/// the data lives as long as the pool.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// File-backed pool inside a fresh temporary directory. Keep the returned
/// `TempDir` alive for as long as the pool is used.
pub async fn file_pool() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.db");

    let pool = connect_pool(path.to_str().unwrap(), &PoolSettings::default())
        .await
        .unwrap();

    (pool, dir)
}

pub async fn create_test_repository(pool: SqlitePool) -> Arc<SqliteAliasRepository> {
    let repo = Arc::new(SqliteAliasRepository::new(Arc::new(pool)));
    repo.init().await.unwrap();
    repo
}

pub async fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_policy(pool, AliasPolicy::default()).await
}

pub async fn create_test_state_with_policy(pool: SqlitePool, policy: AliasPolicy) -> AppState {
    let repo = create_test_repository(pool).await;
    AppState::new(repo, policy, Credentials::new(TEST_USER, TEST_PASSWORD))
}

pub async fn insert_alias(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, target_url) VALUES (?1, ?2)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_aliases(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}
