//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Alias redirect (public)
//! - `GET    /health`       - Storage health check (public)
//! - `POST   /url`          - Create alias (Basic auth)
//! - `DELETE /url/{alias}`  - Delete alias (Basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline from configuration
//! - **Authentication** - Basic auth on mutating routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and middleware.
///
/// Requests exceeding `request_timeout` are answered with `408 Request Timeout`.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(protected)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
}

/// Constructs the served application: [`build_router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout))
}
