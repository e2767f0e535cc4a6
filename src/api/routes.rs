//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Mutating routes, to be wrapped in [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST   /url`          - Create an alias
/// - `DELETE /url/{alias}`  - Delete an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
