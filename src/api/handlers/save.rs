//! Handler for alias creation.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a target URL under a custom or generated alias.
///
/// # Endpoint
///
/// `POST /url` (Basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "promo" }
/// ```
///
/// `alias` is optional; when missing or empty a random alias is generated.
///
/// # Response
///
/// ```json
/// { "alias": "promo" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the alias is already taken.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    payload.validate()?;

    let alias = state
        .assignment_service
        .assign(payload.url, payload.alias)
        .await?;

    Ok(Json(SaveResponse { alias }))
}
