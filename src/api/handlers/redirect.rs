//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and the stored URL in `Location`, unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist, and 500 if the stored URL
/// cannot be sent as a header value.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.resolution_service.resolve(&alias).await?;

    let location = HeaderValue::try_from(target_url).map_err(|e| {
        tracing::error!(alias = %alias, error = %e, "stored target url is not a valid header value");
        AppError::internal("Internal error", serde_json::json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
