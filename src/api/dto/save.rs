//! DTOs for the alias creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Characters allowed in a custom alias so it survives as a path segment.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

/// Aliases that collide with fixed routes and could never be resolved.
pub const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Request to create an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be a valid absolute URL without control characters).
    #[validate(
        url(message = "Invalid URL format"),
        custom(function = "validate_target_url")
    )]
    pub url: String,

    /// Optional custom alias. Empty means "generate one".
    #[serde(default)]
    #[validate(custom(function = "validate_alias"))]
    pub alias: Option<String>,
}

/// Response carrying the alias that was stored.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// The URL parser drops tabs and newlines before checking, but the value is
/// stored and later sent back verbatim in `Location`.
fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(|c| c.is_ascii_control()) {
        let mut err = ValidationError::new("url_control_chars");
        err.message = Some("URL must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() {
        return Ok(());
    }

    if !ALIAS_REGEX.is_match(alias) {
        let mut err = ValidationError::new("alias_format");
        err.message = Some("Alias must be 1-64 characters of letters, digits, '-' or '_'".into());
        return Err(err);
    }

    if RESERVED_ALIASES.contains(&alias) {
        let mut err = ValidationError::new("alias_reserved");
        err.message = Some("This alias is reserved".into());
        return Err(err);
    }

    Ok(())
}
