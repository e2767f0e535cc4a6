//! Alias resolution service.

use std::sync::Arc;

use crate::domain::error::AliasError;
use crate::domain::repositories::AliasRepository;

/// Service looking up the target URL of an alias.
pub struct ResolutionService<R: AliasRepository> {
    repository: Arc<R>,
}

impl<R: AliasRepository> ResolutionService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::InvalidInput`] if `alias` is empty; the store is
    /// not consulted in that case.
    /// Returns [`AliasError::NotFound`] if the alias is not stored.
    /// Returns [`AliasError::Infra`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AliasError> {
        if alias.is_empty() {
            return Err(AliasError::InvalidInput("alias is empty".to_string()));
        }

        let target_url = self.repository.get(alias).await?;
        tracing::debug!(alias, target_url = %target_url, "alias resolved");

        Ok(target_url)
    }
}
