//! Alias removal service.

use std::sync::Arc;

use crate::domain::error::AliasError;
use crate::domain::repositories::AliasRepository;

/// Service deleting alias records.
pub struct RemovalService<R: AliasRepository> {
    repository: Arc<R>,
}

impl<R: AliasRepository> RemovalService<R> {
    /// Creates a new removal service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deletes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::InvalidInput`] if `alias` is empty.
    /// Returns [`AliasError::NotFound`] if nothing was deleted.
    /// Returns [`AliasError::Infra`] on storage failures.
    pub async fn remove(&self, alias: &str) -> Result<(), AliasError> {
        if alias.is_empty() {
            return Err(AliasError::InvalidInput("alias is empty".to_string()));
        }

        self.repository.delete(alias).await?;
        tracing::info!(alias, "alias removed");

        Ok(())
    }
}
