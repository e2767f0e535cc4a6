//! Domain error taxonomy shared by the store and the services.

use thiserror::Error;

/// Errors produced by alias storage and orchestration.
///
/// The first three variants are caller errors and are never retried. `Infra`
/// wraps any other backing-store failure together with the operation that
/// raised it; the core passes it through unchanged.
#[derive(Debug, Error)]
pub enum AliasError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("alias already exists: {0}")]
    AliasExists(String),

    #[error("alias not found: {0}")]
    NotFound(String),

    #[error("{op}: {source}")]
    Infra {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AliasError {
    /// Returns a mapper wrapping a database error with the failing operation.
    ///
    /// ```ignore
    /// query.execute(pool).await.map_err(AliasError::infra("store.get"))?;
    /// ```
    pub fn infra(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Infra { op, source }
    }

    /// Returns true for the caller-facing variants (everything except `Infra`).
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Infra { .. })
    }
}
