//! Repository trait for alias record storage.

use crate::domain::entities::AliasRecord;
use crate::domain::error::AliasError;
use async_trait::async_trait;

/// Repository interface for alias records.
///
/// Implementations own all persisted state and enforce alias uniqueness
/// themselves; callers only ever hold aliases.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_alias.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Ensures the backing schema exists. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Infra`] on database errors.
    async fn init(&self) -> Result<(), AliasError>;

    /// Inserts a record and returns its surrogate id.
    ///
    /// Uniqueness is detected from the store's constraint, not a pre-check,
    /// so concurrent creates of the same alias cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::AliasExists`] if `alias` is already stored.
    /// Returns [`AliasError::Infra`] on other database errors.
    async fn create(&self, target_url: &str, alias: &str) -> Result<i64, AliasError>;

    /// Looks up the target URL of an alias (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::NotFound`] if no record matches.
    /// Returns [`AliasError::Infra`] on database errors.
    async fn get(&self, alias: &str) -> Result<String, AliasError>;

    /// Removes the record for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::NotFound`] if the delete affected no rows.
    /// Returns [`AliasError::Infra`] on database errors.
    async fn delete(&self, alias: &str) -> Result<(), AliasError>;

    /// Fetches the full record for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Infra`] on database errors.
    async fn find(&self, alias: &str) -> Result<Option<AliasRecord>, AliasError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Infra`] on database errors.
    async fn count(&self) -> Result<i64, AliasError>;
}
