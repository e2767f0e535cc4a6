//! Random alias generation.
//!
//! Generated aliases are candidates only: uniqueness is enforced by the store's
//! constraint, never by the generator.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated aliases when nothing else is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Produces alias candidates.
///
/// Implementations must be callable concurrently; each call is independent.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a string of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Draws each character uniformly from `[A-Za-z0-9]` using the thread-local
/// CSPRNG.
///
/// # Examples
///
/// ```ignore
/// let alias = RandomAliasGenerator.generate(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
