//! Alias assignment: turns a target URL and an optional custom alias into a
//! stored record.

use std::sync::Arc;

use crate::domain::error::AliasError;
use crate::domain::repositories::AliasRepository;
use crate::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};

/// Longest alias the generator may be asked for.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Upper bound on generated candidates per request.
pub const MAX_GENERATION_ATTEMPTS: usize = 16;

/// Controls how generated aliases are produced.
///
/// Build with [`AliasPolicy::new`] to get range checks; the fields stay
/// public and are checked again before each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Length of generated aliases.
    pub alias_length: usize,
    /// Total number of generated candidates tried before a collision is
    /// reported. `1` means a generated collision is surfaced immediately.
    pub generation_attempts: usize,
}

impl AliasPolicy {
    /// Creates a policy, rejecting a length outside 1-64 or an attempt count
    /// outside 1-16.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::InvalidInput`] if either value is out of range.
    pub fn new(alias_length: usize, generation_attempts: usize) -> Result<Self, AliasError> {
        let policy = Self {
            alias_length,
            generation_attempts,
        };
        policy.check()?;
        Ok(policy)
    }

    fn check(&self) -> Result<(), AliasError> {
        if !(1..=MAX_ALIAS_LENGTH).contains(&self.alias_length) {
            return Err(AliasError::InvalidInput(format!(
                "alias length must be between 1 and {MAX_ALIAS_LENGTH}, got {}",
                self.alias_length
            )));
        }

        if !(1..=MAX_GENERATION_ATTEMPTS).contains(&self.generation_attempts) {
            return Err(AliasError::InvalidInput(format!(
                "generation attempts must be between 1 and {MAX_GENERATION_ATTEMPTS}, got {}",
                self.generation_attempts
            )));
        }

        Ok(())
    }
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            alias_length: DEFAULT_ALIAS_LENGTH,
            generation_attempts: 1,
        }
    }
}

/// Service assigning aliases to target URLs.
///
/// Custom aliases are used verbatim; when none is given a candidate is drawn
/// from the generator. Conflicts are detected by the store's uniqueness
/// constraint and never by a lookup beforehand.
pub struct AssignmentService<R: AliasRepository, G: AliasGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    policy: AliasPolicy,
}

impl<R: AliasRepository, G: AliasGenerator> AssignmentService<R, G> {
    /// Creates a new assignment service.
    pub fn new(repository: Arc<R>, generator: Arc<G>, policy: AliasPolicy) -> Self {
        Self {
            repository,
            generator,
            policy,
        }
    }

    /// Stores `target_url` under `requested_alias`, or under a generated alias
    /// when `requested_alias` is absent or empty. Returns the alias used.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::InvalidInput`] if `target_url` is empty.
    ///
    /// Returns [`AliasError::AliasExists`] if:
    /// - The custom alias is already stored
    /// - Every generated candidate collided (see [`AliasPolicy::generation_attempts`])
    ///
    /// Returns [`AliasError::Infra`] on storage failures.
    pub async fn assign(
        &self,
        target_url: String,
        requested_alias: Option<String>,
    ) -> Result<String, AliasError> {
        if target_url.is_empty() {
            return Err(AliasError::InvalidInput("target url is empty".to_string()));
        }

        match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.assign_custom(&target_url, alias).await,
            None => self.assign_generated(&target_url).await,
        }
    }

    async fn assign_custom(&self, target_url: &str, alias: String) -> Result<String, AliasError> {
        let id = self.repository.create(target_url, &alias).await.inspect_err(|e| {
            if matches!(e, AliasError::AliasExists(_)) {
                tracing::info!(alias = %alias, "custom alias already taken");
            }
        })?;

        tracing::info!(id, alias = %alias, "alias assigned");
        Ok(alias)
    }

    async fn assign_generated(&self, target_url: &str) -> Result<String, AliasError> {
        self.policy.check()?;

        let mut attempt = 1;

        loop {
            let candidate = self.generator.generate(self.policy.alias_length);

            match self.repository.create(target_url, &candidate).await {
                Ok(id) => {
                    tracing::info!(id, alias = %candidate, attempt, "generated alias assigned");
                    return Ok(candidate);
                }
                Err(AliasError::AliasExists(_)) if attempt < self.policy.generation_attempts => {
                    tracing::warn!(alias = %candidate, attempt, "generated alias collided");
                    attempt += 1;
                }
                Err(e) => {
                    if matches!(e, AliasError::AliasExists(_)) {
                        tracing::warn!(alias = %candidate, attempt, "generated alias collided, giving up");
                    }
                    return Err(e);
                }
            }
        }
    }
}
