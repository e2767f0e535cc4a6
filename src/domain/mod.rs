//! Domain layer containing business entities, errors, and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - The closed error taxonomy returned by the core
//!
//! The domain layer has no dependencies on the HTTP layer. Orchestration over
//! these contracts lives in [`crate::application::services`].

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::AliasError;
