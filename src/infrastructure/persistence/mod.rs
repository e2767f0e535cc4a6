//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters for every query.
//!
//! # Repositories
//!
//! - [`SqliteAliasRepository`] - Alias record storage and retrieval

pub mod sqlite_alias_repository;

pub use sqlite_alias_repository::{PoolSettings, SqliteAliasRepository, connect_pool};
