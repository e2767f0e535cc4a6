//! # Alias Shortener
//!
//! Maps short aliases to target URLs: create an alias for a URL, resolve an
//! alias via redirect, and delete an alias. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Alias record entity, storage trait, error taxonomy
//! - **Application Layer** ([`application`]) - Assignment, resolution and removal services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! Alias uniqueness is enforced by the storage engine's `UNIQUE` constraint;
//! the services hold no mutable state of their own and are safe to share
//! across concurrent requests.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AliasPolicy, AssignmentService, RemovalService, ResolutionService,
    };
    pub use crate::domain::AliasError;
    pub use crate::domain::entities::AliasRecord;
    pub use crate::domain::repositories::AliasRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteAliasRepository;
    pub use crate::state::AppState;
    pub use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};
}
