//! Application layer services implementing alias orchestration.
//!
//! Services consume the repository and generator traits and expose the three
//! operations the HTTP and CLI adapters call into.
//!
//! # Available Services
//!
//! - [`services::assignment_service::AssignmentService`] - `assign(target_url, alias?)`
//! - [`services::resolution_service::ResolutionService`] - `resolve(alias)`
//! - [`services::removal_service::RemovalService`] - `remove(alias)`

pub mod services;
