//! Business logic services for the application layer.

pub mod assignment_service;
pub mod removal_service;
pub mod resolution_service;

pub use assignment_service::{AliasPolicy, AssignmentService};
pub use removal_service::RemovalService;
pub use resolution_service::ResolutionService;
