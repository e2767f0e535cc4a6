//! HTTP adapter translating requests into core operations.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and tracing middleware
//! - [`routes`] - Protected route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
