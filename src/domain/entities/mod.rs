//! Core domain entities.
//!
//! - [`AliasRecord`] - A stored alias → target URL mapping

pub mod alias_record;

pub use alias_record::AliasRecord;
