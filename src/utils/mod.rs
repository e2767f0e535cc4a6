//! Helper functions and small components used across the application:
//!
//! - [`alias_generator`] - Random alias candidates
//! - [`db_error`] - Classification of raw database errors

pub mod alias_generator;
pub mod db_error;
