//! Contact List Shared Library
//!
//! This crate contains the models, API types, error reasons and validation
//! used by the backend and its tests.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Contact, User};
pub use types::*;
