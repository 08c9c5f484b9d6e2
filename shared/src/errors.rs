//! Error types for the Contact List application
//!
//! The display strings are the reason texts returned to API clients.

use thiserror::Error;

/// Login rejection reasons
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("User not found.")]
    UserNotFound,

    #[error("Password don't match.")]
    PasswordMismatch,
}

/// Contact lookup failures
///
/// A contact that exists but belongs to someone else is reported exactly
/// like one that does not exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact not found.")]
    NotFound,
}
