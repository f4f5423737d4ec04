//! Error types for the session service.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The username/password pair was rejected. Deliberately does not say
    /// whether the username or the password was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The session actor is no longer running.
    #[error("Session service closed")]
    ServiceClosed,
}
