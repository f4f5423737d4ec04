//! Error types for the notification service.

use thiserror::Error;

/// Errors that can occur during notification operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    /// The notification actor is no longer running.
    #[error("Notification service closed")]
    ServiceClosed,
}
