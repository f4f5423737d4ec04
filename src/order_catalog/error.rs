//! Error types for the order catalog.

use thiserror::Error;

/// Errors that can occur during order catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderCatalogError {
    /// The requested order was not found where one was required.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the catalog actor.
    #[error("Catalog communication error: {0}")]
    CatalogCommunicationError(String),
}

impl From<String> for OrderCatalogError {
    fn from(msg: String) -> Self {
        OrderCatalogError::CatalogCommunicationError(msg)
    }
}
