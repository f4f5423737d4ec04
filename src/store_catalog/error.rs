//! Error types for the store catalog.

use thiserror::Error;

/// Errors that can occur during store catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreCatalogError {
    /// The requested store was not found where one was required.
    #[error("Store not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the catalog actor.
    #[error("Catalog communication error: {0}")]
    CatalogCommunicationError(String),
}

impl From<String> for StoreCatalogError {
    fn from(msg: String) -> Self {
        StoreCatalogError::CatalogCommunicationError(msg)
    }
}
