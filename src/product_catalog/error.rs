//! Error types for the product catalog.

use thiserror::Error;

/// Errors that can occur during product catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductCatalogError {
    /// The requested product was not found where one was required.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the catalog actor.
    #[error("Catalog communication error: {0}")]
    CatalogCommunicationError(String),
}

impl From<String> for ProductCatalogError {
    fn from(msg: String) -> Self {
        ProductCatalogError::CatalogCommunicationError(msg)
    }
}
