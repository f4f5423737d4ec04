use crate::clients::traits::CatalogAccess;
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::Product;
use crate::product_catalog::{ProductCatalogError, ProductQuery, ProductQueryResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the product catalog actor.
#[derive(Clone)]
pub struct ProductsClient {
    inner: CatalogClient<Product>,
}

impl ProductsClient {
    pub fn new(inner: CatalogClient<Product>) -> Self {
        Self { inner }
    }

    /// Distinct vendors for the catalog filter dropdown.
    #[instrument(skip(self))]
    pub async fn vendor_options(&self) -> Result<Vec<String>, ProductCatalogError> {
        debug!("Sending request");
        let result = self
            .inner
            .query(ProductQuery::Vendors)
            .await
            .map_err(|e| ProductCatalogError::CatalogCommunicationError(e.to_string()))?;
        match result {
            ProductQueryResult::Vendors(vendors) => Ok(vendors),
        }
    }
}

#[async_trait]
impl CatalogAccess<Product> for ProductsClient {
    type Error = ProductCatalogError;

    fn inner(&self) -> &CatalogClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductCatalogError::CatalogCommunicationError(e.to_string())
    }
}
