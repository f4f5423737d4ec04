use crate::clients::traits::CatalogAccess;
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::Store;
use crate::store_catalog::StoreCatalogError;
use async_trait::async_trait;

/// Client for interacting with the store catalog actor.
#[derive(Clone)]
pub struct StoresClient {
    inner: CatalogClient<Store>,
}

impl StoresClient {
    pub fn new(inner: CatalogClient<Store>) -> Self {
        Self { inner }
    }

    /// Every store, in fixture order, for the store picker.
    pub async fn all(&self) -> Result<Vec<Store>, StoreCatalogError> {
        self.list(()).await
    }
}

#[async_trait]
impl CatalogAccess<Store> for StoresClient {
    type Error = StoreCatalogError;

    fn inner(&self) -> &CatalogClient<Store> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreCatalogError::CatalogCommunicationError(e.to_string())
    }
}
