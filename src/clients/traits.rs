use crate::framework::{CatalogClient, CatalogRecord, FrameworkError};
use async_trait::async_trait;

/// Trait for catalog-specific clients to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every catalog supports: `get`, `list`, and `count`.
#[async_trait]
pub trait CatalogAccess<T: CatalogRecord>: Send + Sync {
    /// The catalog-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic CatalogClient.
    fn inner(&self) -> &CatalogClient<T>;

    /// Map framework errors to the specific catalog error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by identity key. A missing key is `Ok(None)`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Fetch the filtered view collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self, criteria: T::Criteria) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(criteria).await.map_err(Self::map_error)
    }

    /// Fetch the collection size.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }
}
