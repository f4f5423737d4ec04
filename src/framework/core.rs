//! # Core Catalog Framework
//!
//! This module defines the generic building blocks for the catalog actors.
//!
//! ## Key Types
//!
//! - [`CatalogRecord`]: The trait that all served record types must implement.
//! - [`CatalogActor`]: The generic actor that owns one record collection.
//! - [`CatalogClient`]: The generic client for communicating with catalog actors.
//! - [`FrameworkError`]: Common errors (e.g., CatalogClosed, DuplicateKey).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be served by a [`CatalogActor`].
///
/// # Architecture Note
/// By defining a contract (`CatalogRecord`) that all our record types
/// (Product, Order, Store) satisfy, the message loop in `CatalogActor` is
/// written once and reused for every catalog.
///
/// The associated types keep each catalog's vocabulary separate: an order
/// catalog only accepts `OrderCriteria`, and the compiler rejects a product
/// filter sent to it.
///
/// # Provided Methods (Hooks)
/// [`CatalogRecord::select`] has a default implementation that filters via
/// [`CatalogRecord::matches`] and keeps the input order. Override it when a
/// catalog's listing has a mandatory view order.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// The unique identity key for this record (e.g., item number, order number).
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The filter input a listing view supplies. `Default` means "no filter".
    type Criteria: Send + Sync + Debug + Default;

    /// Enum of collection-level read queries (e.g., `Recent`, `Vendors`).
    type Query: Send + Sync + Debug;

    /// The result type returned by collection-level queries.
    type QueryResult: Send + Sync + Debug;

    /// The record's identity key.
    fn key(&self) -> Self::Key;

    /// Whether this record passes the given criteria.
    fn matches(&self, criteria: &Self::Criteria) -> bool;

    /// Builds the view collection for a `List` request. The default keeps
    /// input order; override to impose a view order.
    fn select(records: &[Self], criteria: &Self::Criteria) -> Vec<Self> {
        records
            .iter()
            .filter(|r| r.matches(criteria))
            .cloned()
            .collect()
    }

    /// Runs a collection-level read query.
    fn run_query(records: &[Self], query: Self::Query) -> Self::QueryResult;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the catalog framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Catalog closed")]
    CatalogClosed,
    #[error("Catalog dropped response channel")]
    CatalogDropped,
    #[error("Duplicate key in seed data: {0}")]
    DuplicateKey(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by catalog actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a catalog actor.
///
/// Every operation is a read: the collection is seeded once and never
/// mutated afterwards, so the variants are the read vocabulary of a
/// listing-backed UI rather than a CRUD set.
///
/// - **Get**: point lookup by identity key; a missing key is `None`, not an error.
/// - **List**: the filtered (and possibly ordered) view collection.
/// - **Count**: collection size, for "Showing N records" chrome.
/// - **Query**: a collection-level read from [`CatalogRecord::Query`].
#[derive(Debug)]
pub enum CatalogRequest<T: CatalogRecord> {
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    List {
        criteria: T::Criteria,
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
}

// =============================================================================
// 3. THE GENERIC CATALOG ACTOR
// =============================================================================

/// The generic actor that owns one immutable record collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the catalog. It owns the records and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each catalog actor processes its messages *sequentially* in a loop, so no
/// `Mutex` or `RwLock` guards the records. Because the collection is never
/// mutated after seeding, every response is a pure function of the seed data
/// and the request.
pub struct CatalogActor<T: CatalogRecord> {
    receiver: mpsc::Receiver<CatalogRequest<T>>,
    records: Vec<T>,
    index: HashMap<T::Key, usize>,
}

impl<T: CatalogRecord> CatalogActor<T> {
    /// Seeds an actor with a record collection and returns it with its client.
    ///
    /// Seeding checks the one data contract the loader itself does not:
    /// identity keys must be unique within the collection.
    pub fn new(
        buffer_size: usize,
        records: Vec<T>,
    ) -> Result<(Self, CatalogClient<T>), FrameworkError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.key(), position).is_some() {
                return Err(FrameworkError::DuplicateKey(record.key().to_string()));
            }
        }

        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records,
            index,
        };
        let client = CatalogClient::new(sender);
        Ok((actor, client))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "stockroom::model::product::Product")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, size = self.records.len(), "Catalog started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Get { key, respond_to } => {
                    let item = self.index.get(&key).map(|&pos| self.records[pos].clone());
                    debug!(record_type, %key, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CatalogRequest::List {
                    criteria,
                    respond_to,
                } => {
                    let view = T::select(&self.records, &criteria);
                    debug!(record_type, ?criteria, hits = view.len(), "List");
                    let _ = respond_to.send(Ok(view));
                }
                CatalogRequest::Count { respond_to } => {
                    debug!(record_type, size = self.records.len(), "Count");
                    let _ = respond_to.send(Ok(self.records.len()));
                }
                CatalogRequest::Query { query, respond_to } => {
                    debug!(record_type, ?query, "Query");
                    let result = T::run_query(&self.records, query);
                    let _ = respond_to.send(Ok(result));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `CatalogActor`.
#[derive(Clone)]
pub struct CatalogClient<T: CatalogRecord> {
    sender: mpsc::Sender<CatalogRequest<T>>,
}

impl<T: CatalogRecord> CatalogClient<T> {
    pub fn new(sender: mpsc::Sender<CatalogRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Get { key, respond_to })
            .await
            .map_err(|_| FrameworkError::CatalogClosed)?;
        response.await.map_err(|_| FrameworkError::CatalogDropped)?
    }

    pub async fn list(&self, criteria: T::Criteria) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::List {
                criteria,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::CatalogClosed)?;
        response.await.map_err(|_| FrameworkError::CatalogDropped)?
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Count { respond_to })
            .await
            .map_err(|_| FrameworkError::CatalogClosed)?;
        response.await.map_err(|_| FrameworkError::CatalogDropped)?
    }

    pub async fn query(&self, query: T::Query) -> Result<T::QueryResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Query { query, respond_to })
            .await
            .map_err(|_| FrameworkError::CatalogClosed)?;
        response.await.map_err(|_| FrameworkError::CatalogDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        code: String,
        aisle: u32,
    }

    #[derive(Debug, Default)]
    struct ShelfCriteria {
        aisle: Option<u32>,
    }

    #[derive(Debug)]
    enum ShelfQuery {
        Aisles,
    }

    #[derive(Debug)]
    enum ShelfQueryResult {
        Aisles(Vec<u32>),
    }

    impl CatalogRecord for Shelf {
        type Key = String;
        type Criteria = ShelfCriteria;
        type Query = ShelfQuery;
        type QueryResult = ShelfQueryResult;

        fn key(&self) -> String {
            self.code.clone()
        }

        fn matches(&self, criteria: &ShelfCriteria) -> bool {
            criteria.aisle.map_or(true, |aisle| self.aisle == aisle)
        }

        fn run_query(records: &[Self], query: ShelfQuery) -> ShelfQueryResult {
            match query {
                ShelfQuery::Aisles => {
                    let mut aisles: Vec<u32> = records.iter().map(|s| s.aisle).collect();
                    aisles.dedup();
                    ShelfQueryResult::Aisles(aisles)
                }
            }
        }
    }

    fn shelf(code: &str, aisle: u32) -> Shelf {
        Shelf {
            code: code.to_string(),
            aisle,
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn catalog_actor_serves_reads() {
        let seed = vec![shelf("A1", 1), shelf("A2", 1), shelf("B1", 2)];
        let (actor, client) = CatalogActor::new(10, seed).unwrap();
        let handle = tokio::spawn(actor.run());

        // Point lookup, present and absent.
        let found: Option<Shelf> = client.get("A2".to_string()).await.unwrap();
        assert_eq!(found.unwrap().aisle, 1);
        let missing = client.get("Z9".to_string()).await.unwrap();
        assert!(missing.is_none());

        // Filtered list via the default select hook.
        let view = client.list(ShelfCriteria { aisle: Some(1) }).await.unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].code, "A1");

        // Count and a collection-level query.
        assert_eq!(client.count().await.unwrap(), 3);
        let ShelfQueryResult::Aisles(aisles) = client.query(ShelfQuery::Aisles).await.unwrap();
        assert_eq!(aisles, vec![1, 2]);

        // Dropping the client closes the channel and ends the loop.
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_seed_key_is_rejected() {
        let seed = vec![shelf("A1", 1), shelf("A1", 2)];
        let err = CatalogActor::new(10, seed).err().unwrap();
        assert_eq!(err, FrameworkError::DuplicateKey("A1".to_string()));
    }
}
