//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockCatalog`] for the fluent expectation API, or
//! [`raw_mock_client`] to drive the channel by hand.

use crate::framework::{CatalogClient, CatalogRecord, CatalogRequest, FrameworkError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock catalog.
enum Expectation<T: CatalogRecord> {
    Get {
        key: T::Key,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Count {
        response: Result<usize, FrameworkError>,
    },
    Query {
        response: Result<T::QueryResult, FrameworkError>,
    },
}

/// A mock catalog with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockCatalog::<Product>::new();
/// mock.expect_get("10234-BLK".to_string()).return_ok(Some(product));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockCatalog<T: CatalogRecord> {
    client: CatalogClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CatalogRecord> MockCatalog<T> {
    /// Creates a new mock catalog with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps);

                match (request, expectation) {
                    (
                        CatalogRequest::Get { key: _, respond_to },
                        Some(Expectation::Get { key: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::List {
                            criteria: _,
                            respond_to,
                        },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Count { respond_to },
                        Some(Expectation::Count { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Query {
                            query: _,
                            respond_to,
                        },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CatalogClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CatalogClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, key: T::Key) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `count` operation.
    pub fn expect_count(&mut self) -> CountExpectationBuilder<T> {
        CountExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: CatalogRecord> Default for MockCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: CatalogRecord> {
    key: T::Key,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: CatalogRecord> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            key: self.key,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            key: self.key,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: CatalogRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: CatalogRecord> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, view: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List { response: Ok(view) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `count` expectations.
pub struct CountExpectationBuilder<T: CatalogRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: CatalogRecord> CountExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, count: usize) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Count {
            response: Ok(count),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: CatalogRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: CatalogRecord> QueryExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::QueryResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When a test only exercises *client* logic, there is no need to seed and
/// spawn a full `CatalogActor`. The returned client sends messages to a
/// channel the test controls; the test inspects each arriving request and
/// answers it deterministically.
///
/// **Note**: Consider using [`MockCatalog`] for a more fluent API.
pub fn raw_mock_client<T: CatalogRecord>(
    buffer_size: usize,
) -> (CatalogClient<T>, mpsc::Receiver<CatalogRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<T: CatalogRecord>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(
    T::Key,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CatalogRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: CatalogRecord>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(
    T::Criteria,
    tokio::sync::oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CatalogRequest::List {
            criteria,
            respond_to,
        }) => Some((criteria, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, StoreInventory};

    fn product(item_number: &str) -> Product {
        Product {
            item_number: item_number.to_string(),
            style_number: "ST-1".to_string(),
            title: "Ridgeline Runner".to_string(),
            color: "Black".to_string(),
            short_description: String::new(),
            vendor: "Northtrail".to_string(),
            price: 129.99,
            markdown: false,
            company_on_hand: 12,
            local_on_hand: 3,
            inventory: vec![StoreInventory {
                store_number: "101".to_string(),
                size: "9".to_string(),
                quantity: 3,
                available: true,
            }],
        }
    }

    #[tokio::test]
    async fn raw_mock_answers_a_get() {
        let (client, mut receiver) = raw_mock_client::<Product>(10);

        let get_task = tokio::spawn(async move { client.get("10234-BLK".to_string()).await });

        let (key, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(key, "10234-BLK");
        responder.send(Ok(Some(product("10234-BLK")))).unwrap();

        let result = get_task.await.unwrap().unwrap();
        assert_eq!(result.unwrap().item_number, "10234-BLK");
    }

    #[tokio::test]
    async fn mock_catalog_with_expectations() {
        let mut mock = MockCatalog::<Product>::new();

        mock.expect_get("10234-BLK".to_string())
            .return_ok(Some(product("10234-BLK")));
        mock.expect_list().return_ok(vec![product("10234-BLK")]);
        mock.expect_count().return_ok(1);

        let client = mock.client();

        let fetched = client.get("10234-BLK".to_string()).await.unwrap();
        assert!(fetched.is_some());

        let view = client.list(Default::default()).await.unwrap();
        assert_eq!(view.len(), 1);

        assert_eq!(client.count().await.unwrap(), 1);

        mock.verify();
    }
}
