//! CatalogRecord trait implementation for the Order domain type.
//!
//! Orders are the one catalog with a mandatory view order: every listing is
//! sorted most-recent-first, so `select` is overridden to run the full
//! filter-and-sort instead of the default order-preserving filter.

use crate::framework::CatalogRecord;
use crate::model::Order;
use crate::order_catalog::queries::{OrderQuery, OrderQueryResult};
use crate::query::{self, OrderCriteria};

impl CatalogRecord for Order {
    type Key = String;
    type Criteria = OrderCriteria;
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;

    fn key(&self) -> String {
        self.order_number.clone()
    }

    fn matches(&self, criteria: &OrderCriteria) -> bool {
        criteria.matches(self)
    }

    /// Listing views are always sorted descending by creation date.
    fn select(records: &[Self], criteria: &OrderCriteria) -> Vec<Self> {
        query::filter_orders(records, criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    fn run_query(records: &[Self], query: OrderQuery) -> OrderQueryResult {
        match query {
            OrderQuery::Recent(n) => OrderQueryResult::Recent(
                query::top_recent(records, n).into_iter().cloned().collect(),
            ),
        }
    }
}
