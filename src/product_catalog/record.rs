//! CatalogRecord trait implementation for the Product domain type.
//!
//! This module wires [`Product`] into the generic
//! [`CatalogActor`](crate::framework::CatalogActor): identity by item number,
//! matching via [`ProductCriteria`], and the vendor-list query the catalog
//! filter dropdown is built from.

use crate::framework::CatalogRecord;
use crate::model::Product;
use crate::product_catalog::queries::{ProductQuery, ProductQueryResult};
use crate::query::{self, ProductCriteria};

impl CatalogRecord for Product {
    type Key = String;
    type Criteria = ProductCriteria;
    type Query = ProductQuery;
    type QueryResult = ProductQueryResult;

    fn key(&self) -> String {
        self.item_number.clone()
    }

    fn matches(&self, criteria: &ProductCriteria) -> bool {
        criteria.matches(self)
    }

    // Products have no view order; the default `select` keeps input order.

    fn run_query(records: &[Self], query: ProductQuery) -> ProductQueryResult {
        match query {
            ProductQuery::Vendors => ProductQueryResult::Vendors(query::vendor_options(records)),
        }
    }
}
