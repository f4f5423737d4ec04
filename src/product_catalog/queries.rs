//! Collection-level queries for the product catalog.
//!
//! These go beyond per-record filtering: they read the whole collection at
//! once and are handled by [`CatalogRecord::run_query`](crate::framework::CatalogRecord::run_query).

/// Collection-level read queries for the product catalog.
#[derive(Debug, Clone)]
pub enum ProductQuery {
    /// Distinct vendors in first-seen order, for the filter dropdown.
    Vendors,
}

/// Results from ProductQueries - variants match 1:1 with ProductQuery.
#[derive(Debug, Clone)]
pub enum ProductQueryResult {
    /// Result from the Vendors query.
    Vendors(Vec<String>),
}
