//! Collection-level queries for the order catalog.

/// Collection-level read queries for the order catalog.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// The `n` most recently created orders, for the dashboard summary panel.
    Recent(usize),
}

/// Results from OrderQueries - variants match 1:1 with OrderQuery.
#[derive(Debug, Clone)]
pub enum OrderQueryResult {
    /// Result from the Recent query.
    Recent(Vec<crate::model::Order>),
}
