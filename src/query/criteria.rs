//! Filter criteria supplied by the listing views.
//!
//! Criteria default to "no filter": an empty search string matches every
//! record, and the `All` filter variants pass every record through. The
//! matching rules themselves live here so the engine functions and the
//! catalog actors share one definition.

use serde::{Deserialize, Serialize};

use crate::model::{Order, OrderStatus, Product};

/// Case-insensitive substring test using simple lowercase folding.
/// `needle` must already be lowercased.
pub(crate) fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Vendor gate for product listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VendorFilter {
    #[default]
    All,
    Only(String),
}

impl VendorFilter {
    pub fn matches(&self, vendor: &str) -> bool {
        match self {
            VendorFilter::All => true,
            VendorFilter::Only(wanted) => wanted == vendor,
        }
    }
}

/// Status gate for order listings.
///
/// The recognized values are the [`OrderStatus`] variants themselves; there
/// is no separate filter vocabulary to drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Active search/filter inputs for the product listing views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductCriteria {
    pub search: String,
    pub vendor: VendorFilter,
}

impl ProductCriteria {
    pub fn new(search: impl Into<String>, vendor: VendorFilter) -> Self {
        Self {
            search: search.into(),
            vendor,
        }
    }

    /// A product matches when the search text is a substring of its title,
    /// item number, or color (case-insensitive), and the vendor gate passes.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains_fold(&product.title, &needle)
            || contains_fold(&product.item_number, &needle)
            || contains_fold(&product.color, &needle);
        matches_search && self.vendor.matches(&product.vendor)
    }
}

/// Active search/filter inputs for the order listing views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderCriteria {
    pub search: String,
    pub status: StatusFilter,
}

impl OrderCriteria {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// An order matches when the search text is a substring of its order
    /// number, customer name, or item number (case-insensitive), and the
    /// status gate passes.
    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains_fold(&order.order_number, &needle)
            || contains_fold(&order.customer_name, &needle)
            || contains_fold(&order.item_number, &needle);
        matches_search && self.status.matches(order.order_status)
    }
}
