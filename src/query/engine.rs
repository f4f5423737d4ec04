//! Filtering, sorting, joining, and aggregation over the in-memory catalogs.
//!
//! Results borrow from the input slice, so callers hand back the very records
//! they were given. Sorting is stable throughout: records with equal sort
//! keys keep their relative input order.

use crate::model::{Order, OrderStatus, OrderSummary, Product, StoreInventory};
use crate::query::criteria::{contains_fold, OrderCriteria, ProductCriteria};

/// Filters the product collection. Input order is preserved; products have
/// no default sort.
pub fn filter_products<'a>(
    products: &'a [Product],
    criteria: &ProductCriteria,
) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}

/// Filters the order collection and sorts the result descending by creation
/// date, most recent first.
pub fn filter_orders<'a>(orders: &'a [Order], criteria: &OrderCriteria) -> Vec<&'a Order> {
    let mut hits: Vec<&Order> = orders.iter().filter(|o| criteria.matches(o)).collect();
    hits.sort_by(|a, b| b.create_date.cmp(&a.create_date));
    hits
}

/// The `n` most recently created orders. A collection shorter than `n`
/// comes back whole.
pub fn top_recent(orders: &[Order], n: usize) -> Vec<&Order> {
    let mut all: Vec<&Order> = orders.iter().collect();
    all.sort_by(|a, b| b.create_date.cmp(&a.create_date));
    all.truncate(n);
    all
}

/// Computes the dashboard aggregate in one pass over each collection.
///
/// Cancelled and shipped orders contribute to the total but to none of the
/// per-status counters.
pub fn summarize(orders: &[Order], products: &[Product]) -> OrderSummary {
    let mut summary = OrderSummary {
        total_orders: orders.len(),
        total_products: products.len(),
        ..OrderSummary::default()
    };
    for order in orders {
        match order.order_status {
            OrderStatus::Processing => summary.processing_orders += 1,
            OrderStatus::Available => summary.available_orders += 1,
            OrderStatus::NotAvailable => summary.not_available_orders += 1,
            OrderStatus::Cancelled | OrderStatus::Shipped => {}
        }
    }
    summary.total_inventory = products
        .iter()
        .map(|p| u64::from(p.company_on_hand))
        .sum();
    summary
}

/// Best-effort join from an order to its product: first product whose item
/// number matches. An order referencing a retired item resolves to `None`.
pub fn product_for_order<'a>(order: &Order, products: &'a [Product]) -> Option<&'a Product> {
    products.iter().find(|p| p.item_number == order.item_number)
}

/// Distinct vendors in first-seen order, for the catalog filter dropdown.
pub fn vendor_options(products: &[Product]) -> Vec<String> {
    let mut vendors: Vec<String> = Vec::new();
    for product in products {
        if !vendors.contains(&product.vendor) {
            vendors.push(product.vendor.clone());
        }
    }
    vendors
}

/// Search used by the inventory grid: title or item number only.
pub fn search_inventory<'a>(products: &'a [Product], search: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| contains_fold(&p.title, &needle) || contains_fold(&p.item_number, &needle))
        .collect()
}

/// Stock entry for one product at one store, if the store carries it.
pub fn store_quantity<'a>(product: &'a Product, store_number: &str) -> Option<&'a StoreInventory> {
    product
        .inventory
        .iter()
        .find(|inv| inv.store_number == store_number)
}
