//! Bundled fixture data.
//!
//! The JSON files under `data/` are compiled into the binary and parsed once
//! at startup. The loader trusts the data contract (valid enum codes,
//! well-formed timestamps) and reports a parse failure as a typed error;
//! key uniqueness is the one contract checked later, at catalog seeding.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Order, Product, Store, User};

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const ORDERS_JSON: &str = include_str!("../../data/orders.json");
const STORES_JSON: &str = include_str!("../../data/stores.json");
const USERS_JSON: &str = include_str!("../../data/users.json");

/// Errors that can occur while loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A fixture file did not parse as its record type.
    #[error("Malformed fixture {name}: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The full record collections the system is seeded with.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub stores: Vec<Store>,
    pub users: Vec<User>,
}

impl FixtureSet {
    /// Parses the bundled fixture files.
    pub fn bundled() -> Result<Self, FixtureError> {
        Ok(Self {
            products: parse("products.json", PRODUCTS_JSON)?,
            orders: parse("orders.json", ORDERS_JSON)?,
            stores: parse("stores.json", STORES_JSON)?,
            users: parse("users.json", USERS_JSON)?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Malformed { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_fixtures_parse() {
        let fixtures = FixtureSet::bundled().expect("bundled fixtures must parse");
        assert!(!fixtures.products.is_empty());
        assert!(!fixtures.orders.is_empty());
        assert!(!fixtures.stores.is_empty());
        assert!(!fixtures.users.is_empty());
    }

    #[test]
    fn fixture_keys_are_unique() {
        let fixtures = FixtureSet::bundled().unwrap();

        let items: HashSet<&str> = fixtures
            .products
            .iter()
            .map(|p| p.item_number.as_str())
            .collect();
        assert_eq!(items.len(), fixtures.products.len());

        let orders: HashSet<&str> = fixtures
            .orders
            .iter()
            .map(|o| o.order_number.as_str())
            .collect();
        assert_eq!(orders.len(), fixtures.orders.len());
    }

    #[test]
    fn fixtures_include_a_retired_item_reference() {
        // One order deliberately points at an item the catalog no longer
        // carries, so the absent-join path stays exercised end to end.
        let fixtures = FixtureSet::bundled().unwrap();
        let orphaned = fixtures.orders.iter().any(|o| {
            !fixtures
                .products
                .iter()
                .any(|p| p.item_number == o.item_number)
        });
        assert!(orphaned);
    }
}
