use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Products are loaded once from fixture data and never mutated afterwards.
/// `item_number` is the unique identity key used for lookups and for joining
/// orders to their product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub item_number: String,
    pub style_number: String,
    pub title: String,
    pub color: String,
    pub short_description: String,
    pub vendor: String,
    pub price: f64,
    pub markdown: bool,
    pub company_on_hand: u32,
    pub local_on_hand: u32,
    /// Per-store stock levels. A store with no entry simply does not carry
    /// the item.
    #[serde(default)]
    pub inventory: Vec<StoreInventory>,
}

/// Stock level for one product at one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInventory {
    pub store_number: String,
    pub size: String,
    pub quantity: u32,
    pub available: bool,
}
