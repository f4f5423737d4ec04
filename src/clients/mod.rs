//! Type-safe wrappers around [`CatalogClient`](crate::framework::CatalogClient).

pub mod orders_client;
pub mod products_client;
pub mod stores_client;
pub mod traits;

pub use orders_client::*;
pub use products_client::*;
pub use stores_client::*;
pub use traits::*;
