//! Order-specific catalog logic and record implementation.

pub mod error;
pub mod queries;
pub mod record;

pub use error::*;
pub use queries::*;

use crate::clients::{OrdersClient, ProductsClient};
use crate::framework::{CatalogActor, FrameworkError};
use crate::model::Order;

/// Seeds an order catalog actor and returns it with its client.
///
/// The client carries a products client so order views can resolve their
/// best-effort product join.
pub fn new(
    records: Vec<Order>,
    products: ProductsClient,
) -> Result<(CatalogActor<Order>, OrdersClient), FrameworkError> {
    let (actor, generic_client) = CatalogActor::new(32, records)?;
    let client = OrdersClient::new(generic_client, products);

    Ok((actor, client))
}
