//! Product-specific catalog logic and record implementation.

pub mod error;
pub mod queries;
pub mod record;

pub use error::*;
pub use queries::*;

use crate::clients::ProductsClient;
use crate::framework::{CatalogActor, FrameworkError};
use crate::model::Product;

/// Seeds a product catalog actor and returns it with its client.
pub fn new(records: Vec<Product>) -> Result<(CatalogActor<Product>, ProductsClient), FrameworkError> {
    let (actor, generic_client) = CatalogActor::new(32, records)?;
    let client = ProductsClient::new(generic_client);

    Ok((actor, client))
}
