//! Store-specific catalog logic and record implementation.
//!
//! Stores are the simplest catalog: a handful of records, point lookups, and
//! a full listing for the store picker. There is no filtering vocabulary and
//! no collection-level query, so the unit types fill those slots.

pub mod error;
pub mod record;

pub use error::*;

use crate::clients::StoresClient;
use crate::framework::{CatalogActor, FrameworkError};
use crate::model::Store;

/// Seeds a store catalog actor and returns it with its client.
pub fn new(records: Vec<Store>) -> Result<(CatalogActor<Store>, StoresClient), FrameworkError> {
    let (actor, generic_client) = CatalogActor::new(32, records)?;
    let client = StoresClient::new(generic_client);

    Ok((actor, client))
}
