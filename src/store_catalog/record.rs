//! CatalogRecord trait implementation for the Store domain type.

use crate::framework::CatalogRecord;
use crate::model::Store;

impl CatalogRecord for Store {
    type Key = String;
    type Criteria = ();
    type Query = ();
    type QueryResult = ();

    fn key(&self) -> String {
        self.store_number.clone()
    }

    /// Stores have no filter vocabulary; every record passes.
    fn matches(&self, _criteria: &()) -> bool {
        true
    }

    fn run_query(_records: &[Self], _query: ()) {}
}
