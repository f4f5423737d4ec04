//! The query engine: pure, synchronous transformations from a record
//! collection plus filter criteria to the view collection a listing renders.
//!
//! Everything in this module is a total function of its arguments. Nothing
//! here performs I/O, retains state between calls, or mutates its input:
//! filtered views borrow from the source slice, so an element of a result is
//! the same record the caller passed in, not a copy.
//!
//! # Main Components
//!
//! - [`criteria`] - The filter inputs each listing view supplies.
//! - [`engine`] - Filtering, sorting, joining, and aggregation.
//! - [`badge`] - The total status-to-display mapping with its explicit
//!   fallback.

pub mod badge;
pub mod criteria;
pub mod engine;

pub use badge::*;
pub use criteria::*;
pub use engine::*;
