//! # Stockroom
//!
//! > **A retail inventory and order-management backbone in Rust.**
//!
//! This crate serves immutable product/order/store catalogs, loaded once
//! from bundled fixture data, through a small actor system. At its center
//! sits a pure query engine: every listing view is a deterministic
//! filter-and-sort over a collection that is never mutated after load.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a pure core inside an actor shell?
//!
//! The business rules here - search matching, status gating, recency
//! ordering, dashboard aggregation - are pure functions. Keeping them in
//! [`query`] means they are trivially testable and referentially
//! transparent: the same records and criteria always produce the same view.
//!
//! The actor shell exists for ownership, not for locking. Each catalog
//! actor holds its collection exclusively and processes requests
//! sequentially, so there is no `Mutex` anywhere; concurrent callers are
//! safe because nothing they can reach is mutable.
//!
//! ### Generics: The Power of `T`
//!
//! You'll see `CatalogActor<T: CatalogRecord>` everywhere. The message loop
//! is written **once** and serves Products, Orders, and Stores alike; each
//! record type contributes only its key, its matching rule, and its
//! collection-level queries.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each service defines its own error type (e.g., `OrderCatalogError`,
//! `SessionError`) built with `thiserror`. Absent values are never errors:
//! a missing product, an order pointing at a retired item, or an
//! unrecognized status code all come back as explicit `Option`s.
//!
//! ### 2. Read-Only Catalogs
//! Catalog actors are seeded at startup and answer only read requests.
//! The single piece of mutable state in the system - who is signed in and
//! which toasts are live - belongs to the two small stateful services.
//!
//! ### 3. Observability
//! `tracing` with structured fields throughout: catalogs log each request
//! at `debug`, clients are instrumented, and
//! [`lifecycle::setup_tracing`] wires the compact subscriber.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`query`])
//! The pure query engine: criteria, filtering, sorting, joins, aggregation,
//! and the total status-badge mapping. No I/O, no state.
//!
//! ### 2. The Engine Room ([`framework`])
//! The generic [`CatalogActor`](framework::CatalogActor) and
//! [`CatalogRecord`](framework::CatalogRecord) trait, plus
//! [`framework::mock`] for testing clients without spawning actors.
//!
//! ### 3. The Records ([`model`], [`fixtures`])
//! Serde-backed record types and the bundled fixture loader.
//!
//! ### 4. The Catalogs ([`product_catalog`], [`order_catalog`], [`store_catalog`])
//! Per-domain record wiring: identity keys, criteria, and collection-level
//! queries.
//!
//! ### 5. The Interface ([`clients`])
//! Domain clients wrapping the generic message passing, including the
//! order-to-product join.
//!
//! ### 6. The Services ([`session`], [`notify`])
//! The mock sign-in flow and the auto-expiring toast queue.
//!
//! ### 7. The Orchestrator ([`lifecycle`])
//! [`RetailSystem`](lifecycle::RetailSystem) seeds, wires, starts, and
//! shuts down the whole set.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod fixtures;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_catalog;
pub mod product_catalog;
pub mod query;
pub mod session;
pub mod store_catalog;
