//! # Observability & Tracing
//!
//! Structured logging for the whole actor system, configured once at startup
//! by [`setup_tracing`].
//!
//! Every catalog logs its lifecycle (startup size, shutdown) at `info` and
//! each served request at `debug` with structured fields: the record type,
//! the key or criteria, and the hit count. Client entry points are
//! instrumented, so a request shows up as a span around the actor-side line.
//!
//! The format is compact and hides module paths; the `record_type` field
//! carries the same information in fewer characters.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show criteria and hit counts per request
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=stockroom::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a filtered order listing looks like:
//!
//! ```text
//! DEBUG order_browse: Sending request
//! DEBUG List record_type="Order" criteria=OrderCriteria { .. } hits=3
//! INFO  order_browse: Processing orders hits=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - record_type carries it
        .compact() // Compact format shows spans inline (e.g., "order_browse:list")
        .init();
}
