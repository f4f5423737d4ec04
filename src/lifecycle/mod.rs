//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the application's
//! runtime environment:
//!
//! - **Actor lifecycle management**: Seeding, starting, and shutting down actors
//! - **System orchestration**: Wiring client dependencies and cross-catalog reads
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`RetailSystem`] - The primary orchestrator that manages all actors
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod retail_system;
pub mod tracing;

pub use retail_system::*;
pub use tracing::*;
