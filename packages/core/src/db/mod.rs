//! Persistence Layer
//!
//! This module defines the record-store abstraction the editor reconciles
//! against:
//!
//! - [`ModuleStore`] - async trait: ordered list, bulk delete, bulk upsert
//! - [`MemoryStore`] - in-memory implementation with failure injection,
//!   used by the test suite and by embedders without a backend
//!
//! The production backend (a hosted schema-defined table store) lives in
//! the host application as a `ModuleStore` adapter; this crate owns no
//! wire protocol.

mod memory_store;
mod module_store;

pub use memory_store::{MemoryStore, StoreCallCounts};
pub use module_store::ModuleStore;
