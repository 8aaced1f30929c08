//! ModuleStore Trait - Persistence Abstraction Layer
//!
//! This module defines the `ModuleStore` trait that abstracts record-store
//! operations for page modules. The editor's business logic never sees a
//! concrete backend; a hosted backend-as-a-service adapter and the
//! in-memory store both implement this trait.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: all methods are async so embedded and network
//!    backends share one contract
//! 2. **Ownership Semantics**: `upsert_modules` takes ownership of the rows
//!    to avoid cloning on the hot save path (caller clones if it needs to
//!    retain them)
//! 3. **Error Handling**: `anyhow::Result` for flexible backend error
//!    context; the editor converts to its own error type at the boundary

use crate::models::Module;
use anyhow::Result;
use async_trait::async_trait;

/// Abstraction layer for module persistence.
///
/// Implementations must be `Send + Sync` so futures can move between
/// threads.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    /// Fetch all modules for a page, ordered ascending by `sort_order`.
    ///
    /// Rows with equal `sort_order` keep a stable relative order (ties are
    /// broken by list index downstream).
    async fn list_modules(&self, page_id: &str) -> Result<Vec<Module>>;

    /// Delete the modules with the given ids.
    ///
    /// Ids with no matching row are ignored.
    async fn delete_modules(&self, ids: &[String]) -> Result<()>;

    /// Insert or fully replace each module, keyed by `id`.
    ///
    /// Absence of a matching id is an insert; presence is a full-row
    /// replace.
    async fn upsert_modules(&self, modules: Vec<Module>) -> Result<()>;
}
