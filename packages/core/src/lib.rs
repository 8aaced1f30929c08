//! PageGrid Core - Page Module Editor
//!
//! This crate provides the business-logic core of the PageGrid hub CMS:
//! the drag-and-drop, multi-container page-module editor.
//!
//! # Architecture
//!
//! - **Closed content model**: module payloads are a tagged sum type, one
//!   variant per module kind; the kind is derived from the payload
//! - **Pure drag core**: the session tracker and migration engine are
//!   synchronous and infallible; they take the current list and return a
//!   new one for the editor to swap atomically
//! - **Diff-based persistence**: the editor reconciles its working list
//!   against a snapshot on explicit save (bulk delete of removed ids, bulk
//!   upsert with dense ordering, reload)
//! - **Abstract store**: persistence is an async trait; the hosted backend
//!   adapter lives in the host application
//!
//! # Modules
//!
//! - [`models`] - data structures (Module, ModuleType, content variants)
//! - [`drag`] - drag session tracker and item migration engine
//! - [`services`] - module list editor, resize controller, errors
//! - [`db`] - ModuleStore trait and the in-memory implementation

pub mod db;
pub mod drag;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::*;
pub use drag::*;
pub use models::*;
pub use services::*;
