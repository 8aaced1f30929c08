//! Business Services
//!
//! This module contains the editor-side business logic:
//!
//! - [`ModuleListEditor`] - owns the working module list for a page,
//!   tracks dirty state against a snapshot, and reconciles on save
//! - [`resize`] - the column-span resize controller for the 12-unit grid
//! - [`EditorError`] - the error taxonomy for store-facing operations
//!
//! Services coordinate between the persistence layer and the host UI,
//! keeping every list mutation synchronous and every store round trip
//! behind an explicit `load`/`save`.

pub mod editor;
pub mod error;
pub mod resize;

pub use editor::ModuleListEditor;
pub use error::EditorError;
pub use resize::{snap_span, SpanResize, GRID_COLUMNS};
