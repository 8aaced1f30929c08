//! Editor Error Types
//!
//! Error taxonomy for the module list editor. Store-facing failures are
//! caught at the editor boundary and converted here; the drag tracker,
//! migration engine, and resize controller are pure and infallible.

use thiserror::Error;

/// Module list editor errors.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Loading the page's modules from the store failed; the working list
    /// keeps whatever it held before.
    #[error("Failed to load modules for page {page_id}: {source}")]
    LoadFailed {
        page_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The delete phase of a save failed; the upsert phase did not run, so
    /// no module slated for deletion was resurrected.
    #[error("Save failed during delete phase: {0}")]
    DeletePhaseFailed(#[source] anyhow::Error),

    /// The upsert phase failed after a successful delete phase. The store
    /// may hold fewer modules than the working list describes until the
    /// whole save is retried.
    #[error("Save failed during upsert phase: {0}")]
    UpsertPhaseFailed(#[source] anyhow::Error),

    /// A save was requested while another save was in flight.
    #[error("A save is already in progress")]
    SaveInFlight,

    /// `cancel` was called with unsaved changes and no confirmation.
    #[error("Unsaved changes; confirm before discarding")]
    UnsavedChanges,

    /// A mutating operation was called on a read-only editor.
    #[error("Editor is read-only")]
    ReadOnly,

    /// Module not found by id.
    #[error("Module not found: {id}")]
    ModuleNotFound { id: String },
}

impl EditorError {
    /// Create a load failure error.
    pub fn load_failed(page_id: impl Into<String>, source: anyhow::Error) -> Self {
        Self::LoadFailed {
            page_id: page_id.into(),
            source,
        }
    }

    /// Create a module not found error.
    pub fn module_not_found(id: impl Into<String>) -> Self {
        Self::ModuleNotFound { id: id.into() }
    }
}
