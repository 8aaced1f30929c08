//! Drag Interpretation
//!
//! Two pure, synchronous pieces sit between raw pointer gestures and the
//! module list editor:
//!
//! - [`session`] - the drag session tracker, a small state machine turning
//!   start/over/end gestures into one structured [`DragEndEvent`]
//! - [`migrate`] - the item migration engine, which applies that event to
//!   the module list (module reorder, in-container reorder, or
//!   cross-container item migration with shape conversion)
//!
//! Neither piece holds a reference to the editor's list; the editor passes
//! the current list in and swaps the returned list atomically.

pub mod migrate;
pub mod session;

pub use migrate::{apply_drag_end, next_gradient, GRADIENT_PALETTE};
pub use session::{
    DragEndEvent, DragPayload, DragSession, DragSource, DraggableItem, DropTarget, ItemKind,
};
