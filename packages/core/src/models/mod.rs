//! Data Models
//!
//! Core data structures for the page-module editor:
//!
//! - [`Module`] - a positioned content block on a page
//! - [`ModuleType`] - the closed enumeration of module kinds
//! - [`ModuleContent`] - the tagged content payload, one variant per kind
//!
//! Content is a proper sum type; there is no separately stored type
//! discriminator to drift out of sync with the payload.

mod content;
mod module;

pub use content::{
    AccordionSection, ButtonItem, CalloutSeverity, ContactCard, ContactLayout, DividerSpacing,
    DividerStyle, GalleryImage, GalleryLayout, LinkItem, ModuleContent, VideoAspectRatio,
};
pub use module::{Module, ModuleCategory, ModuleType, DEFAULT_COLUMN_SPAN, SPAN_SNAP_SET};
