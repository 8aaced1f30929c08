//! Page Module Data Structures
//!
//! This module defines the core [`Module`] struct (a positioned content
//! block on a page) and the [`ModuleType`] enumeration that drives the
//! "add module" menu and default-content schema.
//!
//! # Architecture
//!
//! - **Closed content model**: a module's payload is a
//!   [`ModuleContent`] sum type; `Module::module_type()` is derived from the
//!   variant rather than stored as a separately mutable discriminator.
//! - **12-unit grid**: `column_span` is one of {3, 4, 6, 8, 12}; legacy rows
//!   with a missing or out-of-set span are coerced to 12 at load time.
//! - **Dense ordering at save**: `sort_order` may carry gaps in memory; the
//!   editor rewrites it to the dense `0..N-1` range when persisting.
//!
//! # Examples
//!
//! ```rust
//! use pagegrid_core::models::{Module, ModuleContent, ModuleType};
//!
//! let module = Module::new("page-1", ModuleType::Links, 0);
//! assert_eq!(module.module_type(), ModuleType::Links);
//! assert!(matches!(module.content, ModuleContent::Links { ref items } if items.is_empty()));
//! assert_eq!(module.column_span, 12);
//! ```

use crate::models::content::{
    CalloutSeverity, ContactLayout, DividerSpacing, DividerStyle, GalleryLayout, ModuleContent,
    VideoAspectRatio,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The set of column spans a module may snap to on the 12-unit grid.
///
/// 3 is a transient narrow span only reachable through drag-resize; the
/// "add module" defaults never produce it.
pub const SPAN_SNAP_SET: [i64; 5] = [3, 4, 6, 8, 12];

/// Default span for legacy rows that predate the grid layout.
pub const DEFAULT_COLUMN_SPAN: i64 = 12;

fn default_column_span() -> i64 {
    DEFAULT_COLUMN_SPAN
}

/// Menu bucket a module type is listed under in the "add module" picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Content,
    Media,
    Layout,
    People,
}

/// Closed enumeration of module kinds.
///
/// This is the single source of truth for the add-module menu: each kind
/// maps to a human label, a menu category, a total default content value,
/// and a default column span. Adding a new kind means adding it here, to
/// [`ModuleContent`], and to the host's renderer dispatch; nothing else
/// enumerates kinds by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleType {
    Links,
    Gallery,
    FileBrowser,
    RichText,
    LinkButtons,
    Divider,
    Accordion,
    Callout,
    Video,
    ContactCards,
    EmbedCode,
}

impl ModuleType {
    /// Every module kind, in menu order.
    pub const ALL: [ModuleType; 11] = [
        ModuleType::RichText,
        ModuleType::Links,
        ModuleType::LinkButtons,
        ModuleType::Accordion,
        ModuleType::Callout,
        ModuleType::Gallery,
        ModuleType::Video,
        ModuleType::EmbedCode,
        ModuleType::FileBrowser,
        ModuleType::Divider,
        ModuleType::ContactCards,
    ];

    /// Human-readable label for the add-module menu.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleType::Links => "Links",
            ModuleType::Gallery => "Image Gallery",
            ModuleType::FileBrowser => "File Browser",
            ModuleType::RichText => "Rich Text",
            ModuleType::LinkButtons => "Link Buttons",
            ModuleType::Divider => "Divider",
            ModuleType::Accordion => "Accordion",
            ModuleType::Callout => "Callout",
            ModuleType::Video => "Video",
            ModuleType::ContactCards => "Contact Cards",
            ModuleType::EmbedCode => "Embed Code",
        }
    }

    /// Menu category bucket.
    pub fn category(&self) -> ModuleCategory {
        match self {
            ModuleType::RichText
            | ModuleType::Links
            | ModuleType::LinkButtons
            | ModuleType::Accordion
            | ModuleType::Callout => ModuleCategory::Content,
            ModuleType::Gallery
            | ModuleType::Video
            | ModuleType::EmbedCode
            | ModuleType::FileBrowser => ModuleCategory::Media,
            ModuleType::Divider => ModuleCategory::Layout,
            ModuleType::ContactCards => ModuleCategory::People,
        }
    }

    /// Default content for a freshly added module of this kind.
    ///
    /// Total over the enumeration: every variant is fully initialized, with
    /// list fields materialized as empty lists rather than left absent.
    pub fn default_content(&self) -> ModuleContent {
        match self {
            ModuleType::Links => ModuleContent::Links { items: Vec::new() },
            ModuleType::Gallery => ModuleContent::Gallery {
                images: Vec::new(),
                layout: GalleryLayout::default(),
            },
            ModuleType::FileBrowser => ModuleContent::FileBrowser { folder_path: None },
            ModuleType::RichText => ModuleContent::RichText {
                body_html: String::new(),
            },
            ModuleType::LinkButtons => ModuleContent::LinkButtons {
                buttons: Vec::new(),
            },
            ModuleType::Divider => ModuleContent::Divider {
                style: DividerStyle::default(),
                spacing: DividerSpacing::default(),
            },
            ModuleType::Accordion => ModuleContent::Accordion {
                sections: Vec::new(),
                allow_multiple_open: false,
            },
            ModuleType::Callout => ModuleContent::Callout {
                severity: CalloutSeverity::default(),
                title: None,
                message: String::new(),
            },
            ModuleType::Video => ModuleContent::Video {
                url: String::new(),
                title: None,
                aspect_ratio: VideoAspectRatio::default(),
            },
            ModuleType::ContactCards => ModuleContent::ContactCards {
                cards: Vec::new(),
                layout: ContactLayout::default(),
            },
            ModuleType::EmbedCode => ModuleContent::EmbedCode {
                markup: String::new(),
                min_height: 200,
            },
        }
    }

    /// Initial column span when a module of this kind is added.
    ///
    /// Link buttons start at half width; everything else starts full width.
    pub fn default_column_span(&self) -> i64 {
        match self {
            ModuleType::LinkButtons => 6,
            _ => DEFAULT_COLUMN_SPAN,
        }
    }
}

/// A positioned content block on a page.
///
/// # Fields
///
/// - `id`: UUID string, generated when the module is created in memory
/// - `page_id`: owning page (foreign reference, not owned)
/// - `title`: optional display label
/// - `content`: variant payload; the module's type is derived from it
/// - `sort_order`: position among siblings; rewritten dense at save time
/// - `column_span`: width on the 12-unit grid, member of [`SPAN_SNAP_SET`]
/// - `row_index`: reserved for layout; stored but unused by layout logic
/// - `created_at` / `modified_at`: stamped by the editor on mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,

    pub page_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub content: ModuleContent,

    #[serde(default)]
    pub sort_order: i64,

    /// Legacy rows may omit this field; serde coerces to 12 on load.
    #[serde(default = "default_column_span")]
    pub column_span: i64,

    /// Legacy rows may omit this field; serde coerces to 0 on load.
    #[serde(default)]
    pub row_index: i64,

    pub created_at: DateTime<Utc>,

    pub modified_at: DateTime<Utc>,
}

impl Module {
    /// Create a new in-memory module with a generated id and default content
    /// for its kind.
    ///
    /// The module exists only in the editor's working list until an explicit
    /// save reconciles it against the store.
    pub fn new(page_id: impl Into<String>, module_type: ModuleType, sort_order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            page_id: page_id.into(),
            title: None,
            content: module_type.default_content(),
            sort_order,
            column_span: module_type.default_column_span(),
            row_index: 0,
            created_at: now,
            modified_at: now,
        }
    }

    /// The module's kind, derived from its content variant.
    pub fn module_type(&self) -> ModuleType {
        match self.content {
            ModuleContent::Links { .. } => ModuleType::Links,
            ModuleContent::Gallery { .. } => ModuleType::Gallery,
            ModuleContent::FileBrowser { .. } => ModuleType::FileBrowser,
            ModuleContent::RichText { .. } => ModuleType::RichText,
            ModuleContent::LinkButtons { .. } => ModuleType::LinkButtons,
            ModuleContent::Divider { .. } => ModuleType::Divider,
            ModuleContent::Accordion { .. } => ModuleType::Accordion,
            ModuleContent::Callout { .. } => ModuleType::Callout,
            ModuleContent::Video { .. } => ModuleType::Video,
            ModuleContent::ContactCards { .. } => ModuleType::ContactCards,
            ModuleContent::EmbedCode { .. } => ModuleType::EmbedCode,
        }
    }

    /// Coerce legacy or malformed row values to safe defaults.
    ///
    /// Applied by the editor after every store load: a `column_span` outside
    /// the snap set becomes 12, a negative `row_index` becomes 0. Rows are
    /// never rejected for these fields.
    pub fn normalize(&mut self) {
        if !SPAN_SNAP_SET.contains(&self.column_span) {
            self.column_span = DEFAULT_COLUMN_SPAN;
        }
        if self.row_index < 0 {
            self.row_index = 0;
        }
    }
}
