//! Module Content Variants
//!
//! This module defines the closed set of content payloads a page module can
//! carry. Content is an internally tagged sum type (`kind` discriminator in
//! the serialized row), so a module's type is always derivable from its
//! payload and a type/content mismatch is unrepresentable.
//!
//! # Totality
//!
//! Every [`ModuleType`](crate::models::ModuleType) maps to a fully
//! initialized default content value: list-bearing variants always
//! materialize their list (`items: []`, `images: []`, ...) and layout
//! defaults, never a missing field.

use serde::{Deserialize, Serialize};

/// A single entry in a Links module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A single entry in a Link-Buttons module.
///
/// `gradient` is a color-pair token (e.g. `"from-blue-500 to-purple-600"`)
/// assigned from a fixed palette when the button is created or migrated in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub gradient: String,
}

/// A single image in a Gallery module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A single collapsible section in an Accordion module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionSection {
    pub id: String,
    pub title: String,
    pub body_html: String,
}

/// A single person card in a Contact-Cards module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Line style for a Divider module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Gradient,
}

/// Vertical spacing around a Divider module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerSpacing {
    Small,
    #[default]
    Medium,
    Large,
}

/// Severity level of a Callout module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Aspect ratio of an embedded video player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoAspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
}

/// Layout mode for a Gallery module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Carousel,
    Masonry,
}

/// Layout mode for a Contact-Cards module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactLayout {
    #[default]
    Grid,
    List,
}

/// Content payload of a page module, tagged by `kind`.
///
/// One variant per module type. The migration engine and any renderer match
/// exhaustively on this enum; adding a module type means adding a variant
/// here and a default in [`ModuleType::default_content`](crate::models::ModuleType::default_content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ModuleContent {
    Links {
        items: Vec<LinkItem>,
    },
    Gallery {
        images: Vec<GalleryImage>,
        layout: GalleryLayout,
    },
    FileBrowser {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        folder_path: Option<String>,
    },
    RichText {
        body_html: String,
    },
    LinkButtons {
        buttons: Vec<ButtonItem>,
    },
    Divider {
        style: DividerStyle,
        spacing: DividerSpacing,
    },
    Accordion {
        sections: Vec<AccordionSection>,
        allow_multiple_open: bool,
    },
    Callout {
        severity: CalloutSeverity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        message: String,
    },
    Video {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        aspect_ratio: VideoAspectRatio,
    },
    ContactCards {
        cards: Vec<ContactCard>,
        layout: ContactLayout,
    },
    EmbedCode {
        markup: String,
        min_height: i64,
    },
}
