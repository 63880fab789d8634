//! # Document Model
//!
//! The input representation for the layout engine. A document is a flat,
//! ordered collection of rectangular items, each assigned to a page of a
//! vertically stacked multi-page canvas. This is designed to be easily
//! produced by an editor frontend, a seed-data file, or direct JSON
//! construction.
//!
//! There is one critical property: **items carry page-local coordinates.**
//! The page index plus `(x, y)` is the persistent position; the continuous
//! "global canvas" coordinate only exists transiently (see
//! [`crate::geometry`]) while mapping drags across page boundaries.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutMode;

/// A rectangular item placed on a page: a product image or an annotated
/// shape. Layout passes mutate only `x`, `y` and `page`; identity, size
/// and display flags are never touched by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque stable identifier.
    pub id: String,

    /// Position in page-local pixels (top-left corner).
    pub x: f64,
    pub y: f64,

    /// Fixed dimensions in pixels. Layout never resizes.
    pub width: f64,
    pub height: f64,

    /// 1-based page index. Always within `1..=total_pages`.
    pub page: usize,

    /// Source of the rendered image (rendering is an external collaborator).
    #[serde(default)]
    pub image_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Highlight-border badge, toggled from the inspector.
    #[serde(default)]
    pub has_border: bool,

    /// Discount-percentage badges (e.g. 10, 15, 20). Independent toggles;
    /// irrelevant to placement.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentages: Vec<u32>,
}

impl Item {
    /// Create an item with the placement-relevant fields; display flags
    /// start empty.
    pub fn new(id: &str, x: f64, y: f64, width: f64, height: f64, page: usize) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            width,
            height,
            page,
            image_url: String::new(),
            title: None,
            brand: None,
            has_border: false,
            percentages: Vec::new(),
        }
    }
}

/// Global geometry configuration for the document canvas.
///
/// Changing these values does not retroactively re-layout existing items;
/// positions are only recomputed when a layout trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    /// Number of pages in the document.
    #[serde(default = "default_total_pages")]
    pub total_pages: usize,

    /// Page width in pixels. Page height derives from this via the A4
    /// aspect ratio (see [`crate::geometry::page_height_for_width`]).
    #[serde(default = "default_page_width")]
    pub page_width_px: f64,

    /// Vertical gap between stacked pages, in pixels.
    #[serde(default = "default_page_gap")]
    pub page_gap_px: f64,

    /// Width of the auxiliary margin region flanking the page, in pixels.
    /// Overflow rows are packed into `margin_width_px - overflow_gutter`
    /// of it, starting at `page_width_px + overflow_gutter`.
    #[serde(default = "default_margin_width")]
    pub margin_width_px: f64,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            total_pages: default_total_pages(),
            page_width_px: default_page_width(),
            page_gap_px: default_page_gap(),
            margin_width_px: default_margin_width(),
        }
    }
}

fn default_total_pages() -> usize {
    3
}

fn default_page_width() -> f64 {
    600.0
}

fn default_page_gap() -> f64 {
    50.0
}

fn default_margin_width() -> f64 {
    600.0
}

/// A complete persistable document: geometry config, the active layout
/// mode, and the full item collection. This is the unit the CLI reads and
/// writes and the unit the store persists (replace-all semantics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    #[serde(default)]
    pub config: DocumentConfig,

    #[serde(default)]
    pub layout_mode: LayoutMode,

    #[serde(default)]
    pub items: Vec<Item>,
}
