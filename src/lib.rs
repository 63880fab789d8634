//! # Maquette
//!
//! A page-native auto-layout engine for interactive document editors.
//!
//! Editors that fake pagination with one infinite canvas spend their lives
//! reconciling "where the user dropped something" with "which page that
//! actually is". Maquette keeps the page as the fundamental unit: items
//! carry a page index and page-local coordinates, and the continuous
//! stacked-canvas coordinate exists only transiently while resolving drags
//! across page boundaries.
//!
//! The automatic placement pass re-packs a page's items with a row/shelf
//! heuristic — deliberately not an optimal rectangle packer — and spills
//! what doesn't fit into an auxiliary margin region beside the page.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]     — Items, geometry config, layout documents
//!       ↓
//!   [geometry]  — Global canvas Y ↔ page index + local Y
//!       ↓
//!   [layout]    — Shelf packing → page fitting → overflow packing
//!       ↓
//!   [store]     — Copy-on-write snapshot + replace-all persistence
//! ```
//!
//! Drag events bypass the layout pipeline and go through [`reconcile`],
//! which may silently retarget an item's page.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod reconcile;
pub mod store;

pub use error::MaquetteError;
pub use geometry::CanvasGeometry;
pub use layout::{LayoutEngine, LayoutMode, LayoutParams};
pub use model::{DocumentConfig, Item, LayoutDocument};
pub use reconcile::{reconcile_drag, ReconciledPosition};
pub use store::{ItemStore, JsonFileStore, MemoryStore, Workspace};

/// Run one auto-layout pass over a document: a single page when `page` is
/// given, otherwise every page. Advances the document's layout mode the
/// same way the interactive action does.
pub fn layout_document(document: &LayoutDocument, page: Option<usize>) -> LayoutDocument {
    let geometry = CanvasGeometry::from_config(&document.config);
    let engine = LayoutEngine::with_params(LayoutParams {
        margin_width: document.config.margin_width_px,
        ..LayoutParams::default()
    });
    let items = match page {
        Some(page) => engine.layout_page(&document.items, page, &geometry, document.layout_mode),
        None => engine.layout_all_pages(&document.items, &geometry, document.layout_mode),
    };
    LayoutDocument {
        config: document.config,
        layout_mode: document.layout_mode.next(),
        items,
    }
}

/// Parse a JSON layout document, run one auto-layout pass, and serialize
/// the result. This is the primary headless entry point.
pub fn layout_document_json(json: &str, page: Option<usize>) -> Result<String, MaquetteError> {
    let document: LayoutDocument = serde_json::from_str(json)?;
    let updated = layout_document(&document, page);
    Ok(serde_json::to_string_pretty(&updated)?)
}
