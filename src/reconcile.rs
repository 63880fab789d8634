//! # Drag Reconciliation
//!
//! A manual drag hands the engine a candidate position local to the item's
//! *pre-drag* page. The drop point may actually sit on a different page of
//! the stacked canvas, so the position is lifted to a global Y, the owning
//! page re-derived (clamped to the valid range), and the Y rebased onto the
//! new page. There is no collision resolution: manually dragged items may
//! overlap.

use crate::geometry::CanvasGeometry;

/// The committed outcome of a drag: possibly a new page, always a
/// position local to that page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconciledPosition {
    pub x: f64,
    pub y: f64,
    pub page: usize,
}

/// Resolve a drag released at `(x, y_local)` relative to `page`.
pub fn reconcile_drag(
    x: f64,
    y_local: f64,
    page: usize,
    geometry: &CanvasGeometry,
) -> ReconciledPosition {
    let y_global = geometry.global_y(y_local, page);
    let new_page = geometry.page_from_global_y(y_global);
    ReconciledPosition {
        x,
        y: geometry.local_y(y_global, new_page),
        page: new_page,
    }
}
