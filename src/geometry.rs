//! # Canvas Geometry
//!
//! Pure coordinate math for the stacked multi-page canvas: pages of a fixed
//! pixel width (height derived from the A4 aspect ratio) separated by a
//! fixed vertical gap. Converts between "global canvas Y" and
//! "page index + local Y" in both directions.
//!
//! Out-of-range inputs are clamped, never rejected: a global Y beyond the
//! last page still resolves to the last page.

use crate::model::DocumentConfig;

/// A4 paper dimensions in millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Standard screen DPI used for millimetre conversion.
const DPI: f64 = 96.0;

/// Derive a page's pixel height from its width, preserving the A4 aspect
/// ratio and rounding to a whole pixel.
pub fn page_height_for_width(page_width_px: f64) -> f64 {
    (page_width_px * (A4_HEIGHT_MM / A4_WIDTH_MM)).round()
}

/// Convert millimetres to (whole) pixels at 96 DPI.
pub fn mm_to_px(mm: f64) -> f64 {
    (mm * (DPI / 25.4)).round()
}

/// Convert pixels back to millimetres, to two decimal places.
pub fn px_to_mm(px: f64) -> f64 {
    (px / (DPI / 25.4) * 100.0).round() / 100.0
}

/// Resolved geometry for the whole canvas. Derived from
/// [`DocumentConfig`]; owns no item state and is cheap to rebuild whenever
/// the configuration changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub gap: f64,
    pub page_count: usize,
}

impl CanvasGeometry {
    /// Build geometry from a config, deriving page height from width.
    pub fn from_config(config: &DocumentConfig) -> Self {
        Self {
            page_width: config.page_width_px,
            page_height: page_height_for_width(config.page_width_px),
            gap: config.page_gap_px,
            page_count: config.total_pages,
        }
    }

    /// Geometry with an explicit page height, for callers that pass live
    /// pixel dimensions instead of deriving them.
    pub fn with_page_size(
        page_width: f64,
        page_height: f64,
        gap: f64,
        page_count: usize,
    ) -> Self {
        Self {
            page_width,
            page_height,
            gap,
            page_count,
        }
    }

    /// Total height of the stacked canvas:
    /// `page_height × pages + gap × (pages − 1)`.
    pub fn total_canvas_height(&self) -> f64 {
        if self.page_count == 0 {
            return 0.0;
        }
        self.page_height * self.page_count as f64 + self.gap * (self.page_count as f64 - 1.0)
    }

    /// Absolute Y origin of a page on the canvas. Page 1 starts at 0;
    /// every following page is offset by the cumulative height + gap of
    /// its predecessors.
    pub fn page_origin_y(&self, page: usize) -> f64 {
        if page <= 1 {
            return 0.0;
        }
        (self.page_height + self.gap) * (page as f64 - 1.0)
    }

    /// Which page a global Y coordinate falls in. Always returns a valid
    /// page index: out-of-range input clamps to the first/last page.
    pub fn page_from_global_y(&self, y_global: f64) -> usize {
        let spacing = self.page_height + self.gap;
        let page = (y_global / spacing).floor() as i64 + 1;
        page.clamp(1, self.page_count.max(1) as i64) as usize
    }

    /// Convert a global Y to a Y local to `page`. The result may be
    /// negative or exceed the page height if the caller passes a page the
    /// coordinate does not actually fall in; keeping the pair consistent
    /// is the caller's responsibility.
    pub fn local_y(&self, y_global: f64, page: usize) -> f64 {
        y_global - self.page_origin_y(page)
    }

    /// Convert a Y local to `page` into a global canvas Y.
    pub fn global_y(&self, y_local: f64, page: usize) -> f64 {
        y_local + self.page_origin_y(page)
    }
}
