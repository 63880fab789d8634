//! # Page-Aware Auto-Layout Engine
//!
//! This is the heart of maquette and the reason it exists.
//!
//! Items live on discrete pages with page-local coordinates; there is no
//! infinitely tall canvas to slice afterwards. An auto-layout pass for a
//! page is a three-stage pipeline:
//!
//! 1. **Shelf packing** ([`shelf`]) — the page's items, in the active sort
//!    order, are grouped into rows whose widths fit the content area.
//! 2. **Page fitting** ([`page_fit`]) — leading rows are accepted top-down
//!    until one crosses the vertical budget; that row and everything after
//!    it is rejected wholesale.
//! 3. **Overflow packing** ([`overflow`]) — rejected items are re-shelved
//!    into the auxiliary margin region beside the page; whatever still
//!    doesn't fit keeps its previous coordinates.
//!
//! The pass is pure: it borrows the current item collection and returns a
//! new one (copy-on-write), mutating only `x`, `y` and `page`. Running the
//! same pass twice with identical geometry yields identical coordinates.

pub mod overflow;
pub mod page_fit;
pub mod shelf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::CanvasGeometry;
use crate::model::Item;

/// Ordering heuristic applied to a page's items before shelving. Cycled
/// round-robin by repeated auto-layout invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    /// Keep insertion order.
    #[default]
    Insertion,
    /// Tallest items first.
    HeightDesc,
    /// Widest items first.
    WidthDesc,
}

impl LayoutMode {
    /// The next mode in the fixed three-step cycle.
    pub fn next(self) -> Self {
        match self {
            LayoutMode::Insertion => LayoutMode::HeightDesc,
            LayoutMode::HeightDesc => LayoutMode::WidthDesc,
            LayoutMode::WidthDesc => LayoutMode::Insertion,
        }
    }
}

/// Tunable spacing for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Inner padding on every page edge.
    pub padding: f64,
    /// Gap between items in a row and between rows.
    pub gap: f64,
    /// Fixed offset between the page's right edge and the auxiliary
    /// overflow region.
    pub overflow_gutter: f64,
    /// Width of the auxiliary margin region flanking the page, gutter
    /// included.
    pub margin_width: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            padding: 10.0,
            gap: 5.0,
            overflow_gutter: 10.0,
            margin_width: 600.0,
        }
    }
}

/// The auto-layout engine. Stateless apart from its spacing parameters;
/// geometry arrives with every call so the caller controls live pixel
/// dimensions.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    params: LayoutParams,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Re-pack a single page. Returns the full updated collection; items
    /// on other pages pass through untouched.
    ///
    /// Only items whose current local position lies inside the page
    /// bounds participate: items already parked in the auxiliary overflow
    /// region (x beyond the page width) are not re-shelved.
    pub fn layout_page(
        &self,
        items: &[Item],
        page: usize,
        geometry: &CanvasGeometry,
        mode: LayoutMode,
    ) -> Vec<Item> {
        let mut updated = items.to_vec();
        self.layout_page_in_place(&mut updated, page, geometry, mode);
        updated
    }

    /// Re-pack every page from 1 to the configured total, in page order,
    /// folding the results into one updated collection.
    pub fn layout_all_pages(
        &self,
        items: &[Item],
        geometry: &CanvasGeometry,
        mode: LayoutMode,
    ) -> Vec<Item> {
        let mut updated = items.to_vec();
        for page in 1..=geometry.page_count {
            self.layout_page_in_place(&mut updated, page, geometry, mode);
        }
        updated
    }

    fn layout_page_in_place(
        &self,
        items: &mut [Item],
        page: usize,
        geometry: &CanvasGeometry,
        mode: LayoutMode,
    ) {
        let LayoutParams {
            padding,
            gap,
            overflow_gutter,
            margin_width,
        } = self.params;

        // Items parked outside the page bounds stay where a previous pass
        // left them. Overflow placements sit at x >= page_width, so the
        // x bound is what keeps margin-parked items out of a repeat pass.
        let mut ordered: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.page == page
                    && item.x >= 0.0
                    && item.x < geometry.page_width
                    && item.y >= 0.0
                    && item.y < geometry.page_height
            })
            .map(|(i, _)| i)
            .collect();

        if ordered.is_empty() {
            return;
        }

        // Stable sort keeps insertion order among equals.
        match mode {
            LayoutMode::Insertion => {}
            LayoutMode::HeightDesc => {
                ordered.sort_by(|&a, &b| items[b].height.total_cmp(&items[a].height));
            }
            LayoutMode::WidthDesc => {
                ordered.sort_by(|&a, &b| items[b].width.total_cmp(&items[a].width));
            }
        }

        let extents: Vec<(f64, f64)> = ordered
            .iter()
            .map(|&i| (items[i].width, items[i].height))
            .collect();

        let content_width = geometry.page_width - 2.0 * padding;
        let shelves = shelf::pack_shelves(&extents, content_width, gap);
        let fit = page_fit::fit_shelves(&shelves, geometry.page_height, padding, gap);

        for &(shelf_index, y) in &fit.placed {
            let s = &shelves[shelf_index];
            let mut x = padding;
            for slot in s.start..s.end {
                let item = &mut items[ordered[slot]];
                item.x = x;
                item.y = y;
                item.page = page;
                x += item.width + gap;
            }
        }

        // Everything from the first rejected shelf onwards flows into the
        // auxiliary region, preserving order across the rejected shelves.
        if fit.overflow_from < shelves.len() {
            let spill_from = shelves[fit.overflow_from].start;
            let spill = &extents[spill_from..];
            let aux_x = geometry.page_width + overflow_gutter;
            let aux_width = margin_width - overflow_gutter;

            debug!(
                "page {page}: {} item(s) overflow into the margin region",
                spill.len()
            );

            for placement in overflow::pack_overflow(
                spill,
                aux_x,
                aux_width,
                geometry.page_height,
                padding,
                gap,
            ) {
                let item = &mut items[ordered[spill_from + placement.index]];
                item.x = placement.x;
                item.y = placement.y;
                item.page = page;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> CanvasGeometry {
        CanvasGeometry::with_page_size(600.0, 800.0, 50.0, 3)
    }

    fn item(id: &str, width: f64, height: f64, page: usize) -> Item {
        Item::new(id, 0.0, 0.0, width, height, page)
    }

    fn find<'a>(items: &'a [Item], id: &str) -> &'a Item {
        items.iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn mode_cycle_returns_to_start_after_three_steps() {
        let start = LayoutMode::Insertion;
        assert_eq!(start.next().next().next(), start);
        assert_ne!(start.next(), start);
        assert_ne!(start.next().next(), start);
    }

    #[test]
    fn insertion_order_is_preserved_within_rows() {
        let engine = LayoutEngine::new();
        let items = vec![
            item("a", 100.0, 50.0, 1),
            item("b", 100.0, 80.0, 1),
            item("c", 100.0, 20.0, 1),
        ];
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        // One row at y=10, x accumulating left to right.
        assert_eq!((find(&out, "a").x, find(&out, "a").y), (10.0, 10.0));
        assert_eq!((find(&out, "b").x, find(&out, "b").y), (115.0, 10.0));
        assert_eq!((find(&out, "c").x, find(&out, "c").y), (220.0, 10.0));
    }

    #[test]
    fn height_desc_reorders_before_shelving() {
        let engine = LayoutEngine::new();
        let items = vec![
            item("short", 100.0, 20.0, 1),
            item("tall", 100.0, 300.0, 1),
        ];
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::HeightDesc);
        assert_eq!(find(&out, "tall").x, 10.0);
        assert_eq!(find(&out, "short").x, 115.0);
    }

    #[test]
    fn other_pages_pass_through_untouched() {
        let engine = LayoutEngine::new();
        let mut elsewhere = item("p2", 100.0, 50.0, 2);
        elsewhere.x = 333.0;
        elsewhere.y = 444.0;
        let items = vec![item("p1", 100.0, 50.0, 1), elsewhere.clone()];
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        assert_eq!(find(&out, "p2"), &elsewhere);
    }

    #[test]
    fn parked_overflow_items_are_not_reshelved() {
        let engine = LayoutEngine::new();
        // An overflow pass parks items at x = page_width + gutter with an
        // in-page y, exactly where a repeat pass must not pick them up.
        let mut parked = item("parked", 100.0, 50.0, 1);
        parked.x = 610.0;
        parked.y = 10.0;
        let items = vec![item("a", 100.0, 50.0, 1), parked.clone()];
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        assert_eq!(find(&out, "parked"), &parked);
    }

    #[test]
    fn repeat_pass_leaves_pipeline_parked_items_in_the_margin() {
        let engine = LayoutEngine::new();
        // Two full-row items: the second overflows into the margin region.
        let items = vec![
            item("a", 500.0, 400.0, 1),
            item("b", 500.0, 450.0, 1),
        ];
        let once = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        assert_eq!((find(&once, "b").x, find(&once, "b").y), (610.0, 10.0));

        // Even with the page freed up, a later pass must not pull the
        // parked item back onto it.
        let remaining: Vec<Item> = once.into_iter().filter(|i| i.id != "a").collect();
        let again = engine.layout_page(&remaining, 1, &geometry(), LayoutMode::Insertion);
        assert_eq!((find(&again, "b").x, find(&again, "b").y), (610.0, 10.0));
    }

    #[test]
    fn overflow_spills_into_margin_region() {
        let engine = LayoutEngine::new();
        // Each 500-wide item fills a whole row (580 content width). The
        // second row would start at 415 and cross 790, so b and c overflow.
        let items = vec![
            item("a", 500.0, 400.0, 1),
            item("b", 500.0, 400.0, 1),
            item("c", 500.0, 300.0, 1),
        ];
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        assert_eq!((find(&out, "a").x, find(&out, "a").y), (10.0, 10.0));
        // Margin region starts at page_width + gutter = 610.
        assert_eq!((find(&out, "b").x, find(&out, "b").y), (610.0, 10.0));
        assert_eq!((find(&out, "c").x, find(&out, "c").y), (610.0, 415.0));
    }

    #[test]
    fn doubly_overflowed_items_keep_prior_coordinates() {
        let engine = LayoutEngine::new();
        // Tall items: one per row on-page and in the margin; the margin
        // fits only one 400-tall row after the first (415 + 400 > 790).
        let mut items: Vec<Item> = (0..5)
            .map(|i| item(&format!("i{i}"), 500.0, 400.0, 1))
            .collect();
        items[4].x = 123.0;
        items[4].y = 456.0;
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        // On page: i0 at y=10. In the margin a second 400-tall row would
        // start at 415 and cross 790, so the margin holds only i1.
        assert_eq!(find(&out, "i0").y, 10.0);
        assert_eq!((find(&out, "i1").x, find(&out, "i1").y), (610.0, 10.0));
        assert_eq!((find(&out, "i4").x, find(&out, "i4").y), (123.0, 456.0));
    }

    #[test]
    fn layout_is_idempotent_under_fixed_geometry() {
        let engine = LayoutEngine::new();
        let items = vec![
            item("a", 300.0, 100.0, 1),
            item("b", 200.0, 150.0, 1),
            item("c", 250.0, 80.0, 1),
            item("d", 100.0, 60.0, 1),
        ];
        let once = engine.layout_page(&items, 1, &geometry(), LayoutMode::HeightDesc);
        let twice = engine.layout_page(&once, 1, &geometry(), LayoutMode::HeightDesc);
        assert_eq!(once, twice);
    }

    #[test]
    fn all_pages_runs_each_page_in_order() {
        let engine = LayoutEngine::new();
        let items = vec![
            item("p1a", 100.0, 50.0, 1),
            item("p2a", 100.0, 50.0, 2),
            item("p3a", 100.0, 50.0, 3),
        ];
        let out = engine.layout_all_pages(&items, &geometry(), LayoutMode::Insertion);
        for id in ["p1a", "p2a", "p3a"] {
            assert_eq!((find(&out, id).x, find(&out, id).y), (10.0, 10.0));
        }
        assert_eq!(find(&out, "p2a").page, 2);
    }

    #[test]
    fn empty_page_returns_collection_unchanged() {
        let engine = LayoutEngine::new();
        let items = vec![item("a", 100.0, 50.0, 2)];
        let out = engine.layout_page(&items, 1, &geometry(), LayoutMode::Insertion);
        assert_eq!(out, items);
    }
}
