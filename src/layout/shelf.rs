//! # Shelf Packing
//!
//! Partitions an ordered run of items into rows ("shelves") whose combined
//! width, including inter-item gaps, stays within a content-width budget.
//! Order is preserved: rows are contiguous ranges of the input, with no
//! intra-row reordering and no splitting of oversized items.

/// A single shelf: a contiguous index range into the ordered item slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    /// Index of the first item on this shelf.
    pub start: usize,
    /// One past the last item (exclusive end).
    pub end: usize,
    /// Sum of item widths plus gaps between them.
    pub width: f64,
    /// Max item height on the shelf; the vertical extent used for
    /// page-fit decisions.
    pub height: f64,
}

impl Shelf {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Partition `(width, height)` extents into shelves against
/// `content_width`. The first item of a shelf is always accepted, so an
/// item wider than the budget still gets a shelf of its own (clipping is
/// the caller's concern); a subsequent item joins only when the shelf
/// width plus a gap plus the item still fits.
pub fn pack_shelves(extents: &[(f64, f64)], content_width: f64, gap: f64) -> Vec<Shelf> {
    if extents.is_empty() {
        return vec![];
    }

    let mut shelves = Vec::new();
    let mut start = 0;
    let mut width = 0.0;
    let mut height = 0.0_f64;

    for (i, &(w, h)) in extents.iter().enumerate() {
        let needed = if i == start { w } else { gap + w };
        if i > start && width + needed > content_width {
            shelves.push(Shelf {
                start,
                end: i,
                width,
                height,
            });
            start = i;
            width = w;
            height = h;
        } else {
            width += needed;
            height = height.max(h);
        }
    }

    // Close the trailing shelf
    if start < extents.len() {
        shelves.push(Shelf {
            start,
            end: extents.len(),
            width,
            height,
        });
    }

    shelves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shelf_when_everything_fits() {
        let extents = vec![(100.0, 50.0), (100.0, 80.0), (100.0, 20.0)];
        let shelves = pack_shelves(&extents, 400.0, 10.0);
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].start, 0);
        assert_eq!(shelves[0].end, 3);
        assert_eq!(shelves[0].width, 320.0);
        assert_eq!(shelves[0].height, 80.0);
    }

    #[test]
    fn splits_when_gap_pushes_past_budget() {
        // 3 items × 100 + 2 gaps × 10 = 320; budget 250 → [2, 1]
        let extents = vec![(100.0, 50.0), (100.0, 50.0), (100.0, 50.0)];
        let shelves = pack_shelves(&extents, 250.0, 10.0);
        assert_eq!(shelves.len(), 2);
        assert_eq!((shelves[0].start, shelves[0].end), (0, 2));
        assert_eq!((shelves[1].start, shelves[1].end), (2, 3));
    }

    #[test]
    fn three_wide_items_get_one_shelf_each() {
        // 300 + 5 + 300 = 605 > 580, so no pair ever shares a shelf.
        let extents = vec![(300.0, 100.0); 3];
        let shelves = pack_shelves(&extents, 580.0, 5.0);
        assert_eq!(shelves.len(), 3);
        for (i, shelf) in shelves.iter().enumerate() {
            assert_eq!((shelf.start, shelf.end), (i, i + 1));
            assert_eq!(shelf.width, 300.0);
        }
    }

    #[test]
    fn oversized_item_still_gets_a_shelf() {
        let extents = vec![(700.0, 100.0), (50.0, 50.0)];
        let shelves = pack_shelves(&extents, 580.0, 5.0);
        assert_eq!(shelves.len(), 2);
        assert_eq!((shelves[0].start, shelves[0].end), (0, 1));
        assert_eq!(shelves[0].width, 700.0);
    }

    #[test]
    fn exact_fit_shares_a_shelf() {
        // 100 + 10 + 100 = 210 == budget
        let extents = vec![(100.0, 10.0), (100.0, 10.0)];
        let shelves = pack_shelves(&extents, 210.0, 10.0);
        assert_eq!(shelves.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_shelves() {
        assert!(pack_shelves(&[], 580.0, 5.0).is_empty());
    }

    #[test]
    fn width_bound_holds_for_multi_item_shelves() {
        let extents: Vec<(f64, f64)> = (0..20)
            .map(|i| (40.0 + (i as f64 * 37.0) % 200.0, 30.0 + (i as f64 * 13.0) % 90.0))
            .collect();
        let gap = 5.0;
        let budget = 580.0;
        for shelf in pack_shelves(&extents, budget, gap) {
            if shelf.len() >= 2 {
                let widths: f64 = extents[shelf.start..shelf.end].iter().map(|e| e.0).sum();
                let total = widths + gap * (shelf.len() as f64 - 1.0);
                assert!(total <= budget, "shelf {total} exceeds {budget}");
                assert_eq!(shelf.width, total);
            }
        }
    }
}
