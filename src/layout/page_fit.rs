//! # Page Fitting
//!
//! Decides which leading shelves fit vertically within a page. The cursor
//! starts at the top padding and each accepted shelf advances it by the
//! shelf height plus the row gap. Rejection is monotonic: the first shelf
//! that would cross the bottom budget is rejected along with every shelf
//! after it, even if a later, shorter shelf would have fit. No backfilling.

use super::shelf::Shelf;

/// Result of walking shelves against a page's vertical budget.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFit {
    /// Accepted shelves paired with their top Y coordinate, in order.
    pub placed: Vec<(usize, f64)>,
    /// Index of the first rejected shelf; equals `shelves.len()` when
    /// everything fit.
    pub overflow_from: usize,
}

/// Walk `shelves` top-down inside a page of `page_height`, with `padding`
/// at top and bottom and `row_gap` between shelves.
pub fn fit_shelves(shelves: &[Shelf], page_height: f64, padding: f64, row_gap: f64) -> PageFit {
    let budget = page_height - padding;
    let mut placed = Vec::new();
    let mut y = padding;

    for (index, shelf) in shelves.iter().enumerate() {
        if y + shelf.height > budget {
            return PageFit {
                placed,
                overflow_from: index,
            };
        }
        placed.push((index, y));
        y += shelf.height + row_gap;
    }

    PageFit {
        overflow_from: shelves.len(),
        placed,
    }
}
