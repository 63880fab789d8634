//! # Overflow Packing
//!
//! Items rejected by the page fitter are re-shelved into the auxiliary
//! margin region flanking the page: same shelving algorithm, secondary
//! width budget, same vertical budget. Packing stops outright at the first
//! shelf that would cross the vertical budget (no backfilling, matching
//! the page fitter); items beyond that point receive no placement and keep
//! whatever coordinates they had.

use log::debug;

use super::shelf::pack_shelves;

/// A placement decided for one overflow item, indexed into the flattened
/// overflow slice.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowPlacement {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Pack overflow `extents` into the auxiliary region starting at `aux_x`
/// with `aux_width` of horizontal budget, against the same vertical budget
/// as the page itself. Returns placements for the leading items that fit;
/// the rest are silently left unplaced.
pub fn pack_overflow(
    extents: &[(f64, f64)],
    aux_x: f64,
    aux_width: f64,
    page_height: f64,
    padding: f64,
    gap: f64,
) -> Vec<OverflowPlacement> {
    let shelves = pack_shelves(extents, aux_width, gap);
    let budget = page_height - padding;

    let mut placements = Vec::new();
    let mut y = padding;

    for shelf in &shelves {
        if y + shelf.height > budget {
            let dropped = extents.len() - shelf.start;
            debug!("overflow region full: {dropped} item(s) left at prior coordinates");
            break;
        }
        let mut x = aux_x;
        for index in shelf.start..shelf.end {
            placements.push(OverflowPlacement { index, x, y });
            x += extents[index].0 + gap;
        }
        y += shelf.height + gap;
    }

    placements
}
