//! Ring-expansion neighbor search over a [`BinGrid`].
//!
//! This is an approximate k-nearest search: rings of bins are scanned
//! outward from the query's bin and the search stops once enough candidates
//! are in hand, so a nearer sample sitting in an unscanned ring can be
//! missed. Callers rank the candidates themselves (see [`crate::idw`]).

use profile_common::Sample;

use crate::spatial::BinGrid;

/// Default outermost ring scanned before giving up.
pub const DEFAULT_MAX_RING: usize = 8;

/// The search may stop only after scanning a ring beyond this one.
pub const EARLY_STOP_RING: usize = 2;

/// Collect candidate neighbors of `(x, y)`.
///
/// Rings `r = 0, 1, 2, ...` (Chebyshev distance in bins) are scanned in
/// order. The search ends after ring `r` when `r > EARLY_STOP_RING` and at
/// least `k` candidates were found, when `r == max_ring`, or when the ring
/// already covers the whole grid. Fewer than `k` samples (possibly none)
/// come back for sparse data.
pub fn k_nearest(grid: &BinGrid, x: f64, y: f64, k: usize, max_ring: usize) -> Vec<Sample> {
    let mut found = Vec::new();
    if grid.is_empty() {
        return found;
    }

    let (cx, cy) = grid.bin_index(x, y);
    let last = grid.bins() - 1;
    let reach = cx.max(last - cx).max(cy).max(last - cy);

    for ring in 0..=max_ring.min(reach) {
        collect_ring(grid, cx, cy, ring, &mut found);
        if ring > EARLY_STOP_RING && found.len() >= k {
            break;
        }
    }

    found
}

/// Append every sample in bins at Chebyshev distance exactly `ring` from
/// `(cx, cy)`, scanning columns then rows in ascending order.
fn collect_ring(grid: &BinGrid, cx: usize, cy: usize, ring: usize, out: &mut Vec<Sample>) {
    if ring == 0 {
        out.extend_from_slice(grid.cell(cx, cy));
        return;
    }

    let bins = grid.bins() as isize;
    let (cx, cy, r) = (cx as isize, cy as isize, ring as isize);
    let in_range = |v: isize| (0..bins).contains(&v);

    for ix in (cx - r)..=(cx + r) {
        if !in_range(ix) {
            continue;
        }
        let on_side = ix == cx - r || ix == cx + r;
        if on_side {
            for iy in (cy - r)..=(cy + r) {
                if in_range(iy) {
                    out.extend_from_slice(grid.cell(ix as usize, iy as usize));
                }
            }
        } else {
            for iy in [cy - r, cy + r] {
                if in_range(iy) {
                    out.extend_from_slice(grid.cell(ix as usize, iy as usize));
                }
            }
        }
    }
}
