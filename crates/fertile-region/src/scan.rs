//! Region scan
//!
//! Walks the grid in row-major order and flood fills each fertile cell it
//! meets. Cells consumed by an earlier fill are no longer fertile, so every
//! region is counted exactly once, from its first cell in scan order.

use crate::seedfill::fill_region;
use crate::sorted::insert_sorted;
use fertile_core::{Coord, Grid};
use tracing::{debug, trace};

/// Compute the areas of all fertile regions, ascending.
///
/// The grid is consumed in place: on return no cell is fertile. Use
/// [`sorted_areas`] to keep the grid intact.
pub fn compute_sorted_areas(grid: &mut Grid) -> Vec<u32> {
    let mut areas = Vec::new();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let seed = Coord::new(row, col);
            if !grid.get_unchecked(seed).is_fertile() {
                continue;
            }
            let area = fill_region(grid, seed);
            trace!(row, col, area, "found region");
            insert_sorted(&mut areas, area);
        }
    }

    debug!(
        regions = areas.len(),
        fertile = areas.iter().map(|&a| a as u64).sum::<u64>(),
        "scan complete"
    );
    areas
}

/// Compute the areas of all fertile regions, ascending, on a copy of `grid`.
pub fn sorted_areas(grid: &Grid) -> Vec<u32> {
    let mut scratch = grid.clone();
    compute_sorted_areas(&mut scratch)
}
