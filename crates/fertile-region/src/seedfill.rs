//! Flood fill
//!
//! Counts the cells of one fertile region. The traversal is depth-first
//! over an explicit `Vec` stack, so region size is bounded by memory rather
//! than call depth.

use crate::error::{RegionError, RegionResult};
use fertile_core::{Cell, Coord, Grid};

/// Flood fill the fertile region containing `seed`, returning its area.
///
/// Every cell of the region is marked [`Cell::Consumed`] as it is reached.
/// A cell is marked before it is pushed, so a cell reachable along several
/// paths is still counted once.
///
/// # Returns
///
/// The number of cells in the region, or 0 if `seed` is not fertile.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `seed` is outside the grid.
pub fn flood_fill(grid: &mut Grid, seed: Coord) -> RegionResult<u32> {
    if !grid.contains(seed) {
        return Err(RegionError::InvalidSeed {
            row: seed.row,
            col: seed.col,
        });
    }
    if !grid.get_unchecked(seed).is_fertile() {
        return Ok(0);
    }

    Ok(fill_region(grid, seed))
}

/// Count and consume the fertile region around an in-grid fertile `seed`.
///
/// Grids hold at most `u32::MAX` cells, so the count cannot overflow.
pub(crate) fn fill_region(grid: &mut Grid, seed: Coord) -> u32 {
    let mut count = 0u32;
    let mut stack = vec![seed];
    grid.set_unchecked(seed, Cell::Consumed);

    while let Some(cell) = stack.pop() {
        count += 1;
        for next in grid.neighbors_unchecked(cell) {
            if grid.get_unchecked(next).is_fertile() {
                grid.set_unchecked(next, Cell::Consumed);
                stack.push(next);
            }
        }
    }

    count
}
