//! Ordered insertion into an ascending area list
//!
//! Areas are inserted one at a time as regions are found. A linear scan
//! locates the insertion point, which is cheap because the number of
//! regions is small next to the number of cells.

/// Find the index of the first element `>= value`, or `areas.len()` if
/// there is none.
///
/// `areas` must already be sorted ascending.
pub fn find_sorted_loc(areas: &[u32], value: u32) -> usize {
    areas
        .iter()
        .position(|&a| a >= value)
        .unwrap_or(areas.len())
}

/// Insert `value` into an ascending list, keeping it ascending.
///
/// The value goes immediately before the first element `>= value`, or at
/// the end when no such element exists.
pub fn insert_sorted(areas: &mut Vec<u32>, value: u32) {
    let loc = find_sorted_loc(areas, value);
    areas.insert(loc, value);
}
