//! fertile-region - Fertile region sizing
//!
//! This crate partitions the fertile cells of a [`Grid`] into maximal
//! 4-connected regions and reports their areas:
//!
//! - **Flood fill** - Counts one region with an explicit stack
//! - **Region scan** - Visits every cell once in row-major order
//! - **Ordered insertion** - Keeps the area list ascending as it grows
//!
//! # Examples
//!
//! ```
//! use fertile_core::{Cell, Coord, Grid, Rect};
//! use fertile_region::compute_sorted_areas;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! let wall = Rect::new(Coord::new(0, 1), Coord::new(4, 1)).unwrap();
//! grid.fill_rectangle(&wall, Cell::Barren).unwrap();
//!
//! assert_eq!(compute_sorted_areas(&mut grid), vec![5, 15]);
//! ```
//!
//! [`Grid`]: fertile_core::Grid

pub mod error;
pub mod scan;
pub mod seedfill;
pub mod sorted;

// Re-export core types
pub use fertile_core;

pub use error::{RegionError, RegionResult};
pub use scan::{compute_sorted_areas, sorted_areas};
pub use seedfill::flood_fill;
pub use sorted::{find_sorted_loc, insert_sorted};
