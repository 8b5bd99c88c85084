//! Fertile - Sizes of fertile land regions
//!
//! A field of fixed width and height starts out entirely fertile. Barren
//! rectangles are carved out of it, and the sizes of the remaining
//! 4-connected fertile regions are reported in ascending order.
//!
//! # Example
//!
//! ```
//! use fertile::{FieldConfig, fertile_areas, parse_barren_list};
//!
//! let rects = parse_barren_list(r#"{"0 292 399 307"}"#).unwrap();
//! let areas = fertile_areas(&FieldConfig::default(), &rects).unwrap();
//! assert_eq!(areas, vec![116800, 116800]);
//! ```

pub mod config;

pub use config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FieldConfig};

// Re-export core types (primary data structures used everywhere)
pub use fertile_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use fertile_io as io;
pub use fertile_region as region;

pub use fertile_io::{format_areas, parse_barren_list};
pub use fertile_region::compute_sorted_areas;

use tracing::info;

/// Build a field, carve the barren rectangles, and return the fertile
/// region areas in ascending order.
///
/// # Errors
///
/// Fails before any scanning if the dimensions are not positive or a
/// rectangle does not fit in the field.
pub fn fertile_areas(config: &FieldConfig, barren: &[Rect]) -> Result<Vec<u32>> {
    config.validate()?;
    let mut grid = Grid::new(config.width, config.height)?;
    grid.fill_rectangles(barren, Cell::Barren)?;

    let areas = compute_sorted_areas(&mut grid);
    info!(
        width = config.width,
        height = config.height,
        barren = barren.len(),
        regions = areas.len(),
        "computed fertile areas"
    );
    Ok(areas)
}
