//! fertile-io - Payload parsing and area formatting
//!
//! # Input
//!
//! A brace-delimited, comma-separated list of quoted strings, each holding
//! two opposite corners of a barren rectangle as `x1 y1 x2 y2`:
//!
//! ```text
//! {"48 192 351 207", "48 392 351 407"}
//! ```
//!
//! Corners are given in (x, y) = (column, row) order and converted to
//! (row, col) [`Coord`](fertile_core::Coord)s.
//!
//! # Output
//!
//! Areas as decimal integers, each followed by one space, then a newline:
//!
//! ```
//! assert_eq!(fertile_io::format_areas(&[123, 456]), "123 456 \n");
//! ```

pub mod error;
pub mod input;
pub mod output;

pub use error::{IoError, IoResult};
pub use input::{parse_barren_list, parse_rect, read_barren_list};
pub use output::{format_areas, write_areas};
