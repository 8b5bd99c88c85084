//! Barren rectangle payload parser
//!
//! The outer braces are turned into brackets so the payload becomes a JSON
//! array of strings, which `serde_json` decodes. Each string is then split
//! into its four corner values.

use crate::error::{IoError, IoResult};
use fertile_core::{Coord, Rect};
use std::io::Read;
use tracing::debug;

/// Parse a full payload such as `{"0 292 399 307"}` into rectangles.
///
/// Surrounding whitespace, including a trailing newline, is ignored. An
/// empty list `{}` yields no rectangles.
///
/// # Errors
///
/// - [`IoError::Json`] if the payload is not a list of quoted strings
/// - [`IoError::MalformedRect`] if an entry is not four integers
/// - [`IoError::Core`] if an entry's corners are inverted
pub fn parse_barren_list(text: &str) -> IoResult<Vec<Rect>> {
    let json = text.trim().replace('{', "[").replace('}', "]");
    let entries: Vec<String> = serde_json::from_str(&json)?;

    let rects = entries
        .iter()
        .map(|entry| parse_rect(entry))
        .collect::<IoResult<Vec<_>>>()?;

    debug!(count = rects.len(), "parsed barren rectangles");
    Ok(rects)
}

/// Parse one `"x1 y1 x2 y2"` entry.
///
/// Fields are separated by single spaces; a doubled or leading space
/// produces an empty field, which is rejected.
///
/// `(x1, y1)` becomes the bottom-left corner and `(x2, y2)` the top-right,
/// each with its axes swapped into (row, col) order.
pub fn parse_rect(entry: &str) -> IoResult<Rect> {
    let malformed = |reason: String| IoError::MalformedRect {
        entry: entry.to_string(),
        reason,
    };

    let values = entry
        .split(' ')
        .map(|field| {
            field
                .parse::<u32>()
                .map_err(|e| malformed(format!("{field:?}: {e}")))
        })
        .collect::<IoResult<Vec<u32>>>()?;

    let &[x1, y1, x2, y2] = values.as_slice() else {
        return Err(malformed(format!(
            "expected 4 values, found {}",
            values.len()
        )));
    };

    Ok(Rect::new(Coord::from_xy(x1, y1), Coord::from_xy(x2, y2))?)
}

/// Read a whole payload from a stream and parse it.
pub fn read_barren_list<R: Read>(mut reader: R) -> IoResult<Vec<Rect>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_barren_list(&text)
}
