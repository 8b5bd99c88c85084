//! Area list formatter

use crate::error::IoResult;
use std::io::Write;

/// Render areas as `"a b c \n"`: each value followed by a space, then a
/// newline. An empty list renders as `"\n"`.
pub fn format_areas(areas: &[u32]) -> String {
    let mut out = String::with_capacity(areas.len() * 8 + 1);
    for area in areas {
        out.push_str(&area.to_string());
        out.push(' ');
    }
    out.push('\n');
    out
}

/// Write formatted areas to a stream.
pub fn write_areas<W: Write>(mut writer: W, areas: &[u32]) -> IoResult<()> {
    writer.write_all(format_areas(areas).as_bytes())?;
    writer.flush()?;
    Ok(())
}
