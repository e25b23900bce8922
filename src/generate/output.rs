use std::io::Write;

use crate::error::Result;
use crate::math::Point2;

/// Formats one sample as `x,y` in fixed-point notation.
#[must_use]
pub fn format_point(point: &Point2, precision: usize) -> String {
    format!("{:.prec$},{:.prec$}", point.x, point.y, prec = precision)
}

/// Writes the text rendering: the sample count on the first line, then one
/// `x,y` line per point.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_points<I, W>(points: I, count: usize, precision: usize, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = Point2>,
    W: Write,
{
    writeln!(out, "{count}")?;
    for point in points {
        writeln!(out, "{}", format_point(&point, precision))?;
    }
    out.flush()?;
    Ok(())
}
