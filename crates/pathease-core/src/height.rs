//! Z ramps along a polyline.

use crate::arc_length::ArcLengthTable;
use crate::error::{GeometryError, GeometryResult};
use crate::polyline::Point;

/// Overwrite every vertex's Z with a linear ramp from `start_z` to `end_z`.
///
/// Each vertex is placed on the ramp by its own fraction of the total arc
/// length, so the first vertex gets exactly `start_z` and the last exactly
/// `end_z`. Existing Z values are ignored; X and Y are untouched. The
/// polyline must have at least two vertices and a nonzero length.
pub fn apply_height_differential(
    points: &[Point],
    start_z: f64,
    end_z: f64,
) -> GeometryResult<Vec<Point>> {
    let table = ArcLengthTable::new(points)?;
    let total = table.total();
    if total <= 0.0 {
        return Err(GeometryError::degenerate(
            "cannot interpolate heights over a polyline of zero length",
        ));
    }

    Ok(points
        .iter()
        .zip(table.cumulative())
        .map(|(point, travelled)| {
            let t = travelled / total;
            Point::new(point.x, point.y, start_z * (1.0 - t) + end_z * t)
        })
        .collect())
}
