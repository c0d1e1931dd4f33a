//! Extending and truncating a polyline at its ends.
//!
//! Offsets are signed and measured from each end of the polyline:
//! - positive: add a straight lead continuing the boundary segment outward
//! - negative: move the end inward along the path by the magnitude
//! - zero: leave the end as it is

use crate::arc_length::ArcLengthTable;
use crate::error::{GeometryError, GeometryResult, PathEnd};
use crate::polyline::Point;

/// Outcome of [`extend_or_sample`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resampled {
    /// A polyline with at least two vertices
    Path(Vec<Point>),
    /// Both ends were pulled past each other and met at a single vertex
    Collapsed(Point),
}

impl Resampled {
    /// The resulting vertices (one vertex when collapsed)
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Path(points) => points,
            Self::Collapsed(point) => std::slice::from_ref(point),
        }
    }

    /// Consume into the resulting vertices
    pub fn into_points(self) -> Vec<Point> {
        match self {
            Self::Path(points) => points,
            Self::Collapsed(point) => vec![point],
        }
    }

    /// Whether the result degenerated to a single vertex
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed(_))
    }
}

/// Extend or truncate `points` by signed offsets at each end.
///
/// When both offsets are negative and together exceed the total length the
/// truncations would cross, so the result collapses to the single vertex at
/// fraction `|dist_start| / (|dist_start| + |dist_end|)` of the original
/// length. Otherwise the start is processed first, the arc-length index is
/// rebuilt, and then the end is processed.
///
/// Extending an end whose boundary segment has zero length fails with
/// [`GeometryError::DegenerateSegment`].
pub fn extend_or_sample(
    points: &[Point],
    dist_start: f64,
    dist_end: f64,
) -> GeometryResult<Resampled> {
    check_finite("dist_start", dist_start)?;
    check_finite("dist_end", dist_end)?;

    let table = ArcLengthTable::new(points)?;

    if dist_start < 0.0 && dist_end < 0.0 && -(dist_start + dist_end) > table.total() {
        return Ok(Resampled::Collapsed(crossing_point(
            &table, dist_start, dist_end,
        )));
    }

    let adjusted = adjust_start(&table, dist_start)?;
    if adjusted.len() < 2 {
        // The start was pulled all the way onto the last vertex.
        if dist_end > 0.0 {
            return Err(GeometryError::DegenerateSegment { end: PathEnd::End });
        }
        return Ok(Resampled::Collapsed(adjusted[0]));
    }

    let table = ArcLengthTable::new(&adjusted)?;
    let adjusted = adjust_end(&table, dist_end)?;

    Ok(match adjusted.as_slice() {
        [only] => Resampled::Collapsed(*only),
        _ => Resampled::Path(adjusted),
    })
}

/// Where two crossing truncations meet, measured on the original polyline.
fn crossing_point(table: &ArcLengthTable<'_>, dist_start: f64, dist_end: f64) -> Point {
    let fraction = dist_start.abs() / (dist_start.abs() + dist_end.abs());
    table.point_at(fraction * table.total())
}

fn adjust_start(table: &ArcLengthTable<'_>, dist: f64) -> GeometryResult<Vec<Point>> {
    let points = table.points();

    if dist < 0.0 {
        let location = table.locate(-dist);
        let new_start = table.point_at_location(location);
        let rest = &points[location.segment + 1..];

        let mut adjusted = Vec::with_capacity(rest.len() + 1);
        adjusted.push(new_start);
        match rest.split_first() {
            Some((first, tail)) if *first == new_start => adjusted.extend_from_slice(tail),
            _ => adjusted.extend_from_slice(rest),
        }
        Ok(adjusted)
    } else if dist > 0.0 {
        let direction = unit_direction(&points[0], &points[1], PathEnd::Start)?;
        let mut adjusted = Vec::with_capacity(points.len() + 1);
        adjusted.push(points[0] - direction * dist);
        adjusted.extend_from_slice(points);
        Ok(adjusted)
    } else {
        Ok(points.to_vec())
    }
}

fn adjust_end(table: &ArcLengthTable<'_>, dist: f64) -> GeometryResult<Vec<Point>> {
    let points = table.points();
    let n = points.len();

    if dist < 0.0 {
        let location = table.locate(table.total() + dist);
        let new_end = table.point_at_location(location);

        let mut adjusted = points[..=location.segment].to_vec();
        if adjusted.last() != Some(&new_end) {
            adjusted.push(new_end);
        }
        Ok(adjusted)
    } else if dist > 0.0 {
        let direction = unit_direction(&points[n - 2], &points[n - 1], PathEnd::End)?;
        let mut adjusted = points.to_vec();
        adjusted.push(points[n - 1] + direction * dist);
        Ok(adjusted)
    } else {
        Ok(points.to_vec())
    }
}

/// Unit vector from `from` to `to`; a zero-length segment has no direction.
fn unit_direction(
    from: &Point,
    to: &Point,
    end: PathEnd,
) -> GeometryResult<nalgebra::Vector3<f64>> {
    let delta = to - from;
    let norm = delta.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(GeometryError::DegenerateSegment { end });
    }
    Ok(delta / norm)
}

fn check_finite(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidDistance {
            name: name.to_string(),
            value,
        })
    }
}
