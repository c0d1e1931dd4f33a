//! Cutting a polyline into a start cap, a body and an end cap.

use crate::arc_length::ArcLengthTable;
use crate::dedup::cull_duplicates;
use crate::error::{GeometryError, GeometryResult};
use crate::polyline::Point;

/// The pieces produced by [`split_polyline`].
///
/// Adjacent pieces share their boundary vertex. `body` is `None` when the
/// two insets overlap and the polyline is cut only once.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPieces {
    /// From the first vertex to the start cut
    pub start_cap: Vec<Point>,
    /// From the start cut to the end cut
    pub body: Option<Vec<Point>>,
    /// From the end cut to the last vertex
    pub end_cap: Vec<Point>,
}

/// Cut `points` at `dist_start` from its start and `dist_end` from its end.
///
/// Both distances must be non-negative. If they sum to more than the total
/// length, a single cut is made at fraction `dist_start / (dist_start +
/// dist_end)` of the length and no body is returned. Every returned piece
/// has consecutive duplicates removed, so a cut landing on a vertex does not
/// repeat it; a cap of zero length comes back as a single vertex.
pub fn split_polyline(
    points: &[Point],
    dist_start: f64,
    dist_end: f64,
) -> GeometryResult<SplitPieces> {
    check_inset("dist_start", dist_start)?;
    check_inset("dist_end", dist_end)?;

    let table = ArcLengthTable::new(points)?;
    let total = table.total();
    if total <= 0.0 {
        return Err(GeometryError::degenerate("cannot split a polyline of zero length"));
    }

    if dist_start + dist_end > total {
        let ratio = dist_start / (dist_start + dist_end);
        Ok(split_once(&table, ratio * total))
    } else {
        Ok(split_twice(&table, dist_start, total - dist_end))
    }
}

/// Overlapping insets: one cut, two pieces, no body.
fn split_once(table: &ArcLengthTable<'_>, at: f64) -> SplitPieces {
    let points = table.points();
    let location = table.locate(at);
    let cut = table.point_at_location(location);

    let mut start_cap = points[..=location.segment].to_vec();
    start_cap.push(cut);

    let mut end_cap = vec![cut];
    end_cap.extend_from_slice(&points[location.segment + 1..]);

    SplitPieces {
        start_cap: cull_duplicates(&start_cap),
        body: None,
        end_cap: cull_duplicates(&end_cap),
    }
}

fn split_twice(table: &ArcLengthTable<'_>, start_at: f64, end_at: f64) -> SplitPieces {
    let points = table.points();
    let start = table.locate(start_at);
    let end = table.locate(end_at);
    let start_cut = table.point_at_location(start);
    let end_cut = table.point_at_location(end);

    let mut start_cap = points[..=start.segment].to_vec();
    start_cap.push(start_cut);

    let mut body = vec![start_cut];
    if start.segment < end.segment {
        body.extend_from_slice(&points[start.segment + 1..=end.segment]);
    }
    body.push(end_cut);

    let mut end_cap = vec![end_cut];
    end_cap.extend_from_slice(&points[end.segment + 1..]);

    let body = cull_duplicates(&body);
    SplitPieces {
        start_cap: cull_duplicates(&start_cap),
        body: (body.len() >= 2).then_some(body),
        end_cap: cull_duplicates(&end_cap),
    }
}

fn check_inset(name: &str, value: f64) -> GeometryResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidDistance {
            name: name.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyline::total_length;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y, 0.0)
    }

    fn line() -> Vec<Point> {
        vec![p(0.0, 0.0), p(10.0, 0.0)]
    }

    #[test]
    fn test_three_pieces() {
        let pieces = split_polyline(&line(), 2.0, 2.0).unwrap();
        assert_eq!(pieces.start_cap, vec![p(0.0, 0.0), p(2.0, 0.0)]);
        assert_eq!(pieces.body, Some(vec![p(2.0, 0.0), p(8.0, 0.0)]));
        assert_eq!(pieces.end_cap, vec![p(8.0, 0.0), p(10.0, 0.0)]);
    }

    #[test]
    fn test_body_keeps_interior_vertices() {
        let points = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(8.0, 4.0)];
        let pieces = split_polyline(&points, 1.0, 1.0).unwrap();
        assert_eq!(pieces.start_cap, vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert_eq!(
            pieces.body,
            Some(vec![p(1.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(7.0, 4.0)])
        );
        assert_eq!(pieces.end_cap, vec![p(7.0, 4.0), p(8.0, 4.0)]);
    }

    #[test]
    fn test_cut_on_vertex_is_not_duplicated() {
        let points = vec![p(0.0, 0.0), p(4.0, 0.0), p(12.0, 0.0)];
        let pieces = split_polyline(&points, 4.0, 2.0).unwrap();
        assert_eq!(pieces.start_cap, vec![p(0.0, 0.0), p(4.0, 0.0)]);
        assert_eq!(pieces.body, Some(vec![p(4.0, 0.0), p(10.0, 0.0)]));
        assert_eq!(pieces.end_cap, vec![p(10.0, 0.0), p(12.0, 0.0)]);
    }

    #[test]
    fn test_zero_insets_leave_single_vertex_caps() {
        let pieces = split_polyline(&line(), 0.0, 0.0).unwrap();
        assert_eq!(pieces.start_cap, vec![p(0.0, 0.0)]);
        assert_eq!(pieces.body, Some(line()));
        assert_eq!(pieces.end_cap, vec![p(10.0, 0.0)]);
    }

    #[test]
    fn test_overlapping_insets_split_once() {
        let pieces = split_polyline(&line(), 6.0, 9.0).unwrap();
        assert_eq!(pieces.start_cap, vec![p(0.0, 0.0), p(4.0, 0.0)]);
        assert_eq!(pieces.body, None);
        assert_eq!(pieces.end_cap, vec![p(4.0, 0.0), p(10.0, 0.0)]);
    }

    #[test]
    fn test_insets_meeting_exactly_have_no_body() {
        let pieces = split_polyline(&line(), 4.0, 6.0).unwrap();
        assert_eq!(pieces.start_cap, vec![p(0.0, 0.0), p(4.0, 0.0)]);
        assert_eq!(pieces.body, None);
        assert_eq!(pieces.end_cap, vec![p(4.0, 0.0), p(10.0, 0.0)]);
    }

    #[test]
    fn test_middle_length() {
        let points = vec![p(0.0, 0.0), p(3.0, 4.0), p(9.0, 4.0), p(9.0, 12.0)];
        let pieces = split_polyline(&points, 2.5, 3.5).unwrap();
        let body = pieces.body.unwrap();
        assert!((total_length(&body) - (19.0 - 2.5 - 3.5)).abs() < 1e-9);
        assert!((total_length(&pieces.start_cap) - 2.5).abs() < 1e-9);
        assert!((total_length(&pieces.end_cap) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_negative_inset() {
        assert_eq!(
            split_polyline(&line(), -1.0, 2.0),
            Err(GeometryError::InvalidDistance {
                name: "dist_start".to_string(),
                value: -1.0
            })
        );
        assert!(matches!(
            split_polyline(&line(), 1.0, -0.5),
            Err(GeometryError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_length_polyline() {
        let points = vec![p(1.0, 1.0), p(1.0, 1.0)];
        assert!(matches!(
            split_polyline(&points, 0.0, 0.0),
            Err(GeometryError::DegenerateInput { .. })
        ));
    }
}
