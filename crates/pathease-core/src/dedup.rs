//! Consecutive duplicate vertex removal.

use crate::polyline::Point;

/// Remove consecutive vertices that are exactly coincident.
///
/// The first of each run is kept and order is preserved. Repeats that are
/// not adjacent are left alone. An all-duplicate input collapses to one
/// vertex.
pub fn cull_duplicates(points: &[Point]) -> Vec<Point> {
    let mut culled = points.to_vec();
    culled.dedup();
    culled
}

/// Like [`cull_duplicates`], but treats a vertex within `tolerance` of the
/// last kept vertex as coincident. A tolerance of 0 is exact equality.
pub fn cull_duplicates_within(points: &[Point], tolerance: f64) -> Vec<Point> {
    if tolerance <= 0.0 {
        return cull_duplicates(points);
    }
    let mut culled = points.to_vec();
    culled.dedup_by(|current, kept| nalgebra::distance(&*current, &*kept) <= tolerance);
    culled
}
