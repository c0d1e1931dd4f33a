//! Arc-length index over a polyline.
//!
//! Every resampling and splitting operation walks the same cumulative
//! distance table and must resolve a target offset to the same segment, so
//! the search lives here once.

use crate::error::{GeometryError, GeometryResult};
use crate::polyline::{lerp, segment_lengths, Point};

/// A position on a polyline expressed as a segment and a fraction along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Index of the segment's first vertex
    pub segment: usize,
    /// Fraction along the segment, 0 at `segment`, 1 at `segment + 1`
    pub alpha: f64,
}

/// Read-only arc-length view over a polyline.
///
/// `cumulative[i]` is the distance travelled from vertex 0 to vertex `i`.
/// The table is never edited; build a new one when the vertices change.
#[derive(Debug, Clone)]
pub struct ArcLengthTable<'a> {
    points: &'a [Point],
    segment_lengths: Vec<f64>,
    cumulative: Vec<f64>,
}

impl<'a> ArcLengthTable<'a> {
    /// Index `points`. Fails with `DegenerateInput` for fewer than 2 points.
    pub fn new(points: &'a [Point]) -> GeometryResult<Self> {
        if points.len() < 2 {
            return Err(GeometryError::degenerate(format!(
                "arc length needs at least 2 points, got {}",
                points.len()
            )));
        }

        let segment_lengths = segment_lengths(points);
        let mut cumulative = Vec::with_capacity(points.len());
        let mut travelled = 0.0;
        cumulative.push(travelled);
        for length in &segment_lengths {
            travelled += length;
            cumulative.push(travelled);
        }

        Ok(Self {
            points,
            segment_lengths,
            cumulative,
        })
    }

    /// The indexed vertices
    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    /// Per-segment Euclidean lengths (`len() - 1` values)
    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    /// Cumulative distance at each vertex, starting at 0
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Total arc length
    pub fn total(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Resolve an arc-length offset from the start to a segment location.
    ///
    /// The segment is the one starting at the rightmost vertex whose
    /// cumulative distance is `<= distance`, so an offset landing exactly on
    /// a vertex always resolves to the segment beginning there with
    /// `alpha == 0`. Offsets outside `[0, total]` are clamped to the ends.
    pub fn locate(&self, distance: f64) -> Location {
        let last_segment = self.segment_lengths.len() - 1;
        let distance = distance.clamp(0.0, self.total());

        // First index with cumulative > distance, minus one.
        let upper = self.cumulative.partition_point(|&c| c <= distance);
        let segment = upper.saturating_sub(1).min(last_segment);

        let length = self.segment_lengths[segment];
        let alpha = if length > 0.0 {
            ((distance - self.cumulative[segment]) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Location { segment, alpha }
    }

    /// The interpolated vertex at a resolved location
    pub fn point_at_location(&self, location: Location) -> Point {
        lerp(
            &self.points[location.segment],
            &self.points[location.segment + 1],
            location.alpha,
        )
    }

    /// The interpolated vertex `distance` along the polyline from its start
    pub fn point_at(&self, distance: f64) -> Point {
        self.point_at_location(self.locate(distance))
    }
}
