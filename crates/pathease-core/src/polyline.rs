//! Point and polyline primitives shared by every geometry stage.
//!
//! A polyline is an ordered slice of [`Point`]s. Order defines direction and
//! the arc-length parameterization, so nothing here ever reorders vertices.

use nalgebra::Point3;

/// A toolpath vertex (x, y, z) in the caller's distance unit.
pub type Point = Point3<f64>;

/// Lift a 2D drawing move into 3D with every vertex at Z=0.
pub fn lift_2d(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y, 0.0)).collect()
}

/// Linear interpolation between two vertices, `alpha` in `[0, 1]`.
///
/// Written as `(1 - alpha) * a + alpha * b` so that `alpha == 0` and
/// `alpha == 1` reproduce the endpoints exactly.
pub(crate) fn lerp(a: &Point, b: &Point, alpha: f64) -> Point {
    Point::from(a.coords * (1.0 - alpha) + b.coords * alpha)
}

/// Euclidean length of every segment of `points`.
pub fn segment_lengths(points: &[Point]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| nalgebra::distance(&pair[0], &pair[1]))
        .collect()
}

/// Total arc length of `points` (0 for fewer than two points).
pub fn total_length(points: &[Point]) -> f64 {
    segment_lengths(points).iter().sum()
}
