//! Toolpath manipulation pipeline
//!
//! Turns a flat drawing move into an eased 3D toolpath:
//!
//! 1. lift the 2D vertices to Z=0 and drop consecutive duplicates
//! 2. shift the drawn segment with the start/end shift offsets
//! 3. extend the original path to find the lead-in and lead-out points and
//!    raise them to their configured heights
//! 4. cut the shifted segment into start pushthrough, body and end
//!    pushthrough, and ramp each piece's Z
//! 5. stack lead-in, pieces and lead-out into one path
//!
//! If the shifts pull the segment down to a single vertex, step 4 is skipped
//! and the path runs lead-in, that vertex, lead-out.

use crate::dedup::cull_duplicates_within;
use crate::error::{GeometryError, GeometryResult};
use crate::height::apply_height_differential;
use crate::params::ManipulationParameters;
use crate::polyline::{lift_2d, Point};
use crate::resample::{extend_or_sample, Resampled};
use crate::split::split_polyline;
use crate::stack::stack_polylines;
use tracing::{debug, warn};

/// Result of a manipulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Manipulation {
    /// The eased toolpath, lead-in first
    pub path: Vec<Point>,
    /// True when the shifts converged to a point and no pushthrough was applied
    pub pushthrough_skipped: bool,
}

/// Builds eased toolpaths from drawing moves.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    params: ManipulationParameters,
    cull_tolerance: f64,
}

impl PathBuilder {
    /// Create a new builder with the given parameters
    pub fn new(params: ManipulationParameters) -> Self {
        Self {
            params,
            cull_tolerance: 0.0,
        }
    }

    /// Treat input vertices closer than `tolerance` as duplicates.
    ///
    /// The default of 0 only removes exactly coincident vertices.
    pub fn with_cull_tolerance(mut self, tolerance: f64) -> Self {
        self.cull_tolerance = tolerance.max(0.0);
        self
    }

    /// The parameters this builder applies
    pub fn params(&self) -> &ManipulationParameters {
        &self.params
    }

    /// Manipulate a 2D drawing move
    pub fn build(&self, poly2d: &[(f64, f64)]) -> GeometryResult<Manipulation> {
        let p = &self.params;

        let poly3d = cull_duplicates_within(&lift_2d(poly2d), self.cull_tolerance);
        if poly3d.len() < 2 {
            return Err(GeometryError::degenerate(format!(
                "drawing move has {} distinct vertices, need at least 2",
                poly3d.len()
            )));
        }

        let shifted = extend_or_sample(&poly3d, p.start_shift, p.end_shift)?;
        let extended = extend_or_sample(&poly3d, p.start_extend, p.end_extend)?;
        let (lead_in, lead_out) = lead_points(extended.points(), p);

        debug!(
            input_vertices = poly3d.len(),
            shifted_vertices = shifted.points().len(),
            "Manipulating drawing move"
        );

        match shifted {
            Resampled::Collapsed(point) => {
                warn!(
                    x = point.x,
                    y = point.y,
                    "Polyline shifts converged to a point; z pushthrough was skipped"
                );
                let path = stack_polylines(&[
                    std::slice::from_ref(&lead_in),
                    std::slice::from_ref(&point),
                    std::slice::from_ref(&lead_out),
                ])?;
                Ok(Manipulation {
                    path,
                    pushthrough_skipped: true,
                })
            }
            Resampled::Path(shifted) => {
                let path = self.apply_pushthrough(&shifted, lead_in, lead_out)?;
                Ok(Manipulation {
                    path,
                    pushthrough_skipped: false,
                })
            }
        }
    }

    fn apply_pushthrough(
        &self,
        shifted: &[Point],
        lead_in: Point,
        lead_out: Point,
    ) -> GeometryResult<Vec<Point>> {
        let p = &self.params;
        let pieces = split_polyline(shifted, p.start_pushthrough_inset, p.end_pushthrough_inset)?;

        let start_cap = ramp(&pieces.start_cap, 0.0, p.start_pushthrough_z)?;
        let end_cap = ramp(&pieces.end_cap, p.end_pushthrough_z, 0.0)?;
        let lead_in = std::slice::from_ref(&lead_in);
        let lead_out = std::slice::from_ref(&lead_out);

        match pieces.body {
            Some(body) => {
                let body = apply_height_differential(
                    &body,
                    p.start_pushthrough_z,
                    p.end_pushthrough_z,
                )?;
                stack_polylines(&[lead_in, &start_cap, &body, &end_cap, lead_out])
            }
            None => stack_polylines(&[lead_in, &start_cap, &end_cap, lead_out]),
        }
    }
}

/// Lead-in and lead-out: the extended path's ends raised by the extend heights.
fn lead_points(extended: &[Point], p: &ManipulationParameters) -> (Point, Point) {
    let mut lead_in = extended[0];
    let mut lead_out = extended[extended.len() - 1];
    lead_in.z += p.start_extend_height;
    lead_out.z += p.end_extend_height;
    (lead_in, lead_out)
}

/// Ramp a pushthrough cap. A zero-length cap is a single vertex and stays
/// on the surface, so the pushthrough becomes a vertical move at that vertex.
fn ramp(cap: &[Point], start_z: f64, end_z: f64) -> GeometryResult<Vec<Point>> {
    match cap {
        [_] => Ok(cap.to_vec()),
        _ => apply_height_differential(cap, start_z, end_z),
    }
}

/// Manipulate a 2D drawing move with the given parameters.
///
/// Convenience wrapper around [`PathBuilder::build`] returning only the path.
pub fn manipulate_polyline(
    poly2d: &[(f64, f64)],
    params: &ManipulationParameters,
) -> GeometryResult<Vec<Point>> {
    Ok(PathBuilder::new(*params).build(poly2d)?.path)
}
