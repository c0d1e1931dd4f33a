//! Joining polyline pieces into one continuous path.

use crate::dedup::cull_duplicates;
use crate::error::{GeometryError, GeometryResult};
use crate::polyline::Point;

/// Concatenate `pieces` in order and remove consecutive duplicate vertices.
///
/// Pieces that share a boundary vertex are joined without repeating it.
/// Every piece must contain at least one vertex.
pub fn stack_polylines(pieces: &[&[Point]]) -> GeometryResult<Vec<Point>> {
    if let Some(index) = pieces.iter().position(|piece| piece.is_empty()) {
        return Err(GeometryError::degenerate(format!(
            "piece {} of {} is empty",
            index,
            pieces.len()
        )));
    }

    let stacked: Vec<Point> = pieces.iter().flat_map(|piece| piece.iter().copied()).collect();
    Ok(cull_duplicates(&stacked))
}
