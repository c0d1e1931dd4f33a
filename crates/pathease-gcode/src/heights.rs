//! Drawing and clearance height detection.

use crate::error::{GcodeError, ProgramResult};
use crate::line::GcodeLine;
use tracing::info;

/// The two Z levels a pen/brush program alternates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkHeights {
    /// Z at which the tool draws
    pub drawing: f64,
    /// Z at which the tool travels between drawing moves
    pub clearance: f64,
}

/// Find the drawing and clearance heights by Z value frequency.
///
/// The two most common Z values are taken; the lower one is the drawing
/// height and the higher one is the clearance height. Equal counts are
/// ranked by first appearance.
pub fn detect_heights(lines: &[GcodeLine]) -> ProgramResult<WorkHeights> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for z in lines.iter().filter_map(GcodeLine::z) {
        match counts.iter_mut().find(|(value, _)| *value == z) {
            Some((_, count)) => *count += 1,
            None => counts.push((z, 1)),
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let (first, second) = match counts.as_slice() {
        [first, second, ..] => (first.0, second.0),
        _ => {
            return Err(GcodeError::HeightDetection(format!(
                "need at least two distinct Z values, found {}",
                counts.len()
            )))
        }
    };

    let heights = WorkHeights {
        drawing: first.min(second),
        clearance: first.max(second),
    };
    info!(
        drawing = heights.drawing,
        clearance = heights.clearance,
        "Found drawing and clearance heights"
    );
    Ok(heights)
}
