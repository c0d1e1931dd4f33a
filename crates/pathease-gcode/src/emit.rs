//! Re-emission of manipulated drawing moves as G-code.

use crate::line::Command;
use pathease_core::Point;

/// Render a manipulated toolpath as G-code lines.
///
/// The path is preceded by a rapid to its first XY and a move to the
/// lead-in height using the command that originally lowered the tool. Each
/// vertex then becomes one G1 move. Coordinates use four decimals.
pub fn emit_drawing_move(path: &[Point], plunge: Option<Command>) -> Vec<String> {
    let Some(first) = path.first() else {
        return Vec::new();
    };
    let plunge = plunge.map_or_else(|| "G0".to_string(), |command| command.to_string());

    let mut lines = Vec::with_capacity(path.len() + 2);
    lines.push(format!("G0 X{:.4} Y{:.4}", first.x, first.y));
    lines.push(format!("{} Z{:.4}", plunge, first.z));
    lines.extend(
        path.iter()
            .map(|vertex| format!("G1 X{:.4} Y{:.4} Z{:.4}", vertex.x, vertex.y, vertex.z)),
    );
    lines
}
