//! Drawing-move scanner
//!
//! Walks a parsed program with an explicit two-state machine:
//!
//! - `Idle`: lines pass through untouched until a drawing move starts. A
//!   move starts at a G0 rapid carrying X and Y whose next line lowers Z to
//!   the drawing height. The first line and the last three lines
//!   of a program never start a move.
//! - `InDrawingMove`: every line mentioning X or Y adds a vertex, with a
//!   missing axis carried over from the previous vertex. The move ends just
//!   before the first line that raises Z to the clearance height, or at the
//!   end of the program. That clearance line is not part of the move.
//!
//! Every line in a move's range is replaced when the move is re-emitted.

use crate::heights::WorkHeights;
use crate::line::{Command, GcodeLine};
use tracing::debug;

/// A drawing move found in a program.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingMove {
    /// Index of the positioning rapid that starts the move
    pub start: usize,
    /// Index one past the last line belonging to the move
    pub end: usize,
    /// Command of the line that lowered the tool, reused for the lead-in
    pub plunge: Option<Command>,
    /// XY vertices of the move, positioning point first
    pub vertices: Vec<(f64, f64)>,
}

impl DrawingMove {
    /// 1-based line number of the positioning rapid
    pub fn line_number(&self, lines: &[GcodeLine]) -> usize {
        lines[self.start].line_number
    }

    fn has_extent(&self) -> bool {
        self.vertices.windows(2).any(|pair| pair[0] != pair[1])
    }
}

/// A run of the program as seen by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A line copied to the output verbatim
    Passthrough(usize),
    /// A drawing move to be manipulated
    DrawingMove(DrawingMove),
}

#[derive(Debug)]
enum ScanState {
    Idle,
    InDrawingMove(DrawingMove),
}

/// Split a program into passthrough lines and drawing moves.
pub fn scan_drawing_moves(lines: &[GcodeLine], heights: WorkHeights) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut state = ScanState::Idle;
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        state = match state {
            ScanState::Idle => match open_move(lines, index, heights) {
                Some(open) => {
                    // The plunge line is consumed along with the rapid.
                    index += 2;
                    ScanState::InDrawingMove(open)
                }
                None => {
                    segments.push(Segment::Passthrough(index));
                    index += 1;
                    ScanState::Idle
                }
            },
            ScanState::InDrawingMove(mut open) => {
                if line.z() == Some(heights.clearance) {
                    close_move(open, index, &mut segments);
                    ScanState::Idle
                } else {
                    if line.moves_xy() {
                        let (last_x, last_y) = open.vertices[open.vertices.len() - 1];
                        open.vertices
                            .push((line.x().unwrap_or(last_x), line.y().unwrap_or(last_y)));
                    }
                    index += 1;
                    ScanState::InDrawingMove(open)
                }
            }
        };
    }

    if let ScanState::InDrawingMove(open) = state {
        close_move(open, lines.len(), &mut segments);
    }

    segments
}

fn open_move(lines: &[GcodeLine], index: usize, heights: WorkHeights) -> Option<DrawingMove> {
    if index == 0 || index + 3 >= lines.len() {
        return None;
    }

    let line = &lines[index];
    if !line.is_rapid() {
        return None;
    }
    let (x, y) = (line.x()?, line.y()?);

    let plunge = &lines[index + 1];
    if plunge.z() != Some(heights.drawing) {
        return None;
    }

    Some(DrawingMove {
        start: index,
        end: index + 2,
        plunge: plunge.command,
        vertices: vec![(x, y)],
    })
}

fn close_move(mut open: DrawingMove, end: usize, segments: &mut Vec<Segment>) {
    open.end = end;
    if open.has_extent() {
        segments.push(Segment::DrawingMove(open));
    } else {
        debug!(
            start = open.start,
            end, "Drawing move has no extent; passing it through"
        );
        segments.extend((open.start..end).map(Segment::Passthrough));
    }
}
