//! Whole-program processing
//!
//! Parses a G-code program, detects its drawing and clearance heights,
//! finds every drawing move and replaces it with its eased toolpath. Lines
//! outside drawing moves are copied through unchanged.

use crate::emit::emit_drawing_move;
use crate::error::{GcodeError, ProgramResult};
use crate::heights::{detect_heights, WorkHeights};
use crate::line::parse_program;
use crate::scanner::{scan_drawing_moves, Segment};
use pathease_core::{ManipulationParameters, PathBuilder};
use std::path::Path;
use tracing::{debug, info};

/// Output of processing a program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedProgram {
    /// The rewritten program, one entry per line
    pub lines: Vec<String>,
    /// Heights detected in the input
    pub heights: WorkHeights,
    /// Number of drawing moves replaced
    pub moves_manipulated: usize,
    /// Number of those whose shifts converged to a point
    pub moves_collapsed: usize,
}

impl ProcessedProgram {
    /// The rewritten program as text
    pub fn to_gcode(&self) -> String {
        self.lines.join("\n")
    }
}

/// Eases the drawing moves of G-code programs.
#[derive(Debug, Clone)]
pub struct ProgramProcessor {
    builder: PathBuilder,
}

impl ProgramProcessor {
    /// Create a new processor with the given parameters
    pub fn new(params: ManipulationParameters) -> Self {
        Self {
            builder: PathBuilder::new(params),
        }
    }

    /// Create a processor around a configured path builder
    pub fn with_builder(builder: PathBuilder) -> Self {
        Self { builder }
    }

    /// Process program text
    pub fn process(&self, text: &str) -> ProgramResult<ProcessedProgram> {
        let lines = parse_program(text);
        let heights = detect_heights(&lines)?;
        let segments = scan_drawing_moves(&lines, heights);

        let mut output = Vec::with_capacity(lines.len());
        let mut moves_manipulated = 0;
        let mut moves_collapsed = 0;

        for segment in segments {
            match segment {
                Segment::Passthrough(index) => output.push(lines[index].raw.clone()),
                Segment::DrawingMove(found) => {
                    let line_number = found.line_number(&lines);
                    let manipulation = self
                        .builder
                        .build(&found.vertices)
                        .map_err(|source| GcodeError::Geometry {
                            line_number,
                            source,
                        })?;

                    debug!(
                        line_number,
                        lines_replaced = found.end - found.start,
                        input_vertices = found.vertices.len(),
                        output_vertices = manipulation.path.len(),
                        "Replaced drawing move"
                    );

                    output.extend(emit_drawing_move(&manipulation.path, found.plunge));
                    moves_manipulated += 1;
                    if manipulation.pushthrough_skipped {
                        moves_collapsed += 1;
                    }
                }
            }
        }

        info!(moves_manipulated, moves_collapsed, "Eased drawing moves");

        Ok(ProcessedProgram {
            lines: output,
            heights,
            moves_manipulated,
            moves_collapsed,
        })
    }

    /// Process `input` and write the result to `output`
    pub fn process_file(&self, input: &Path, output: &Path) -> ProgramResult<ProcessedProgram> {
        let text = std::fs::read_to_string(input)?;
        let processed = self.process(&text)?;
        std::fs::write(output, processed.to_gcode())?;
        info!(output = %output.display(), "Wrote eased program");
        Ok(processed)
    }
}

/// Ease the drawing moves of program text with the given parameters
pub fn process_program(
    text: &str,
    params: &ManipulationParameters,
) -> ProgramResult<ProcessedProgram> {
    ProgramProcessor::new(*params).process(text)
}

/// Ease the drawing moves of the program in `input`, writing to `output`
pub fn process_file(
    input: &Path,
    output: &Path,
    params: &ManipulationParameters,
) -> ProgramResult<ProcessedProgram> {
    ProgramProcessor::new(*params).process_file(input, output)
}
