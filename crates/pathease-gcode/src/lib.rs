//! # pathease G-code
//!
//! Finds the drawing moves of a pen/brush G-code program and replaces each
//! one with the eased toolpath produced by `pathease-core`.
//!
//! - **Line**: minimal G-code line parsing
//! - **Heights**: drawing/clearance height detection by frequency
//! - **Scanner**: drawing-move detection state machine
//! - **Emit**: re-serialization of manipulated toolpaths
//! - **Program**: whole-program and file processing

pub mod emit;
pub mod error;
pub mod heights;
pub mod line;
pub mod program;
pub mod scanner;

pub use emit::emit_drawing_move;
pub use error::{GcodeError, ProgramResult};
pub use heights::{detect_heights, WorkHeights};
pub use line::{parse_program, Command, GcodeLine};
pub use program::{process_file, process_program, ProcessedProgram, ProgramProcessor};
pub use scanner::{scan_drawing_moves, DrawingMove, Segment};
