//! # pathease
//!
//! Eases the drawing moves of pen and brush plotter G-code. Every drawing
//! move is shifted, given a raised lead-in and lead-out, and pushed below
//! the surface with ramps at each end.
//!
//! ## Architecture
//!
//! 1. **pathease-core** - polyline geometry and the manipulation pipeline
//! 2. **pathease-gcode** - drawing-move scanning and G-code re-emission
//! 3. **pathease** - command-line runner tying both together

pub mod cli;

pub use pathease_core::{
    manipulate_polyline, Manipulation, ManipulationParameters, PathBuilder, Point,
};
pub use pathease_gcode::{process_file, process_program, ProcessedProgram, ProgramProcessor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// `RUST_LOG` when set and valid, otherwise `info`
fn default_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, leaving stdout for `--help`/`--version`
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = default_filter();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
