//! # pathease Core
//!
//! Polyline geometry engine that reshapes a flat drawing move into an eased
//! 3D toolpath for a 3-axis machine: lead-in and lead-out points, a shifted
//! drawn segment, and pushthrough ramps near both ends.
//!
//! ## Building blocks
//!
//! - **Arc length**: cumulative distance tables and the shared offset search
//! - **Resample**: signed extension/truncation of polyline ends
//! - **Dedup**: consecutive duplicate vertex removal
//! - **Split**: start cap / body / end cap cutting at arc-length insets
//! - **Height**: linear Z ramps along arc length
//! - **Stack**: seam-aware concatenation of pieces
//! - **Manipulate**: the full pipeline driven by [`ManipulationParameters`]

pub mod arc_length;
pub mod dedup;
pub mod error;
pub mod height;
pub mod manipulate;
pub mod params;
pub mod polyline;
pub mod resample;
pub mod split;
pub mod stack;

pub use arc_length::{ArcLengthTable, Location};
pub use dedup::{cull_duplicates, cull_duplicates_within};
pub use error::{
    Error, GeometryError, GeometryResult, ParameterError, ParameterResult, PathEnd, Result,
};
pub use height::apply_height_differential;
pub use manipulate::{manipulate_polyline, Manipulation, PathBuilder};
pub use params::{ManipulationParameters, PARAMETER_NAMES};
pub use polyline::{lift_2d, segment_lengths, total_length, Point};
pub use resample::{extend_or_sample, Resampled};
pub use split::{split_polyline, SplitPieces};
pub use stack::stack_polylines;
