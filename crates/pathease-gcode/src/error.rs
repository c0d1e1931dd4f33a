//! Error types for G-code processing.

use pathease_core::GeometryError;
use std::io;
use thiserror::Error;

/// Errors that can occur while easing the drawing moves of a G-code program.
#[derive(Error, Debug)]
pub enum GcodeError {
    /// A word letter was followed by something that is not a number
    #[error("Invalid word at line {line_number}: {word}")]
    InvalidWord {
        /// 1-based line number in the program.
        line_number: usize,
        /// The offending word text.
        word: String,
    },

    /// Drawing and clearance heights could not be determined
    #[error("Height detection failed: {0}")]
    HeightDetection(String),

    /// A drawing move could not be manipulated
    #[error("Drawing move starting at line {line_number}: {source}")]
    Geometry {
        /// 1-based line number of the move's positioning line.
        line_number: usize,
        /// The underlying geometry failure.
        #[source]
        source: GeometryError,
    },

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for G-code processing
pub type ProgramResult<T> = Result<T, GcodeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pathease_core::PathEnd;

    #[test]
    fn test_error_display() {
        let err = GcodeError::InvalidWord {
            line_number: 12,
            word: "X1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid word at line 12: X1.2.3");

        let err = GcodeError::Geometry {
            line_number: 4,
            source: GeometryError::DegenerateSegment { end: PathEnd::Start },
        };
        assert_eq!(
            err.to_string(),
            "Drawing move starting at line 4: Degenerate segment at the start of the polyline: direction is undefined"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: GcodeError = io_err.into();
        assert!(matches!(err, GcodeError::Io(_)));
    }
}
