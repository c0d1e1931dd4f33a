//! Error handling for pathease
//!
//! Provides the error types for the geometry engine:
//! - Geometry errors (degenerate polylines, segments and distances)
//! - Parameter errors (loading and validating manipulation parameters)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Which end of a polyline an operation was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEnd {
    /// The first vertex and the segment leaving it
    Start,
    /// The last vertex and the segment arriving at it
    End,
}

impl std::fmt::Display for PathEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Geometry error type
///
/// Raised synchronously where a polyline operation detects input it cannot
/// work with. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Fewer than two points, or an arc length that must be nonzero is zero
    #[error("Degenerate input: {reason}")]
    DegenerateInput {
        /// What was degenerate about the input.
        reason: String,
    },

    /// A direction needed for extrapolation has zero length
    #[error("Degenerate segment at the {end} of the polyline: direction is undefined")]
    DegenerateSegment {
        /// The end whose boundary segment has zero length.
        end: PathEnd,
    },

    /// A distance that must be non-negative is negative (or not finite)
    #[error("Invalid distance '{name}': {value}")]
    InvalidDistance {
        /// The name of the distance argument.
        name: String,
        /// The rejected value.
        value: f64,
    },
}

impl GeometryError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

/// Parameter error type
///
/// Represents errors raised while loading, overriding or validating
/// [`ManipulationParameters`](crate::ManipulationParameters).
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter is NaN or infinite
    #[error("Parameter '{name}' must be finite, got {value}")]
    NotFinite {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must be non-negative is negative
    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// The parameter name is not one of the ten manipulation parameters
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// The parameter file could not be read or written
    #[error("Failed to access parameter file: {0}")]
    Read(#[from] std::io::Error),

    /// The parameter file contents could not be parsed
    #[error("Invalid parameter file: {0}")]
    Parse(String),

    /// The parameter file extension is not .json or .toml
    #[error("Parameter file must be .json or .toml: {0}")]
    UnsupportedFormat(String),
}

/// Main error type for pathease
///
/// A unified error type covering geometry and parameter failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl Error {
    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type for geometry operations
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Result type for parameter handling
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::degenerate("polyline has 1 point");
        assert_eq!(err.to_string(), "Degenerate input: polyline has 1 point");

        let err = GeometryError::DegenerateSegment { end: PathEnd::End };
        assert_eq!(
            err.to_string(),
            "Degenerate segment at the end of the polyline: direction is undefined"
        );

        let err = GeometryError::InvalidDistance {
            name: "dist_start".to_string(),
            value: -1.5,
        };
        assert_eq!(err.to_string(), "Invalid distance 'dist_start': -1.5");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::Negative {
            name: "start_pushthrough_inset".to_string(),
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'start_pushthrough_inset' must not be negative, got -2"
        );

        let err = ParameterError::UnknownParameter("depth".to_string());
        assert_eq!(err.to_string(), "Unknown parameter: depth");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GeometryError::DegenerateSegment {
            end: PathEnd::Start,
        }
        .into();
        assert!(err.is_geometry_error());
        assert!(!err.is_parameter_error());

        let err: Error = ParameterError::UnknownParameter("x".to_string()).into();
        assert!(err.is_parameter_error());
    }
}
