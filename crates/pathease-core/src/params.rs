//! Manipulation parameters
//!
//! The ten named distances and heights that describe how a drawing move is
//! reshaped. Parameters can be loaded from a JSON or TOML file, where any
//! omitted field keeps its default, and individually overridden by name.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names of every manipulation parameter, in declaration order.
pub const PARAMETER_NAMES: [&str; 10] = [
    "start_shift",
    "end_shift",
    "start_extend",
    "end_extend",
    "start_extend_height",
    "end_extend_height",
    "start_pushthrough_inset",
    "end_pushthrough_inset",
    "start_pushthrough_z",
    "end_pushthrough_z",
];

/// How to reshape a 2D drawing move into an eased 3D toolpath.
///
/// Offsets are signed: positive values extend the path outward along its
/// end tangents, negative values pull the end inward along the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManipulationParameters {
    /// Offset applied to the start of the drawn segment
    pub start_shift: f64,
    /// Offset applied to the end of the drawn segment
    pub end_shift: f64,
    /// Distance of the lead-in point from the path start
    pub start_extend: f64,
    /// Distance of the lead-out point from the path end
    pub end_extend: f64,
    /// Z of the lead-in point
    pub start_extend_height: f64,
    /// Z of the lead-out point
    pub end_extend_height: f64,
    /// Arc length of the start pushthrough ramp
    pub start_pushthrough_inset: f64,
    /// Arc length of the end pushthrough ramp
    pub end_pushthrough_inset: f64,
    /// Depth reached at the end of the start ramp
    pub start_pushthrough_z: f64,
    /// Depth left at the start of the end ramp
    pub end_pushthrough_z: f64,
}

impl Default for ManipulationParameters {
    fn default() -> Self {
        Self {
            start_shift: 1.0,
            end_shift: 0.0,
            start_extend: 5.0,
            end_extend: 5.0,
            start_extend_height: 4.0,
            end_extend_height: 4.0,
            start_pushthrough_inset: 2.0,
            end_pushthrough_inset: 2.0,
            start_pushthrough_z: -3.0,
            end_pushthrough_z: -2.0,
        }
    }
}

impl ManipulationParameters {
    /// Create parameters with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load parameters from a `.json` or `.toml` file and validate them
    pub fn load_from_file(path: &Path) -> ParameterResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let params: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ParameterError::Parse(format!("{}: {}", path.display(), e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| ParameterError::Parse(format!("{}: {}", path.display(), e)))?,
            _ => return Err(ParameterError::UnsupportedFormat(path.display().to_string())),
        };

        params.validate()?;
        Ok(params)
    }

    /// Save parameters to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> ParameterResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| ParameterError::Parse(e.to_string()))?,
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ParameterError::Parse(e.to_string()))?
            }
            _ => return Err(ParameterError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate parameters
    ///
    /// Every value must be finite and the pushthrough insets must not be
    /// negative.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in self.entries() {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite {
                    name: name.to_string(),
                    value,
                });
            }
        }

        for (name, value) in [
            ("start_pushthrough_inset", self.start_pushthrough_inset),
            ("end_pushthrough_inset", self.end_pushthrough_inset),
        ] {
            if value < 0.0 {
                return Err(ParameterError::Negative {
                    name: name.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| value)
    }

    /// Set a parameter by name. `-` is accepted in place of `_`.
    pub fn set(&mut self, name: &str, value: f64) -> ParameterResult<()> {
        let slot = match name.replace('-', "_").as_str() {
            "start_shift" => &mut self.start_shift,
            "end_shift" => &mut self.end_shift,
            "start_extend" => &mut self.start_extend,
            "end_extend" => &mut self.end_extend,
            "start_extend_height" => &mut self.start_extend_height,
            "end_extend_height" => &mut self.end_extend_height,
            "start_pushthrough_inset" => &mut self.start_pushthrough_inset,
            "end_pushthrough_inset" => &mut self.end_pushthrough_inset,
            "start_pushthrough_z" => &mut self.start_pushthrough_z,
            "end_pushthrough_z" => &mut self.end_pushthrough_z,
            _ => return Err(ParameterError::UnknownParameter(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    /// All parameters as `(name, value)` pairs
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            (PARAMETER_NAMES[0], self.start_shift),
            (PARAMETER_NAMES[1], self.end_shift),
            (PARAMETER_NAMES[2], self.start_extend),
            (PARAMETER_NAMES[3], self.end_extend),
            (PARAMETER_NAMES[4], self.start_extend_height),
            (PARAMETER_NAMES[5], self.end_extend_height),
            (PARAMETER_NAMES[6], self.start_pushthrough_inset),
            (PARAMETER_NAMES[7], self.end_pushthrough_inset),
            (PARAMETER_NAMES[8], self.start_pushthrough_z),
            (PARAMETER_NAMES[9], self.end_pushthrough_z),
        ]
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
