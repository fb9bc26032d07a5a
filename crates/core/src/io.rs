//! Optical-train description files.
//!
//! A train is a beam definition followed by an ordered list of steps:
//!
//! ```toml
//! [beam]
//! wavelength = { value = 1.0, unit = "um" }
//! waist_radius = { value = 1.0, unit = "mm" }
//! plane_type = "intermediate"
//! rayleigh_factor = 2.0
//! force_fresnel = true
//!
//! [beam.grid]
//! n = 256
//! pixel_scale = { value = 40.0, unit = "um" }
//!
//! [[steps]]
//! kind = "propagate"
//! z = { value = 1.0, unit = "m" }
//!
//! [[steps]]
//! kind = "lens"
//! name = "L1"
//! focal_length = { value = 500.0, unit = "mm" }
//! z = { value = 1.0, unit = "m" }
//! ```
//!
//! Bare numbers are accepted anywhere a length is expected and are read as
//! meters (with a warning).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{beam::BeamOptions, optics::PlaneType, units::Distance};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub n: usize,
    pub pixel_scale: Distance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamConfig {
    pub wavelength: Distance,
    pub waist_radius: Distance,
    pub grid: GridConfig,
    #[serde(default = "default_plane_type")]
    pub plane_type: PlaneType,
    #[serde(flatten)]
    pub options: BeamOptions,
}

fn default_plane_type() -> PlaneType {
    PlaneType::Intermediate
}

fn default_lens_plane_type() -> PlaneType {
    PlaneType::Intermediate
}

/// One element of the optical train.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepConfig {
    /// Advance the beam to the absolute position `z`.
    Propagate { z: Distance },
    /// Thin lens of `focal_length` at position `z`.
    Lens {
        focal_length: Distance,
        z: Distance,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        ignore_wavefront: bool,
        #[serde(default = "default_lens_plane_type")]
        plane_type: PlaneType,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub beam: BeamConfig,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

impl TrainConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: TrainConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let beam = &self.beam;
        if beam.grid.n == 0 {
            return Err(ConfigError::Invalid("beam.grid.n must be non-zero".into()));
        }
        let positives = [
            ("beam.wavelength", beam.wavelength),
            ("beam.waist_radius", beam.waist_radius),
            ("beam.grid.pixel_scale", beam.grid.pixel_scale),
        ];
        for (name, distance) in positives {
            let value = distance.in_meters(name);
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(beam.options.rayleigh_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "beam.rayleigh_factor must be positive, got {}",
                beam.options.rayleigh_factor
            )));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            if let StepConfig::Lens { focal_length, .. } = step {
                if focal_length.in_meters("lens focal length") == 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "steps[{idx}]: focal_length must be non-zero"
                    )));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid train configuration: {0}")]
    Invalid(String),
}
