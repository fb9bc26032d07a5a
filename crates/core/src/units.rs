//! Length units and the "bare number means meters" convention.
//!
//! Every longitudinal distance accepted by the engine goes through
//! [`Distance`]. A dimensioned [`Length`] converts silently; a bare `f64`
//! is taken to be meters and logs a warning so unit slips are visible.

use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    M,
    Cm,
    Mm,
    Um,
    Nm,
}

impl LengthUnit {
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::M => 1.0,
            LengthUnit::Cm => 1e-2,
            LengthUnit::Mm => 1e-3,
            LengthUnit::Um => 1e-6,
            LengthUnit::Nm => 1e-9,
        }
    }
}

/// A length carrying its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::M)
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Mm)
    }

    pub fn micrometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Um)
    }

    pub fn to_meters(self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }
}

/// A distance as supplied by a caller: dimensioned, or a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Quantity(Length),
    Bare(f64),
}

impl Distance {
    /// Resolve to meters. Bare values are accepted with a warning naming
    /// `context`.
    pub fn in_meters(self, context: &str) -> f64 {
        match self {
            Distance::Quantity(length) => length.to_meters(),
            Distance::Bare(value) => {
                warn!("{context}: {value:.3e} has no units, assuming meters");
                value
            }
        }
    }

    pub fn is_dimensioned(&self) -> bool {
        matches!(self, Distance::Quantity(_))
    }
}

impl From<Length> for Distance {
    fn from(value: Length) -> Self {
        Distance::Quantity(value)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance::Bare(value)
    }
}
