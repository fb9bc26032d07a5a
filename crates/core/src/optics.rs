//! Analytic optical elements that produce a complex phasor screen.

use std::f64::consts::PI;

use log::debug;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{
    error::{BeamError, BeamResult},
    units::Distance,
    wavefront::Wavefront,
};

/// Reference wavelength used when an optic is built without one.
pub const DEFAULT_REFERENCE_WAVELENGTH: f64 = 2e-6;

/// Kind of surface a wavefront or optic sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneType {
    Pupil,
    Image,
    Detector,
    Rotation,
    Intermediate,
}

impl PlaneType {
    /// Pupil and image planes are the ones a plain Fraunhofer step connects.
    pub fn is_pupil_or_image(self) -> bool {
        matches!(self, PlaneType::Pupil | PlaneType::Image)
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaneType::Pupil => "Pupil plane",
            PlaneType::Image => "Image plane",
            PlaneType::Detector => "Detector",
            PlaneType::Rotation => "Rotation",
            PlaneType::Intermediate => "Intermediate Surface",
        }
    }
}

/// An optic that multiplies a wavefront by a complex factor.
pub trait AnalyticOptic {
    fn name(&self) -> &str;
    fn plane_type(&self) -> PlaneType;

    /// Row-major phasor screen sampled on `wave`'s coordinate grid.
    fn phasor(&self, wave: &Wavefront) -> Vec<Complex64>;
}

/// Quadratic (curvature) phase screen `exp(i k r² / 2z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticPhase {
    name: String,
    plane_type: PlaneType,
    z: f64,
    reference_wavelength: f64,
}

impl QuadraticPhase {
    /// Build a screen for the signed distance `z`.
    ///
    /// `z == 0` has no finite phase and is rejected. An infinite `z` is a
    /// flat screen.
    pub fn new(z: impl Into<Distance>) -> BeamResult<Self> {
        Self::from_meters(z.into().in_meters("quadratic phase distance"))
    }

    /// Same as [`new`](Self::new) for a distance already in meters.
    pub fn from_meters(z: f64) -> BeamResult<Self> {
        if z == 0.0 || z.is_nan() {
            return Err(BeamError::DegenerateGeometry(format!(
                "quadratic phase requires a non-zero distance, got {z}"
            )));
        }
        Ok(Self {
            name: "Quadratic Wavefront Curvature Operator".to_string(),
            plane_type: PlaneType::Intermediate,
            z,
            reference_wavelength: DEFAULT_REFERENCE_WAVELENGTH,
        })
    }

    pub fn with_reference_wavelength(mut self, wavelength: f64) -> Self {
        self.reference_wavelength = wavelength;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_plane_type(mut self, plane_type: PlaneType) -> Self {
        self.plane_type = plane_type;
        self
    }

    /// Signed curvature distance in meters.
    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn reference_wavelength(&self) -> f64 {
        self.reference_wavelength
    }
}

impl AnalyticOptic for QuadraticPhase {
    fn name(&self) -> &str {
        &self.name
    }

    fn plane_type(&self) -> PlaneType {
        self.plane_type
    }

    fn phasor(&self, wave: &Wavefront) -> Vec<Complex64> {
        let k = 2.0 * PI / self.reference_wavelength;
        wave.grid()
            .radius_squared()
            .into_iter()
            .map(|rsqd| Complex64::from_polar(1.0, k * rsqd / (2.0 * self.z)))
            .collect()
    }
}

/// Thin lens of focal length `f`; a converging lens (`f > 0`) applies the
/// curvature of a [`QuadraticPhase`] at `-f`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianLens {
    focal_length: f64,
    curvature: QuadraticPhase,
}

impl GaussianLens {
    pub fn new(focal_length: impl Into<Distance>) -> BeamResult<Self> {
        let focal_length = focal_length.into().in_meters("lens focal length");
        let curvature = QuadraticPhase::from_meters(-focal_length)
            .map_err(|_| {
                BeamError::DegenerateGeometry(format!(
                    "lens focal length must be non-zero, got {focal_length}"
                ))
            })?
            .with_name("Gaussian Lens");
        debug!("Gaussian lens f={focal_length:.3e} m");
        Ok(Self {
            focal_length,
            curvature,
        })
    }

    pub fn with_reference_wavelength(mut self, wavelength: f64) -> Self {
        self.curvature = self.curvature.with_reference_wavelength(wavelength);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.curvature = self.curvature.with_name(name);
        self
    }

    pub fn with_plane_type(mut self, plane_type: PlaneType) -> Self {
        self.curvature = self.curvature.with_plane_type(plane_type);
        self
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn curvature(&self) -> &QuadraticPhase {
        &self.curvature
    }
}

impl AnalyticOptic for GaussianLens {
    fn name(&self) -> &str {
        self.curvature.name()
    }

    fn plane_type(&self) -> PlaneType {
        self.curvature.plane_type()
    }

    fn phasor(&self, wave: &Wavefront) -> Vec<Complex64> {
        self.curvature.phasor(wave)
    }
}
