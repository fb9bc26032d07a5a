//! Gaussian beam state: waist parameters tracked alongside the sampled field.
//!
//! Derived quantities (Rayleigh range, divergence, curvature, spot size) are
//! recomputed from the current waist on every call, since lens interactions
//! rewrite the waist between steps.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    backend::SpectralBackend,
    error::{require_positive, BeamError, BeamResult},
    units::Distance,
    wavefront::Wavefront,
};

/// Tuning knobs of the regime logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamOptions {
    /// Multiple of the Rayleigh range beyond which an input beam counts as
    /// spherical when it reaches a lens.
    pub rayleigh_factor: f64,
    /// Always take the Fresnel path, even between pupil/image planes.
    pub force_fresnel: bool,
}

impl Default for BeamOptions {
    fn default() -> Self {
        Self {
            rayleigh_factor: 2.0,
            force_fresnel: true,
        }
    }
}

pub struct GaussianBeam<B: SpectralBackend> {
    pub(crate) backend: B,
    pub(crate) wavefront: Wavefront,
    pub(crate) waist_radius: f64,
    pub(crate) position_z: f64,
    pub(crate) waist_position: f64,
    pub(crate) is_spherical: bool,
    pub(crate) options: BeamOptions,
}

impl<B: SpectralBackend> GaussianBeam<B> {
    /// Wrap `wavefront` as a planar beam whose waist of radius
    /// `waist_radius` sits at `z = 0`, the current position.
    pub fn new(backend: B, wavefront: Wavefront, waist_radius: impl Into<Distance>) -> BeamResult<Self> {
        Self::with_options(backend, wavefront, waist_radius, BeamOptions::default())
    }

    pub fn with_options(
        backend: B,
        wavefront: Wavefront,
        waist_radius: impl Into<Distance>,
        options: BeamOptions,
    ) -> BeamResult<Self> {
        let waist_radius = require_positive("waist_radius", waist_radius.into().in_meters("beam waist radius"))?;
        require_positive("rayleigh_factor", options.rayleigh_factor)?;
        let (nx, ny) = wavefront.shape();
        if nx != ny || nx == 0 {
            return Err(BeamError::NonSquareGrid { nx, ny });
        }
        Ok(Self {
            backend,
            wavefront,
            waist_radius,
            position_z: 0.0,
            waist_position: 0.0,
            is_spherical: false,
            options,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn wavefront(&self) -> &Wavefront {
        &self.wavefront
    }

    pub fn into_wavefront(self) -> Wavefront {
        self.wavefront
    }

    pub fn waist_radius(&self) -> f64 {
        self.waist_radius
    }

    pub fn waist_position(&self) -> f64 {
        self.waist_position
    }

    pub fn position_z(&self) -> f64 {
        self.position_z
    }

    pub fn is_spherical(&self) -> bool {
        self.is_spherical
    }

    pub fn wavelength(&self) -> f64 {
        self.wavefront.wavelength()
    }

    pub fn pixel_scale(&self) -> f64 {
        self.wavefront.pixel_scale()
    }

    /// Side length `N` of the square sample grid.
    pub fn grid_size(&self) -> usize {
        self.wavefront.grid().nx
    }

    pub fn options(&self) -> BeamOptions {
        self.options
    }

    /// Place the beam at `z` without propagating the field. For drivers that
    /// seed a state; the field is assumed to already describe that plane.
    pub fn set_position(&mut self, z: impl Into<Distance>) {
        self.position_z = z.into().in_meters("beam position");
    }

    /// Move the waist bookkeeping without touching the field.
    pub fn set_waist(&mut self, position: impl Into<Distance>, radius: impl Into<Distance>) -> BeamResult<()> {
        let radius = require_positive("waist_radius", radius.into().in_meters("beam waist radius"))?;
        self.waist_position = position.into().in_meters("beam waist position");
        self.waist_radius = radius;
        Ok(())
    }

    pub fn set_spherical(&mut self, spherical: bool) {
        self.is_spherical = spherical;
    }

    /// `z_R = π w0² / λ`.
    pub fn rayleigh_range(&self) -> f64 {
        PI * self.waist_radius * self.waist_radius / self.wavelength()
    }

    /// Full far-field divergence angle `2λ / (π w0)`.
    pub fn divergence(&self) -> f64 {
        2.0 * self.wavelength() / (PI * self.waist_radius)
    }

    /// Wavefront radius of curvature at `z`.
    ///
    /// Exactly at the waist the wavefront is flat and this returns
    /// `f64::INFINITY`; elsewhere the sign follows `z - waist_position`.
    pub fn radius_of_curvature(&self, z: f64) -> f64 {
        let dz = z - self.waist_position;
        if dz == 0.0 {
            return f64::INFINITY;
        }
        let ratio = self.rayleigh_range() / dz;
        dz * (1.0 + ratio * ratio)
    }

    /// 1/e² beam radius at `z`.
    pub fn spot_radius(&self, z: f64) -> f64 {
        let ratio = (z - self.waist_position) / self.rayleigh_range();
        self.waist_radius * (1.0 + ratio * ratio).sqrt()
    }

    pub fn total_energy(&self) -> f64 {
        self.wavefront.total_energy()
    }

    pub fn param_summary(&self) -> String {
        format!(
            "w_0:{:.2e}, z_w0={:.2e}\nz={:.2e}, z_R={:.2e}",
            self.waist_radius,
            self.waist_position,
            self.position_z,
            self.rayleigh_range()
        )
    }
}

impl<B: SpectralBackend> fmt::Display for GaussianBeam<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.param_summary())
    }
}

impl<B: SpectralBackend> fmt::Debug for GaussianBeam<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaussianBeam")
            .field("waist_radius", &self.waist_radius)
            .field("waist_position", &self.waist_position)
            .field("position_z", &self.position_z)
            .field("is_spherical", &self.is_spherical)
            .field("pixel_scale", &self.pixel_scale())
            .field("grid_size", &self.grid_size())
            .finish()
    }
}
