//! Fresnel propagation primitives and the regime dispatcher.
//!
//! The four primitives follow Lawrence's Gaussian-beam bookkeeping:
//! plane-to-plane inside the Rayleigh range, waist-to-spherical and
//! spherical-to-waist across it. Each one leaves the field, pixel scale and
//! position describing the same plane.

use std::f64::consts::PI;

use log::{debug, error};
use num_complex::Complex64;

use crate::{
    backend::SpectralBackend,
    beam::GaussianBeam,
    error::{BeamError, BeamResult},
    optics::QuadraticPhase,
    units::Distance,
};

/// Result of a single primitive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Propagated,
    /// Zero longitudinal displacement; nothing was touched.
    NoOp,
}

/// Branch taken by [`GaussianBeam::propagate_fresnel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Planar beam inside the Rayleigh range: `ptp(z)`.
    PlaneToPlane,
    /// Planar beam outside the Rayleigh range: `ptp(waist)` then `wts(z)`.
    PlaneToSpherical,
    /// Spherical beam inside the Rayleigh range: `stw(waist)` then `ptp(z)`.
    SphericalToPlane,
    /// Spherical beam outside the Rayleigh range: `stw(waist)` only.
    SphericalToWaist,
}

impl<B: SpectralBackend> GaussianBeam<B> {
    /// Single-step Fresnel transform over the signed distance `z`.
    ///
    /// The output grid spacing is `λ|z| / (N·pixel_scale)`. Negative
    /// distances run the inverse transform. `position_z` is left alone; the
    /// callers that move the beam update it.
    ///
    /// This departs from the textbook two-phase formula, whose second factor
    /// is `exp(i r²/2z)` on the input grid with the spacing unchanged. Here
    /// the second factor is `exp(i k r²/2z)` evaluated on the rescaled
    /// output grid, which makes a forward step followed by the opposite step
    /// the identity.
    pub fn propagate_direct(&mut self, z: impl Into<Distance>) -> BeamResult<()> {
        let z = z.into().in_meters("direct propagation distance");
        self.direct(z)
    }

    pub(crate) fn direct(&mut self, z: f64) -> BeamResult<()> {
        debug!("Direct propagation over z={z:.2e}");
        if z == 0.0 {
            return Err(BeamError::DegenerateGeometry(
                "direct Fresnel transform over zero distance".to_string(),
            ));
        }
        let wavelength = self.wavelength();
        let k = 2.0 * PI / wavelength;
        let n = self.grid_size() as f64;
        let pixel_scale = self.pixel_scale();
        debug!(
            "Propagation parameters: k={k:.2e}, S={:.2e}, z={z:.2e}",
            n * pixel_scale
        );

        let quad_phase = QuadraticPhase::from_meters(z)?.with_reference_wavelength(wavelength);
        self.wavefront.apply(&quad_phase);

        let field = self.wavefront.field_mut();
        if z > 0.0 {
            self.backend.centered_forward_fft_2d(field);
        } else {
            self.backend.centered_inverse_fft_2d(field);
            let samples = field.len() as f64;
            self.backend.scale(Complex64::new(samples, 0.0), field);
        }

        self.wavefront
            .set_pixel_scale(wavelength * z.abs() / (n * pixel_scale));
        self.wavefront.apply(&quad_phase);
        let norm = Complex64::from_polar(1.0, k * z) / Complex64::new(0.0, wavelength * z)
            * pixel_scale
            * pixel_scale;
        self.backend.scale(norm, self.wavefront.field_mut());
        Ok(())
    }

    /// Plane-to-plane step to the absolute position `z2`.
    pub fn ptp(&mut self, z2: impl Into<Distance>) -> BeamResult<StepOutcome> {
        let z2 = z2.into().in_meters("plane-to-plane target");
        self.ptp_to(z2)
    }

    pub(crate) fn ptp_to(&mut self, z2: f64) -> BeamResult<StepOutcome> {
        let dz = z2 - self.position_z;
        debug!("Plane to Plane propagation, dz={dz:.3e}");
        if dz == 0.0 {
            error!("Plane to Plane propagation stopped, no change in distance.");
            return Ok(StepOutcome::NoOp);
        }
        self.direct(dz)?;
        self.position_z = z2;
        Ok(StepOutcome::Propagated)
    }

    /// Waist-to-spherical step to the absolute position `z2`. The beam is
    /// spherical afterwards.
    pub fn wts(&mut self, z2: impl Into<Distance>) -> BeamResult<StepOutcome> {
        let z2 = z2.into().in_meters("waist-to-spherical target");
        self.wts_to(z2)
    }

    pub(crate) fn wts_to(&mut self, z2: f64) -> BeamResult<StepOutcome> {
        let dz = z2 - self.position_z;
        debug!("Waist to Spherical propagation, dz={dz:.3e}");
        if dz == 0.0 {
            error!("Waist to Spherical propagation stopped, no change in distance.");
            return Ok(StepOutcome::NoOp);
        }
        let curvature = QuadraticPhase::from_meters(-dz)?.with_reference_wavelength(self.wavelength());
        self.wavefront.apply(&curvature);
        self.transform_toward(dz);
        self.advance(dz);
        self.is_spherical = true;
        Ok(StepOutcome::Propagated)
    }

    /// Spherical-to-waist step to the absolute position `z2`. The beam is
    /// planar afterwards.
    pub fn stw(&mut self, z2: impl Into<Distance>) -> BeamResult<StepOutcome> {
        let z2 = z2.into().in_meters("spherical-to-waist target");
        self.stw_to(z2)
    }

    pub(crate) fn stw_to(&mut self, z2: f64) -> BeamResult<StepOutcome> {
        let dz = z2 - self.position_z;
        debug!("Spherical to Waist propagation, dz={dz:.3e}");
        if dz == 0.0 {
            error!("Spherical to Waist propagation stopped, no change in distance.");
            return Ok(StepOutcome::NoOp);
        }
        self.transform_toward(dz);
        let curvature = QuadraticPhase::from_meters(dz)?.with_reference_wavelength(self.wavelength());
        self.wavefront.apply(&curvature);
        self.advance(dz);
        self.is_spherical = false;
        Ok(StepOutcome::Propagated)
    }

    /// Forward transform times `N` for `dz > 0`, inverse times `1/N` otherwise.
    fn transform_toward(&mut self, dz: f64) {
        let n = self.grid_size() as f64;
        let field = self.wavefront.field_mut();
        if dz > 0.0 {
            self.backend.centered_forward_fft_2d(field);
            self.backend.scale(Complex64::new(n, 0.0), field);
        } else {
            self.backend.centered_inverse_fft_2d(field);
            self.backend.scale(Complex64::new(1.0 / n, 0.0), field);
        }
    }

    fn advance(&mut self, dz: f64) {
        let n = self.grid_size() as f64;
        let pixel_scale = self.wavelength() * dz.abs() / (n * self.pixel_scale());
        self.wavefront.set_pixel_scale(pixel_scale);
        self.position_z += dz;
    }

    /// Whether the beam is currently within one Rayleigh range of its waist.
    ///
    /// Only the current position is tested; `_target` does not enter the
    /// decision.
    pub fn planar_range(&self, _target: impl Into<Distance>) -> bool {
        (self.waist_position - self.position_z).abs() < self.rayleigh_range()
    }

    /// Advance the beam to the absolute position `z`, composing primitives
    /// according to the current regime.
    pub fn propagate_fresnel(&mut self, z: impl Into<Distance>) -> BeamResult<Regime> {
        let z = z.into().in_meters("Fresnel propagation target");
        let waist = self.waist_position;
        debug!("waist at z={waist:.3e}");
        let regime = match (self.is_spherical, self.planar_range(z)) {
            (false, true) => {
                debug!("Plane to Plane Regime");
                self.ptp_to(z)?;
                Regime::PlaneToPlane
            }
            (false, false) => {
                debug!("Plane to Spherical, inside Z_R to outside Z_R");
                self.ptp_to(waist)?;
                self.wts_to(z)?;
                Regime::PlaneToSpherical
            }
            (true, true) => {
                debug!("Spherical to Plane Regime, outside Z_R to inside Z_R");
                self.stw_to(waist)?;
                self.ptp_to(z)?;
                Regime::SphericalToPlane
            }
            (true, false) => {
                debug!("Spherical to Spherical, outside Z_R to waist (z_w0)");
                debug!("Starting pixel scale: {:.2e}", self.pixel_scale());
                self.stw_to(waist)?;
                debug!("Intermediate pixel scale: {:.2e}", self.pixel_scale());
                Regime::SphericalToWaist
            }
        };
        Ok(regime)
    }
}
