//! Thin-lens interaction: re-image the Gaussian waist through a lens and
//! imprint the net curvature on the sampled field.

use std::f64::consts::PI;

use log::debug;

use crate::{
    backend::SpectralBackend,
    beam::GaussianBeam,
    error::{recip, BeamError, BeamResult},
    optics::{AnalyticOptic, GaussianLens, QuadraticPhase},
    units::Distance,
};

/// Regime pair (before, after the lens) that selected the synthetic focal
/// length imprinted on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensRegime {
    /// Planar in, new waist within its Rayleigh range of the lens.
    NearField,
    /// Planar in, new waist beyond its Rayleigh range.
    PlanarToSpherical,
    SphericalToSpherical,
    SphericalToPlanar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LensOutcome {
    /// Pupil/image pair without forced Fresnel: handed to the far-field step.
    FarField,
    /// Beam parameters updated, field left untouched on request.
    ParametersOnly,
    /// Field multiplied by a quadratic phase of focal length `z_eff`.
    Fresnel { regime: LensRegime, z_eff: f64 },
}

impl<B: SpectralBackend> GaussianBeam<B> {
    /// Apply `lens` located at `z_lens`, updating the waist and, unless
    /// `ignore_wavefront` is set, the sampled field.
    pub fn apply_optic(
        &mut self,
        lens: &GaussianLens,
        z_lens: impl Into<Distance>,
        ignore_wavefront: bool,
    ) -> BeamResult<LensOutcome> {
        let zl = z_lens.into().in_meters("lens position");
        let focal_length = lens.focal_length();
        let new_waist = self.spot_radius(zl);

        // nothing below touches the beam until every fallible step is done
        let (spherical_before, input_radius) = if (self.waist_position - self.position_z).abs()
            > self.options.rayleigh_factor * self.rayleigh_range()
        {
            debug!("spherical input beam\n{}", self.param_summary());
            (true, self.position_z - self.waist_position)
        } else {
            (self.is_spherical, f64::INFINITY)
        };

        let (waist_position, waist_radius) = self.reimage_waist(lens, zl, new_waist)?;

        let beam_plane = self.wavefront.plane_type();
        if !self.options.force_fresnel
            && beam_plane.is_pupil_or_image()
            && lens.plane_type().is_pupil_or_image()
        {
            debug!("Simple pupil / image propagation, Fresnel unnecessary. Reverting to Fraunhofer.");
            self.commit(spherical_before, waist_position, waist_radius);
            self.wavefront.propagate_to(&self.backend, lens);
            return Ok(LensOutcome::FarField);
        }

        if ignore_wavefront {
            self.commit(spherical_before, waist_position, waist_radius);
            return Ok(LensOutcome::ParametersOnly);
        }

        let offset = zl - waist_position;
        let rayleigh_after = PI * waist_radius * waist_radius / self.wavelength();
        let spherical_after = offset.abs() > rayleigh_after;
        let power = 1.0 / focal_length;
        let (regime, z_eff, spherical) = match (spherical_before, spherical_after) {
            (false, false) => {
                debug!("Near-field, Plane-to-Plane Propagation.");
                (LensRegime::NearField, focal_length, false)
            }
            (false, true) => {
                debug!("Inside Rayleigh distance to Outside Rayleigh distance.");
                let z_eff = 1.0 / (power + recip(offset, "lens-to-waist distance")?);
                (LensRegime::PlanarToSpherical, z_eff, true)
            }
            (true, true) => {
                debug!("Spherical to Spherical wavefront propagation.");
                let z_eff = 1.0
                    / (power + recip(offset, "lens-to-waist distance")?
                        - recip(input_radius, "input beam radius")?);
                (LensRegime::SphericalToSpherical, z_eff, true)
            }
            (true, false) => {
                debug!("Spherical to Planar.");
                let z_eff = 1.0 / (power - recip(input_radius, "input beam radius")?);
                (LensRegime::SphericalToPlanar, z_eff, false)
            }
        };

        let effective = QuadraticPhase::from_meters(-z_eff)
            .map_err(|_| {
                BeamError::DegenerateGeometry(format!(
                    "{} produces a zero effective focal length",
                    lens.name()
                ))
            })?
            .with_reference_wavelength(self.wavelength());
        self.commit(spherical, waist_position, waist_radius);
        self.wavefront.apply(&effective);
        Ok(LensOutcome::Fresnel { regime, z_eff })
    }

    fn commit(&mut self, spherical: bool, waist_position: f64, waist_radius: f64) {
        self.is_spherical = spherical;
        self.waist_position = waist_position;
        self.waist_radius = waist_radius;
    }

    /// Standard Gaussian-beam imaging of the waist through a thin lens.
    /// Returns the new `(waist_position, waist_radius)`.
    fn reimage_waist(&self, lens: &GaussianLens, zl: f64, new_waist: f64) -> BeamResult<(f64, f64)> {
        let focal_length = lens.focal_length();
        let input_curvature = self.radius_of_curvature(zl);
        let r_curve = if self.wavefront.plane_type().is_pupil_or_image() {
            // at a focus or pupil the lens is the only curvature on the beam
            -focal_length
        } else {
            1.0 / (1.0 / input_curvature - 1.0 / focal_length)
        };
        // the second test catches curvatures that cancel only after rounding
        if input_curvature == focal_length || r_curve.is_infinite() {
            debug!("{} has a flat output wavefront", lens.name());
            return Ok((zl, new_waist));
        }

        let wavelength = self.wavelength();
        let beam_area = PI * new_waist * new_waist;
        let ratio = wavelength * r_curve / beam_area;
        let inverse = recip(ratio, "lens output curvature ratio")?;
        debug!("{} has a curvature of ={r_curve:.2e}", lens.name());
        Ok((
            -r_curve / (1.0 + ratio * ratio) + zl,
            new_waist / (1.0 + inverse * inverse).sqrt(),
        ))
    }
}
