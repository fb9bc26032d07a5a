//! Run an optical train description against a transform backend.

use log::debug;

use crate::{
    backend::SpectralBackend,
    beam::GaussianBeam,
    error::BeamResult,
    grid::Grid2D,
    io::{BeamConfig, StepConfig, TrainConfig},
    lens::LensOutcome,
    optics::GaussianLens,
    units::Length,
    wavefront::Wavefront,
};

/// Beam parameters recorded after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamSnapshot {
    pub step: usize,
    pub label: String,
    pub position_z: f64,
    pub waist_position: f64,
    pub waist_radius: f64,
    pub rayleigh_range: f64,
    pub spot_radius: f64,
    pub is_spherical: bool,
    pub pixel_scale: f64,
    pub energy: f64,
}

impl BeamSnapshot {
    fn capture<B: SpectralBackend>(step: usize, label: String, beam: &GaussianBeam<B>) -> Self {
        Self {
            step,
            label,
            position_z: beam.position_z(),
            waist_position: beam.waist_position(),
            waist_radius: beam.waist_radius(),
            rayleigh_range: beam.rayleigh_range(),
            spot_radius: beam.spot_radius(beam.position_z()),
            is_spherical: beam.is_spherical(),
            pixel_scale: beam.pixel_scale(),
            energy: beam.total_energy(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrainTrace {
    pub snapshots: Vec<BeamSnapshot>,
}

/// Gaussian beam at `z = 0` sampled as described by `config`.
pub fn build_beam<B: SpectralBackend>(backend: B, config: &BeamConfig) -> BeamResult<GaussianBeam<B>> {
    let wavelength = config.wavelength.in_meters("beam wavelength");
    let waist_radius = config.waist_radius.in_meters("beam waist radius");
    let pixel_scale = config.grid.pixel_scale.in_meters("grid pixel scale");
    let grid = Grid2D::square(config.grid.n, pixel_scale);
    let wavefront = Wavefront::gaussian(grid, wavelength, waist_radius)?.with_plane_type(config.plane_type);
    GaussianBeam::with_options(backend, wavefront, Length::meters(waist_radius), config.options)
}

pub fn run_train<B: SpectralBackend>(backend: B, config: &TrainConfig) -> BeamResult<TrainTrace> {
    let mut beam = build_beam(backend, &config.beam)?;
    let mut trace = TrainTrace::default();
    trace
        .snapshots
        .push(BeamSnapshot::capture(0, "initial".to_string(), &beam));

    for (idx, step) in config.steps.iter().enumerate() {
        let label = match step {
            StepConfig::Propagate { z } => {
                let regime = beam.propagate_fresnel(*z)?;
                format!("propagate {regime:?}")
            }
            StepConfig::Lens {
                focal_length,
                z,
                name,
                ignore_wavefront,
                plane_type,
            } => {
                let mut lens = GaussianLens::new(*focal_length)?
                    .with_reference_wavelength(beam.wavelength())
                    .with_plane_type(*plane_type);
                if let Some(name) = name {
                    lens = lens.with_name(name.clone());
                }
                let outcome = beam.apply_optic(&lens, *z, *ignore_wavefront)?;
                let lens_name = name.as_deref().unwrap_or("lens");
                match outcome {
                    LensOutcome::FarField => format!("{lens_name} far-field"),
                    LensOutcome::ParametersOnly => format!("{lens_name} parameters-only"),
                    LensOutcome::Fresnel { regime, .. } => format!("{lens_name} {regime:?}"),
                }
            }
        };
        debug!("step {}: {label}\n{}", idx + 1, beam.param_summary());
        trace
            .snapshots
            .push(BeamSnapshot::capture(idx + 1, label, &beam));
    }
    Ok(trace)
}
