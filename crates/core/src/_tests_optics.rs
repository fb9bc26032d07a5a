#![cfg(test)]

use std::f64::consts::PI;

use num_complex::Complex64;

use super::error::BeamError;
use super::grid::Grid2D;
use super::optics::{AnalyticOptic, GaussianLens, PlaneType, QuadraticPhase, DEFAULT_REFERENCE_WAVELENGTH};
use super::units::Length;
use super::wavefront::Wavefront;

fn flat_wave(n: usize, pixel_scale: f64) -> Wavefront {
    let grid = Grid2D::square(n, pixel_scale);
    Wavefront::gaussian(grid, 1e-6, 1.0).unwrap()
}

#[test]
fn quadratic_phase_matches_closed_form() {
    let wave = flat_wave(8, 1e-4);
    let optic = QuadraticPhase::new(Length::meters(2.0))
        .unwrap()
        .with_reference_wavelength(1e-6);
    let phasor = optic.phasor(&wave);
    let grid = wave.grid();
    let k = 2.0 * PI / 1e-6;

    assert_eq!(phasor[grid.idx(4, 4)], Complex64::new(1.0, 0.0));
    let (xs, ys) = wave.coordinates();
    for (idx, value) in phasor.iter().enumerate() {
        let rsqd = xs[idx] * xs[idx] + ys[idx] * ys[idx];
        let expected = Complex64::from_polar(1.0, k * rsqd / 4.0);
        assert!((value - expected).norm() < 1e-12);
        assert!((value.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn quadratic_phase_defaults() {
    let optic = QuadraticPhase::new(Length::millimeters(-250.0)).unwrap();
    assert_eq!(optic.name(), "Quadratic Wavefront Curvature Operator");
    assert_eq!(optic.plane_type(), PlaneType::Intermediate);
    assert_eq!(optic.reference_wavelength(), DEFAULT_REFERENCE_WAVELENGTH);
    assert!((optic.z() + 0.25).abs() < 1e-15);
}

#[test]
fn quadratic_phase_rejects_zero_distance() {
    let err = QuadraticPhase::new(Length::meters(0.0)).unwrap_err();
    assert!(matches!(err, BeamError::DegenerateGeometry(_)));
}

#[test]
fn infinite_distance_is_a_flat_screen() {
    let wave = flat_wave(4, 1e-3);
    let optic = QuadraticPhase::from_meters(f64::INFINITY).unwrap();
    assert!(optic
        .phasor(&wave)
        .iter()
        .all(|value| *value == Complex64::new(1.0, 0.0)));
}

#[test]
fn lens_is_curvature_at_negative_focal_length() {
    let wave = flat_wave(8, 1e-4);
    let lens = GaussianLens::new(Length::meters(0.5))
        .unwrap()
        .with_reference_wavelength(1e-6);
    let curvature = QuadraticPhase::from_meters(-0.5)
        .unwrap()
        .with_reference_wavelength(1e-6);

    assert_eq!(lens.focal_length(), 0.5);
    assert_eq!(lens.curvature().z(), -0.5);
    assert_eq!(lens.phasor(&wave), curvature.phasor(&wave));
}

#[test]
fn lens_naming_and_plane_type() {
    let lens = GaussianLens::new(Length::meters(1.0)).unwrap();
    assert_eq!(lens.name(), "Gaussian Lens");
    assert_eq!(lens.plane_type(), PlaneType::Intermediate);

    let lens = lens.with_name("L1").with_plane_type(PlaneType::Pupil);
    assert_eq!(lens.name(), "L1");
    assert_eq!(lens.plane_type(), PlaneType::Pupil);
}

#[test]
fn lens_rejects_zero_focal_length() {
    assert!(matches!(
        GaussianLens::new(Length::meters(0.0)),
        Err(BeamError::DegenerateGeometry(_))
    ));
}

#[test]
fn only_pupil_and_image_planes_take_the_fraunhofer_path() {
    assert!(PlaneType::Pupil.is_pupil_or_image());
    assert!(PlaneType::Image.is_pupil_or_image());
    assert!(!PlaneType::Detector.is_pupil_or_image());
    assert!(!PlaneType::Rotation.is_pupil_or_image());
    assert!(!PlaneType::Intermediate.is_pupil_or_image());
}
