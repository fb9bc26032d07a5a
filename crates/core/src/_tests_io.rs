#![cfg(test)]

use super::io::{ConfigError, StepConfig, TrainConfig};
use super::optics::PlaneType;
use super::units::{Distance, Length, LengthUnit};

const TRAIN: &str = r#"
[beam]
wavelength = { value = 1.0, unit = "um" }
waist_radius = { value = 1.0, unit = "mm" }
rayleigh_factor = 3.0

[beam.grid]
n = 32
pixel_scale = { value = 200.0, unit = "um" }

[[steps]]
kind = "propagate"
z = { value = 1.0, unit = "m" }

[[steps]]
kind = "lens"
name = "L1"
focal_length = { value = 500.0, unit = "mm" }
z = 1.0
ignore_wavefront = true
"#;

#[test]
fn parses_beam_and_steps() {
    let config = TrainConfig::from_str(TRAIN).unwrap();
    let beam = &config.beam;
    assert_eq!(beam.wavelength, Distance::Quantity(Length::new(1.0, LengthUnit::Um)));
    assert_eq!(beam.grid.n, 32);
    assert_eq!(beam.plane_type, PlaneType::Intermediate);
    assert_eq!(beam.options.rayleigh_factor, 3.0);
    assert!(beam.options.force_fresnel);
    assert_eq!(config.steps.len(), 2);

    match &config.steps[1] {
        StepConfig::Lens {
            focal_length,
            z,
            name,
            ignore_wavefront,
            plane_type,
        } => {
            assert!((focal_length.in_meters("test") - 0.5).abs() < 1e-15);
            assert_eq!(*z, Distance::Bare(1.0));
            assert_eq!(name.as_deref(), Some("L1"));
            assert!(*ignore_wavefront);
            assert_eq!(*plane_type, PlaneType::Intermediate);
        }
        other => panic!("expected a lens step, got {other:?}"),
    }
}

#[test]
fn steps_default_to_empty() {
    let config = TrainConfig::from_str(
        r#"
[beam]
wavelength = 1e-6
waist_radius = 1e-3
plane_type = "pupil"
force_fresnel = false

[beam.grid]
n = 16
pixel_scale = 1e-4
"#,
    )
    .unwrap();
    assert!(config.steps.is_empty());
    assert_eq!(config.beam.plane_type, PlaneType::Pupil);
    assert!(!config.beam.options.force_fresnel);
    assert_eq!(config.beam.options.rayleigh_factor, 2.0);
}

#[test]
fn rejects_empty_grid() {
    let err = TrainConfig::from_str(&TRAIN.replace("n = 32", "n = 0")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn rejects_zero_focal_length() {
    let err = TrainConfig::from_str(&TRAIN.replace("value = 500.0", "value = 0.0")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("steps[1]")));
}

#[test]
fn rejects_unknown_step_kind() {
    let err = TrainConfig::from_str(&TRAIN.replace("kind = \"propagate\"", "kind = \"mirror\"")).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}
