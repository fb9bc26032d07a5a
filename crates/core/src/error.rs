//! Error types for beam construction and propagation.

/// Failures raised by the beam state machine and its optics.
///
/// Zero-distance steps are not errors: `wts`/`stw`/`ptp` report them as
/// [`StepOutcome::NoOp`](crate::propagation::StepOutcome::NoOp) instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BeamError {
    #[error("invalid beam parameter `{name}` = {value}: must be positive and finite")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("sampled field must be square, got {nx}x{ny}")]
    NonSquareGrid { nx: usize, ny: usize },

    #[error("degenerate beam geometry: {0}")]
    DegenerateGeometry(String),
}

pub type BeamResult<T> = Result<T, BeamError>;

/// Reciprocal of a length that must not be exactly zero.
///
/// Infinite inputs are fine and map to zero curvature.
pub(crate) fn recip(value: f64, what: &str) -> BeamResult<f64> {
    if value == 0.0 || value.is_nan() {
        return Err(BeamError::DegenerateGeometry(format!(
            "{what} is {value}, reciprocal undefined"
        )));
    }
    Ok(1.0 / value)
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> BeamResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(BeamError::InvalidParameter { name, value })
    }
}
