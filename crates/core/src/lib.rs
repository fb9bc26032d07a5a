//! Gaussian-beam Fresnel propagation through thin-lens optical trains.
//!
//! [`beam::GaussianBeam`] tracks the waist of a coherent beam alongside its
//! sampled field. [`propagation`] moves it along the optical axis, picking
//! plane-to-plane or spherical transforms by comparing against the Rayleigh
//! range, and [`lens`] re-images the waist through thin lenses. Transforms
//! come from an injected [`backend::SpectralBackend`].

pub mod backend;
pub mod beam;
pub mod error;
pub mod field;
pub mod grid;
pub mod io;
pub mod lens;
pub mod optics;
pub mod propagation;
pub mod train;
pub mod units;
pub mod wavefront;

pub use beam::{BeamOptions, GaussianBeam};
pub use error::{BeamError, BeamResult};
pub use lens::{LensOutcome, LensRegime};
pub use optics::{AnalyticOptic, GaussianLens, PlaneType, QuadraticPhase};
pub use propagation::{Regime, StepOutcome};
pub use units::{Distance, Length, LengthUnit};
pub use wavefront::Wavefront;


#[cfg(test)]
mod _tests_backend;
#[cfg(test)]
mod _tests_field;
#[cfg(test)]
mod _tests_grid;
#[cfg(test)]
mod _tests_io;
#[cfg(test)]
mod _tests_optics;
