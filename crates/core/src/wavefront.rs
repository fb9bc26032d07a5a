//! Generic sampled wavefront: a complex field, its wavelength and the kind
//! of plane it currently sits on.

use std::ops::MulAssign;

use log::debug;
use num_complex::Complex64;

use crate::{
    backend::SpectralBackend,
    error::{require_positive, BeamResult},
    field::Field2D,
    grid::Grid2D,
    optics::{AnalyticOptic, PlaneType},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Wavefront {
    field: Field2D,
    wavelength: f64,
    plane_type: PlaneType,
}

impl Wavefront {
    pub fn new(field: Field2D, wavelength: f64) -> BeamResult<Self> {
        require_positive("wavelength", wavelength)?;
        require_positive("pixel_scale", field.pixel_scale())?;
        Ok(Self {
            field,
            wavelength,
            plane_type: PlaneType::Pupil,
        })
    }

    /// Unit-amplitude TEM00 profile `exp(-r²/w²)` on `grid`.
    pub fn gaussian(grid: Grid2D, wavelength: f64, waist_radius: f64) -> BeamResult<Self> {
        require_positive("waist_radius", waist_radius)?;
        let w2 = waist_radius * waist_radius;
        let field = Field2D::from_fn(grid, |x, y| Complex64::new((-(x * x + y * y) / w2).exp(), 0.0));
        Self::new(field, wavelength)
    }

    pub fn with_plane_type(mut self, plane_type: PlaneType) -> Self {
        self.plane_type = plane_type;
        self
    }

    pub fn field(&self) -> &Field2D {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field2D {
        &mut self.field
    }

    pub fn grid(&self) -> Grid2D {
        self.field.grid()
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn pixel_scale(&self) -> f64 {
        self.field.pixel_scale()
    }

    pub fn set_pixel_scale(&mut self, pixel_scale: f64) {
        self.field.set_pixel_scale(pixel_scale);
    }

    pub fn plane_type(&self) -> PlaneType {
        self.plane_type
    }

    pub fn set_plane_type(&mut self, plane_type: PlaneType) {
        self.plane_type = plane_type;
    }

    /// `(nx, ny)` of the sample grid.
    pub fn shape(&self) -> (usize, usize) {
        let grid = self.grid();
        (grid.nx, grid.ny)
    }

    /// Physical `(x, y)` positions of every sample, row-major.
    pub fn coordinates(&self) -> (Vec<f64>, Vec<f64>) {
        self.grid().coordinates()
    }

    pub fn total_energy(&self) -> f64 {
        self.field.total_energy()
    }

    /// Multiply the field by `optic`'s phasor.
    pub fn apply<O: AnalyticOptic + ?Sized>(&mut self, optic: &O) {
        let phasor = optic.phasor(self);
        self.field.multiply(&phasor);
    }

    /// Far-field step onto `optic`'s plane.
    ///
    /// Pupil to image is a unitary centred forward transform; image to
    /// pupil is its inverse. Image-plane pixel scale is angular
    /// (radians per sample). Any other pairing only relabels the plane.
    pub fn propagate_to<B, O>(&mut self, backend: &B, optic: &O)
    where
        B: SpectralBackend + ?Sized,
        O: AnalyticOptic + ?Sized,
    {
        let target = optic.plane_type();
        let n = self.grid().nx as f64;
        match (self.plane_type, target) {
            (PlaneType::Pupil, PlaneType::Image) => {
                debug!("Fraunhofer pupil -> image onto {}", optic.name());
                backend.centered_forward_fft_2d(&mut self.field);
                backend.scale(Complex64::new(1.0 / n, 0.0), &mut self.field);
                self.reciprocal_pixel_scale();
            }
            (PlaneType::Image, PlaneType::Pupil) => {
                debug!("Fraunhofer image -> pupil onto {}", optic.name());
                backend.centered_inverse_fft_2d(&mut self.field);
                backend.scale(Complex64::new(n, 0.0), &mut self.field);
                self.reciprocal_pixel_scale();
            }
            (from, to) => {
                debug!("no transform between {} and {}", from.label(), to.label());
            }
        }
        self.plane_type = target;
    }

    fn reciprocal_pixel_scale(&mut self) {
        let n = self.grid().nx as f64;
        let scale = self.wavelength / (n * self.pixel_scale());
        self.set_pixel_scale(scale);
    }
}

impl<O: AnalyticOptic + ?Sized> MulAssign<&O> for Wavefront {
    fn mul_assign(&mut self, optic: &O) {
        self.apply(optic);
    }
}
