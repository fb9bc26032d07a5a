//! Uniform square-pixel sampling grid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid2D {
    pub nx: usize,
    pub ny: usize,
    /// Physical length of one sample (meters, or radians in image planes).
    pub pixel_scale: f64,
}

impl Grid2D {
    pub fn new(nx: usize, ny: usize, pixel_scale: f64) -> Self {
        Self { nx, ny, pixel_scale }
    }

    pub fn square(n: usize, pixel_scale: f64) -> Self {
        Self::new(n, n, pixel_scale)
    }

    #[inline]
    pub fn idx(&self, ix: usize, iy: usize) -> usize {
        iy * self.nx + ix
    }

    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_square(&self) -> bool {
        self.nx == self.ny
    }

    /// Aperture extent along x, `S = N * pixel_scale`.
    pub fn extent(&self) -> f64 {
        self.nx as f64 * self.pixel_scale
    }

    /// Physical position of sample `i` along an axis of `n` samples.
    ///
    /// Sample `n / 2` sits on the optical axis, which is where `fftshift`
    /// places the DC bin.
    #[inline]
    pub fn axis_position(&self, i: usize, n: usize) -> f64 {
        (i as f64 - (n / 2) as f64) * self.pixel_scale
    }

    /// Row-major `(x, y)` coordinate arrays of the sample grid.
    pub fn coordinates(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.len());
        let mut ys = Vec::with_capacity(self.len());
        for iy in 0..self.ny {
            let y = self.axis_position(iy, self.ny);
            for ix in 0..self.nx {
                xs.push(self.axis_position(ix, self.nx));
                ys.push(y);
            }
        }
        (xs, ys)
    }

    /// Squared radial distance `x² + y²` for every sample, row-major.
    pub fn radius_squared(&self) -> Vec<f64> {
        let (xs, ys) = self.coordinates();
        xs.iter().zip(&ys).map(|(x, y)| x * x + y * y).collect()
    }
}
