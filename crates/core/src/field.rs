//! Contiguous complex-valued field storage on a uniform 2D grid.

use num_complex::Complex64;

use crate::grid::Grid2D;

#[derive(Debug, Clone, PartialEq)]
pub struct Field2D {
    grid: Grid2D,
    data: Vec<Complex64>,
}

impl Field2D {
    pub fn zeros(grid: Grid2D) -> Self {
        Self {
            data: vec![Complex64::default(); grid.len()],
            grid,
        }
    }

    pub fn from_vec(grid: Grid2D, data: Vec<Complex64>) -> Self {
        assert_eq!(data.len(), grid.len(), "data length must match grid size");
        Self { grid, data }
    }

    /// Sample `f(x, y)` at every grid position.
    pub fn from_fn(grid: Grid2D, f: impl Fn(f64, f64) -> Complex64) -> Self {
        let (xs, ys) = grid.coordinates();
        let data = xs.iter().zip(&ys).map(|(&x, &y)| f(x, y)).collect();
        Self { grid, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn grid(&self) -> Grid2D {
        self.grid
    }

    pub fn pixel_scale(&self) -> f64 {
        self.grid.pixel_scale
    }

    pub fn set_pixel_scale(&mut self, pixel_scale: f64) {
        self.grid.pixel_scale = pixel_scale;
    }

    pub fn idx(&self, ix: usize, iy: usize) -> usize {
        self.grid.idx(ix, iy)
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    pub fn get(&self, ix: usize, iy: usize) -> &Complex64 {
        let idx = self.idx(ix, iy);
        &self.data[idx]
    }

    pub fn get_mut(&mut self, ix: usize, iy: usize) -> &mut Complex64 {
        let idx = self.idx(ix, iy);
        &mut self.data[idx]
    }

    pub fn fill(&mut self, value: Complex64) {
        self.data.fill(value);
    }

    pub fn scale(&mut self, alpha: Complex64) {
        for value in &mut self.data {
            *value *= alpha;
        }
    }

    /// Pointwise product with a same-shaped phasor screen.
    pub fn multiply(&mut self, phasor: &[Complex64]) {
        assert_eq!(phasor.len(), self.data.len(), "phasor must match grid size");
        for (value, factor) in self.data.iter_mut().zip(phasor) {
            *value *= factor;
        }
    }

    /// Sum of squared magnitudes over all samples.
    pub fn total_energy(&self) -> f64 {
        self.data.iter().map(|v| v.norm_sqr()).sum()
    }

    /// Move the zero-frequency bin from index 0 to the grid centre.
    pub fn fftshift(&mut self) {
        self.roll(self.grid.nx / 2, self.grid.ny / 2);
    }

    /// Inverse of [`fftshift`](Self::fftshift); differs from it for odd sizes.
    pub fn ifftshift(&mut self) {
        let (nx, ny) = (self.grid.nx, self.grid.ny);
        self.roll(nx - nx / 2, ny - ny / 2);
    }

    /// Cyclic shift: the sample at `(ix, iy)` moves to `(ix + sx, iy + sy)`.
    fn roll(&mut self, sx: usize, sy: usize) {
        let (nx, ny) = (self.grid.nx, self.grid.ny);
        if nx == 0 || ny == 0 {
            return;
        }
        let mut rolled = vec![Complex64::default(); self.data.len()];
        for iy in 0..ny {
            let dst_row = ((iy + sy) % ny) * nx;
            let src_row = iy * nx;
            for ix in 0..nx {
                rolled[dst_row + (ix + sx) % nx] = self.data[src_row + ix];
            }
        }
        self.data = rolled;
    }
}

impl From<Field2D> for Vec<Complex64> {
    fn from(field: Field2D) -> Self {
        field.data
    }
}
