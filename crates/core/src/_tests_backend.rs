#![cfg(test)]

use num_complex::Complex64;

use super::_tests_support::NaiveDft;
use super::backend::SpectralBackend;
use super::field::Field2D;
use super::grid::Grid2D;

#[test]
fn forward_then_inverse_is_identity() {
    let backend = NaiveDft;
    let grid = Grid2D::new(4, 3, 1.0);
    let data: Vec<Complex64> = (0..grid.len())
        .map(|idx| Complex64::new((idx as f64).sin(), (idx as f64).cos()))
        .collect();
    let mut field = Field2D::from_vec(grid, data.clone());
    backend.forward_fft_2d(&mut field);
    backend.inverse_fft_2d(&mut field);
    for (rec, expect) in field.as_slice().iter().zip(&data) {
        assert!((rec - expect).norm() < 1e-12);
    }
}

#[test]
fn centred_transform_of_on_axis_delta_is_flat() {
    let backend = NaiveDft;
    let grid = Grid2D::square(4, 1.0);
    let mut field = Field2D::zeros(grid);
    *field.get_mut(2, 2) = Complex64::new(1.0, 0.0);
    backend.centered_forward_fft_2d(&mut field);
    for value in field.as_slice() {
        assert!((value - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    }
}

#[test]
fn centred_pair_restores_field() {
    let backend = NaiveDft;
    let grid = Grid2D::square(5, 1.0);
    let data: Vec<Complex64> = (0..grid.len())
        .map(|idx| Complex64::new(idx as f64, 1.0))
        .collect();
    let mut field = Field2D::from_vec(grid, data.clone());
    backend.centered_forward_fft_2d(&mut field);
    backend.centered_inverse_fft_2d(&mut field);
    for (rec, expect) in field.as_slice().iter().zip(&data) {
        assert!((rec - expect).norm() < 1e-10);
    }
}

#[test]
fn default_scale_multiplies_every_sample() {
    let backend = NaiveDft;
    let grid = Grid2D::square(2, 1.0);
    let mut field = Field2D::from_vec(grid, vec![Complex64::new(1.0, 0.0); 4]);
    backend.scale(Complex64::new(0.0, 2.0), &mut field);
    assert!(field.as_slice().iter().all(|v| *v == Complex64::new(0.0, 2.0)));
}
