#![cfg(test)]

use num_complex::Complex64;

use super::field::Field2D;
use super::grid::Grid2D;

#[test]
fn zeros_initializes_all_entries_to_zero() {
    let grid = Grid2D::new(2, 3, 1.0);
    let field = Field2D::zeros(grid);
    assert_eq!(field.len(), grid.len());
    assert!(field
        .as_slice()
        .iter()
        .all(|value| *value == Complex64::new(0.0, 0.0)));
}

#[test]
#[should_panic(expected = "data length must match grid size")]
fn from_vec_rejects_mismatched_lengths() {
    let grid = Grid2D::new(2, 2, 1.0);
    let data = vec![Complex64::default(); grid.len() - 1];
    let _ = Field2D::from_vec(grid, data);
}

#[test]
fn get_and_get_mut_operate_on_correct_cell() {
    let grid = Grid2D::new(3, 2, 1.0);
    let mut field = Field2D::zeros(grid);
    for iy in 0..grid.ny {
        for ix in 0..grid.nx {
            *field.get_mut(ix, iy) = Complex64::new(ix as f64, iy as f64);
        }
    }
    assert_eq!(*field.get(0, 0), Complex64::new(0.0, 0.0));
    assert_eq!(*field.get(2, 1), Complex64::new(2.0, 1.0));
}

#[test]
fn from_fn_samples_physical_coordinates() {
    let grid = Grid2D::square(4, 0.5);
    let field = Field2D::from_fn(grid, |x, y| Complex64::new(x, y));
    assert_eq!(*field.get(2, 2), Complex64::new(0.0, 0.0));
    assert_eq!(*field.get(3, 0), Complex64::new(0.5, -1.0));
}

#[test]
fn fftshift_moves_origin_to_centre() {
    let grid = Grid2D::square(4, 1.0);
    let mut field = Field2D::zeros(grid);
    *field.get_mut(0, 0) = Complex64::new(1.0, 0.0);
    field.fftshift();
    assert_eq!(*field.get(2, 2), Complex64::new(1.0, 0.0));
    assert_eq!(field.total_energy(), 1.0);
}

#[test]
fn ifftshift_undoes_fftshift_on_odd_grids() {
    let grid = Grid2D::new(5, 3, 1.0);
    let data: Vec<Complex64> = (0..grid.len())
        .map(|idx| Complex64::new(idx as f64, -(idx as f64)))
        .collect();
    let mut field = Field2D::from_vec(grid, data.clone());
    field.fftshift();
    assert_ne!(field.as_slice(), data.as_slice());
    field.ifftshift();
    assert_eq!(field.as_slice(), data.as_slice());
}

#[test]
fn multiply_and_energy() {
    let grid = Grid2D::square(2, 1.0);
    let mut field = Field2D::from_vec(grid, vec![Complex64::new(1.0, 1.0); 4]);
    assert_eq!(field.total_energy(), 8.0);
    let phasor = vec![Complex64::new(0.0, 1.0); 4];
    field.multiply(&phasor);
    assert_eq!(*field.get(1, 1), Complex64::new(-1.0, 1.0));
    assert_eq!(field.total_energy(), 8.0);
    field.scale(Complex64::new(2.0, 0.0));
    assert_eq!(field.total_energy(), 32.0);
}

#[test]
fn field_into_vec_returns_original_storage() {
    let grid = Grid2D::square(2, 1.0);
    let data: Vec<_> = (0..grid.len())
        .map(|idx| Complex64::new(idx as f64, -(idx as f64)))
        .collect();
    let field = Field2D::from_vec(grid, data.clone());
    let recovered: Vec<Complex64> = field.into();
    assert_eq!(recovered, data);
}
