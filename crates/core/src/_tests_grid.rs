#![cfg(test)]

use super::grid::Grid2D;

#[test]
fn idx_is_row_major() {
    let grid = Grid2D::new(3, 2, 1.0);
    assert_eq!(grid.idx(0, 0), 0);
    assert_eq!(grid.idx(2, 0), 2);
    assert_eq!(grid.idx(0, 1), 3);
    assert_eq!(grid.len(), 6);
    assert!(!grid.is_square());
}

#[test]
fn coordinates_put_the_axis_on_the_centre_sample() {
    let grid = Grid2D::square(4, 0.5);
    let (xs, ys) = grid.coordinates();
    assert_eq!(xs.len(), 16);
    // sample (2, 2) is on axis
    assert_eq!(xs[grid.idx(2, 2)], 0.0);
    assert_eq!(ys[grid.idx(2, 2)], 0.0);
    assert_eq!(xs[grid.idx(0, 0)], -1.0);
    assert_eq!(ys[grid.idx(0, 3)], 0.5);
}

#[test]
fn odd_grids_are_centred_on_the_middle_sample() {
    let grid = Grid2D::square(5, 1.0);
    let (xs, _) = grid.coordinates();
    let row: Vec<f64> = xs[..5].to_vec();
    assert_eq!(row, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn extent_is_samples_times_pixel_scale() {
    let grid = Grid2D::square(64, 1e-4);
    assert!((grid.extent() - 6.4e-3).abs() < 1e-18);
}

#[test]
fn radius_squared_matches_coordinates() {
    let grid = Grid2D::square(4, 2.0);
    let r2 = grid.radius_squared();
    assert_eq!(r2[grid.idx(2, 2)], 0.0);
    assert_eq!(r2[grid.idx(0, 0)], 32.0);
    assert_eq!(r2[grid.idx(3, 2)], 4.0);
}
