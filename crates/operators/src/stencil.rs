//! Finite-difference stencils over the 4-neighborhood.
//!
//! All stencils read through [`ImageField::get`], which replicates the border
//! pixel for out-of-grid neighbors. Each works on a single channel; callers
//! loop channels independently.

use pde_filter_core::ImageField;

/// 5-point discrete Laplacian: `up + down + left + right - 4 * center`.
pub fn laplacian(u: &ImageField, x: isize, y: isize, c: usize) -> f64 {
    u.get(x - 1, y, c) + u.get(x + 1, y, c) + u.get(x, y - 1, c) + u.get(x, y + 1, c)
        - 4.0 * u.get(x, y, c)
}

/// Centered-difference gradient `(du/dx, du/dy)` with half-weight, i.e.
/// `(u[x+1] - u[x-1]) / 2` per axis.
pub fn grad_centered(u: &ImageField, x: isize, y: isize, c: usize) -> (f64, f64) {
    let gx = (u.get(x + 1, y, c) - u.get(x - 1, y, c)) / 2.0;
    let gy = (u.get(x, y + 1, c) - u.get(x, y - 1, c)) / 2.0;
    (gx, gy)
}

/// One-sided differences to the four neighbors: `(north, south, west, east)`,
/// each `u[neighbor] - u[center]`. The building block of the four-flux
/// anisotropic divergence.
pub fn neighbor_diffs(u: &ImageField, x: isize, y: isize, c: usize) -> (f64, f64, f64, f64) {
    let center = u.get(x, y, c);
    (
        u.get(x, y - 1, c) - center,
        u.get(x, y + 1, c) - center,
        u.get(x - 1, y, c) - center,
        u.get(x + 1, y, c) - center,
    )
}
