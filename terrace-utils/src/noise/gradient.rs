//! Perlin-style gradient noise on the integer lattice.

use super::gradients::perlin_gradients;
use super::{NoiseQuality, gradient_index};
use crate::math::{lattice_floor, linear_interp};

/// Gradient noise contribution of one lattice vertex.
///
/// Picks a pseudo-random gradient for `(ix, iy, iz)` and returns its dot product
/// with the vector from the vertex to `(fx, fy, fz)`, offset by `0.5`.
///
/// The caller must keep each `|f - i|` at or below one; this is not checked.
#[inline]
#[must_use]
pub fn gradient_noise_3d(fx: f64, fy: f64, fz: f64, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
    let [xg, yg, zg] = perlin_gradients()[gradient_index(ix, iy, iz, seed)];

    let xp = fx - f64::from(ix);
    let yp = fy - f64::from(iy);
    let zp = fz - f64::from(iz);

    ((xg * xp) + (yg * yp) + (zg * zp)) + 0.5
}

/// Gradient-coherent noise at `(x, y, z)`, in `[0, 1]`.
///
/// Samples [`gradient_noise_3d`] at the eight corners of the enclosing unit cube
/// and blends them trilinearly, with the weights shaped by `quality`.
#[must_use]
pub fn gradient_coherent_noise_3d(
    x: f64,
    y: f64,
    z: f64,
    seed: i32,
    quality: NoiseQuality,
) -> f64 {
    let x0 = lattice_floor(x);
    let x1 = x0.wrapping_add(1);
    let y0 = lattice_floor(y);
    let y1 = y0.wrapping_add(1);
    let z0 = lattice_floor(z);
    let z1 = z0.wrapping_add(1);

    let xs = quality.s_curve(x - f64::from(x0));
    let ys = quality.s_curve(y - f64::from(y0));
    let zs = quality.s_curve(z - f64::from(z0));

    // Four blends along x, two along y, one along z.
    let n0 = gradient_noise_3d(x, y, z, x0, y0, z0, seed);
    let n1 = gradient_noise_3d(x, y, z, x1, y0, z0, seed);
    let ix0 = linear_interp(n0, n1, xs);
    let n0 = gradient_noise_3d(x, y, z, x0, y1, z0, seed);
    let n1 = gradient_noise_3d(x, y, z, x1, y1, z0, seed);
    let ix1 = linear_interp(n0, n1, xs);
    let iy0 = linear_interp(ix0, ix1, ys);

    let n0 = gradient_noise_3d(x, y, z, x0, y0, z1, seed);
    let n1 = gradient_noise_3d(x, y, z, x1, y0, z1, seed);
    let ix0 = linear_interp(n0, n1, xs);
    let n0 = gradient_noise_3d(x, y, z, x0, y1, z1, seed);
    let n1 = gradient_noise_3d(x, y, z, x1, y1, z1, seed);
    let ix1 = linear_interp(n0, n1, xs);
    let iy1 = linear_interp(ix0, ix1, ys);

    linear_interp(iy0, iy1, zs)
}
