//! Simplex-style gradient noise on a rotated BCC lattice.
//!
//! Instead of skewing space onto a simplex grid, the input is rotated so that
//! two interleaved cubic lattices form a body-centered-cubic lattice. Each
//! lattice point within the kernel radius contributes `attn⁴ · (g · d)`.

use super::{LatticeOrientation, SimplexQuality, gradient_index};
use crate::math::{lattice_floor, make_int32_range};

/// Off-diagonal term of the plane-preserving rotations, `(3 - sqrt(3)) / 6`.
///
/// Kept as the exact literal used to generate reference output.
const PLANE_SKEW: f64 = 0.211_324_865_405_187;

/// Diagonal term of the plane-preserving rotations, `1 / sqrt(3)`.
const PLANE_AXIS: f64 = 0.577_350_269_189_626;

/// Rotate `(x, y, z)` into lattice space.
#[inline]
fn reorient(x: f64, y: f64, z: f64, orientation: LatticeOrientation) -> (f64, f64, f64) {
    match orientation {
        LatticeOrientation::Classic => {
            let r = (2.0 / 3.0) * (x + y + z);
            (r - x, r - y, r - z)
        }
        LatticeOrientation::XyBeforeZ => {
            let xy = x + y;
            let s2 = xy * -PLANE_SKEW;
            let zz = z * PLANE_AXIS;
            (x + s2 - zz, y + s2 - zz, xy * PLANE_AXIS + zz)
        }
        LatticeOrientation::XzBeforeY => {
            let xz = x + z;
            let s2 = xz * -PLANE_SKEW;
            let yy = y * PLANE_AXIS;
            (x + s2 - yy, xz * PLANE_AXIS + yy, z + s2 - yy)
        }
    }
}

/// Simplex-style gradient-coherent noise at `(x, y, z)`.
///
/// Starts from `0.5` and adds each in-range lattice point's contribution. The
/// gradient normalizers keep the result within `[0, 1]`, but the sum is not
/// clamped. Rotated coordinates beyond `±2^30` are folded back like the octave
/// inputs of the fractal generators.
#[must_use]
pub fn simplex_style_gradient_coherent_noise_3d(
    x: f64,
    y: f64,
    z: f64,
    seed: i32,
    orientation: LatticeOrientation,
    quality: SimplexQuality,
) -> f64 {
    let table = quality.lattice();
    let gradients = quality.gradients();
    let squared_radius = table.squared_radius();

    let (xr, yr, zr) = reorient(x, y, z, orientation);
    let xr = make_int32_range(xr);
    let yr = make_int32_range(yr);
    let zr = make_int32_range(zr);

    // Base cell on the first lattice and the offset inside it.
    let xrb = lattice_floor(xr);
    let yrb = lattice_floor(yr);
    let zrb = lattice_floor(zr);
    let xri = xr - f64::from(xrb);
    let yri = yr - f64::from(yrb);
    let zri = zr - f64::from(zrb);

    // The octant picks the matching cell on the second lattice.
    let octant =
        usize::from(xri >= 0.5) | usize::from(yri >= 0.5) << 1 | usize::from(zri >= 0.5) << 2;

    let mut value = 0.5;
    let mut cursor = Some(table.entry(octant));
    while let Some(index) = cursor {
        let c = table.point(index);
        let dxr = xri + c.dxr;
        let dyr = yri + c.dyr;
        let dzr = zri + c.dzr;
        let mut attn = squared_radius - dxr * dxr - dyr * dyr - dzr * dzr;
        if attn < 0.0 {
            cursor = c.next_on_failure;
            continue;
        }

        let [xg, yg, zg] = gradients[gradient_index(
            xrb.wrapping_add(c.xrv),
            yrb.wrapping_add(c.yrv),
            zrb.wrapping_add(c.zrv),
            seed,
        )];
        let ramped = (xg * dxr) + (yg * dyr) + (zg * dzr);

        attn *= attn;
        value += attn * attn * ramped;
        cursor = c.next_on_success;
    }
    value
}
