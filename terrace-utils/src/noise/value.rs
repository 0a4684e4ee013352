//! Integer lattice hash and value noise.

use super::{NoiseQuality, lattice_hash};
use crate::math::{lattice_floor, linear_interp};

/// Hash a lattice point into `[0, 2147483647]`.
///
/// The multipliers are primes; changing any of them changes every output of
/// the library.
#[inline]
#[must_use]
pub const fn int_value_noise_3d(x: i32, y: i32, z: i32, seed: i32) -> i32 {
    let mut n = lattice_hash(x, y, z, seed) & 0x7fff_ffff;
    n ^= n >> 13;
    n.wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff
}

/// Value noise at a lattice point, normalized to `[0, 1]`.
#[inline]
#[must_use]
pub fn value_noise_3d(x: i32, y: i32, z: i32, seed: i32) -> f64 {
    f64::from(int_value_noise_3d(x, y, z, seed)) / 2_147_483_647.0
}

/// Value-coherent noise: lattice values blended across the surrounding cube.
///
/// Cheaper than gradient noise but blockier. Returns a value in `[0, 1]`.
#[must_use]
pub fn value_coherent_noise_3d(x: f64, y: f64, z: f64, seed: i32, quality: NoiseQuality) -> f64 {
    let x0 = lattice_floor(x);
    let x1 = x0.wrapping_add(1);
    let y0 = lattice_floor(y);
    let y1 = y0.wrapping_add(1);
    let z0 = lattice_floor(z);
    let z1 = z0.wrapping_add(1);

    let xs = quality.s_curve(x - f64::from(x0));
    let ys = quality.s_curve(y - f64::from(y0));
    let zs = quality.s_curve(z - f64::from(z0));

    let ix0 = linear_interp(
        value_noise_3d(x0, y0, z0, seed),
        value_noise_3d(x1, y0, z0, seed),
        xs,
    );
    let ix1 = linear_interp(
        value_noise_3d(x0, y1, z0, seed),
        value_noise_3d(x1, y1, z0, seed),
        xs,
    );
    let iy0 = linear_interp(ix0, ix1, ys);

    let ix0 = linear_interp(
        value_noise_3d(x0, y0, z1, seed),
        value_noise_3d(x1, y0, z1, seed),
        xs,
    );
    let ix1 = linear_interp(
        value_noise_3d(x0, y1, z1, seed),
        value_noise_3d(x1, y1, z1, seed),
        xs,
    );
    let iy1 = linear_interp(ix0, ix1, ys);

    linear_interp(iy0, iy1, zs)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn int_noise_reference_values() {
        assert_eq!(int_value_noise_3d(1, 2, 3, 42), 192_039_953);
        assert_eq!(int_value_noise_3d(-7, 0, 11, 0), 767_967_241);
        // A zero hash passes straight through to the additive constant.
        assert_eq!(int_value_noise_3d(0, 0, 0, 0), 1_376_312_589);
    }

    #[test]
    fn int_noise_survives_extreme_inputs() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            let n = int_value_noise_3d(v, v, v, v);
            assert!(n >= 0);
        }
    }

    #[test]
    fn value_noise_is_normalized() {
        assert_eq!(value_noise_3d(1, 2, 3, 42), 0.089_425_571_770_139_77);
        for x in -20..20 {
            for y in -20..20 {
                let v = value_noise_3d(x, y, x ^ y, 7);
                assert!((0.0..=1.0).contains(&v), "value noise {v} out of range");
            }
        }
    }

    #[test]
    fn value_coherent_noise_reference_value() {
        let v = value_coherent_noise_3d(0.5, 0.5, 0.5, 0, NoiseQuality::Standard);
        assert_eq!(v, 0.394_753_320_675_694_1);
    }

    #[test]
    fn value_coherent_noise_hits_lattice_values() {
        // Exactly on a positive lattice vertex the interpolants are all zero.
        let v = value_coherent_noise_3d(3.0, 5.0, 7.0, 11, NoiseQuality::Best);
        assert_eq!(v, value_noise_3d(3, 5, 7, 11));
    }
}
