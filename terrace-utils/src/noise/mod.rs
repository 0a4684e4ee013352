//! Coherent-noise kernels.
//!
//! Every function here is a pure function of its arguments and of a few
//! process-wide lookup tables built once on first use:
//!
//! - [`int_value_noise_3d`] / [`value_noise_3d`] - Integer lattice hash, the root of all randomness
//! - [`value_coherent_noise_3d`] - Interpolated value noise
//! - [`gradient_noise_3d`] / [`gradient_coherent_noise_3d`] - Perlin-style gradient noise
//! - [`simplex_style_gradient_coherent_noise_3d`] - Gradient noise on a rotated BCC lattice
//!
//! The lattice hash uses wrapping 32-bit arithmetic so results are identical on
//! every platform and in every process.

mod gradient;
mod gradients;
mod lattice;
mod simplex_style;
mod value;

use serde::Deserialize;

use crate::math::{s_curve3, s_curve5};

pub use gradient::{gradient_coherent_noise_3d, gradient_noise_3d};
pub use gradients::unit_gradients;
pub use lattice::{LatticePoint, LatticeTable};
pub use simplex_style::simplex_style_gradient_coherent_noise_3d;
pub use value::{int_value_noise_3d, value_coherent_noise_3d, value_noise_3d};

const X_NOISE_GEN: i32 = 1619;
const Y_NOISE_GEN: i32 = 31337;
const Z_NOISE_GEN: i32 = 6971;
const SEED_NOISE_GEN: i32 = 1013;
const SHIFT_NOISE_GEN: u32 = 8;

/// Combine lattice coordinates and seed into a single wrapped hash.
#[inline]
const fn lattice_hash(ix: i32, iy: i32, iz: i32, seed: i32) -> i32 {
    X_NOISE_GEN
        .wrapping_mul(ix)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(iy))
        .wrapping_add(Z_NOISE_GEN.wrapping_mul(iz))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed))
}

/// Index into a 256-entry gradient table for the given lattice vertex.
#[inline]
const fn gradient_index(ix: i32, iy: i32, iz: i32, seed: i32) -> usize {
    let mut index = lattice_hash(ix, iy, iz, seed);
    index ^= index >> SHIFT_NOISE_GEN;
    (index & 0xff) as usize
}

/// Interpolation quality for value and gradient coherent noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseQuality {
    /// Linear interpolation. Visible creases along lattice boundaries.
    Fast,
    /// Cubic S-curve. Continuous first derivative.
    #[default]
    Standard,
    /// Quintic S-curve. Continuous first and second derivatives.
    Best,
}

impl NoiseQuality {
    /// Shape an interpolation weight in `[0, 1]` according to this quality.
    #[inline]
    #[must_use]
    pub fn s_curve(self, t: f64) -> f64 {
        match self {
            Self::Fast => t,
            Self::Standard => s_curve3(t),
            Self::Best => s_curve5(t),
        }
    }
}

/// Quality level for simplex-style noise.
///
/// Selects the kernel radius, the lattice traversal table and the gradient
/// normalizer. Higher quality visits more lattice points per sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimplexQuality {
    /// Up to 8 candidate points per octant, squared kernel radius `0.5`.
    #[default]
    Standard,
    /// Up to 14 candidate points per octant, squared kernel radius `0.75`.
    Smooth,
}

/// Orthonormal rotation applied to the input before simplex-style lattice lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatticeOrientation {
    /// Rotate the main diagonal onto an axis. Isotropic, no preferred plane.
    Classic,
    /// Keep the XY plane unskewed; use when Z is the vertical axis.
    XyBeforeZ,
    /// Keep the XZ plane unskewed; use when Y is the vertical axis.
    #[default]
    XzBeforeY,
}
