//! Pseudo-random gradient tables.
//!
//! One table of 256 unit vectors is derived from the lattice hash on first use.
//! Each kernel reads a scaled copy of it so its output lands in `[0, 1]`.

use std::sync::LazyLock;

use super::SimplexQuality;
use super::value::value_noise_3d;

/// A table of 256 gradient vectors.
pub type GradientTable = [[f64; 3]; 256];

/// `1 / sqrt(3)`. The trilinear-weighted distance to the cube corners peaks at
/// `sqrt(3) / 2` in the cell centre, so this scale bounds gradient noise to `±0.5`.
const PERLIN_GRADIENT_SCALE: f64 = 0.577_350_269_189_625_8;

/// Normalizer for the 8-point simplex-style table (squared radius `0.5`).
///
/// `Σ attn⁴ · |d|` over the in-range points peaks just below `0.00929`, so unit
/// gradients scaled by this stay within `±0.5`.
const SIMPLEX_STANDARD_NORMALIZER: f64 = 53.8;

/// Normalizer for the 14-point simplex-style table (squared radius `0.75`),
/// from the same bound (peak just below `0.0868`).
const SIMPLEX_SMOOTH_NORMALIZER: f64 = 5.75;

static UNIT_GRADIENTS: LazyLock<GradientTable> = LazyLock::new(generate_unit_gradients);

static PERLIN_GRADIENTS: LazyLock<GradientTable> =
    LazyLock::new(|| scaled(&UNIT_GRADIENTS, PERLIN_GRADIENT_SCALE));

static SIMPLEX_STANDARD_GRADIENTS: LazyLock<GradientTable> =
    LazyLock::new(|| scaled(&UNIT_GRADIENTS, SIMPLEX_STANDARD_NORMALIZER));

static SIMPLEX_SMOOTH_GRADIENTS: LazyLock<GradientTable> =
    LazyLock::new(|| scaled(&UNIT_GRADIENTS, SIMPLEX_SMOOTH_NORMALIZER));

/// Rejection-sample the unit ball with the lattice hash, then normalize.
///
/// Candidates shorter than `0.1` are dropped as well so normalization never
/// amplifies a near-zero vector.
fn generate_unit_gradients() -> GradientTable {
    let mut table = [[0.0; 3]; 256];
    let mut filled = 0;
    let mut n = 0;
    while filled < table.len() {
        let x = value_noise_3d(n, 0, 0, 0) * 2.0 - 1.0;
        let y = value_noise_3d(n, 1, 0, 0) * 2.0 - 1.0;
        let z = value_noise_3d(n, 2, 0, 0) * 2.0 - 1.0;
        n += 1;

        let length_sq = x * x + y * y + z * z;
        if !(0.01..=1.0).contains(&length_sq) {
            continue;
        }
        let length = length_sq.sqrt();
        table[filled] = [x / length, y / length, z / length];
        filled += 1;
    }
    table
}

fn scaled(table: &GradientTable, factor: f64) -> GradientTable {
    table.map(|[x, y, z]| [x * factor, y * factor, z * factor])
}

/// The shared table of 256 unit-length gradient vectors.
#[must_use]
pub fn unit_gradients() -> &'static GradientTable {
    &UNIT_GRADIENTS
}

/// Gradients used by [`gradient_noise_3d`](super::gradient_noise_3d).
#[inline]
pub(super) fn perlin_gradients() -> &'static GradientTable {
    &PERLIN_GRADIENTS
}

impl SimplexQuality {
    /// Gradients used by the simplex-style kernel at this quality.
    #[inline]
    pub(super) fn gradients(self) -> &'static GradientTable {
        match self {
            Self::Standard => &SIMPLEX_STANDARD_GRADIENTS,
            Self::Smooth => &SIMPLEX_SMOOTH_GRADIENTS,
        }
    }
}
