//! Source modules: constant, fractal gradient noise and cellular noise.

use terrace_utils::math::{lattice_floor, make_int32_range};
use terrace_utils::noise::{
    gradient_coherent_noise_3d, simplex_style_gradient_coherent_noise_3d, value_noise_3d,
};
use terrace_utils::{LatticeOrientation, NoiseQuality, SimplexQuality};

use super::NoiseModule;
use crate::error::NoiseError;
use crate::graph::Sources;

/// Largest octave count accepted by [`Perlin`] and [`Simplex`].
pub const MAX_OCTAVE_COUNT: usize = 30;

const DEFAULT_FREQUENCY: f64 = 1.0;
const DEFAULT_LACUNARITY: f64 = 2.0;
const DEFAULT_PERSISTENCE: f64 = 0.5;
const DEFAULT_OCTAVE_COUNT: usize = 6;

/// `sqrt(3)`, the largest distance from a point to the nearest Voronoi seed
/// in units of cell size.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

fn check_octave_count(count: usize) -> Result<(), NoiseError> {
    if (1..=MAX_OCTAVE_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(NoiseError::invalid(
            "octave_count",
            format!("{count} is outside 1..={MAX_OCTAVE_COUNT}"),
        ))
    }
}

/// Fractal sum of `octave_count` calls to `kernel`.
///
/// Each octave multiplies the coordinates by `lacunarity`, the amplitude by
/// `persistence`, and offsets the seed by the octave index. Kernel output is
/// weighted as-is, so every octave adds its `0.5` baseline.
#[expect(clippy::too_many_arguments, reason = "mirrors the public octave settings")]
fn fractal_sum(
    kernel: impl Fn(f64, f64, f64, i32) -> f64,
    frequency: f64,
    lacunarity: f64,
    persistence: f64,
    octave_count: usize,
    seed: i32,
    x: f64,
    y: f64,
    z: f64,
) -> f64 {
    let mut x = x * frequency;
    let mut y = y * frequency;
    let mut z = z * frequency;
    let mut value = 0.0;
    let mut amplitude = 1.0;

    for octave in 0..octave_count {
        let nx = make_int32_range(x);
        let ny = make_int32_range(y);
        let nz = make_int32_range(z);

        let octave_seed = seed.wrapping_add(octave as i32);
        value += kernel(nx, ny, nz, octave_seed) * amplitude;

        x *= lacunarity;
        y *= lacunarity;
        z *= lacunarity;
        amplitude *= persistence;
    }
    value
}

/// Outputs the same value everywhere. Takes no sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Const {
    /// The output value.
    pub value: f64,
}

impl NoiseModule for Const {
    fn arity(&self) -> usize {
        0
    }

    fn sample(&self, _: &Sources<'_>, _: f64, _: f64, _: f64) -> Result<f64, NoiseError> {
        Ok(self.value)
    }
}

/// Fractal gradient noise on the cubic lattice.
///
/// Sums octaves of [`gradient_coherent_noise_3d`]. Each octave lies in
/// `[0, 1]` before weighting, so the output lies within `[0, Σ persistenceⁱ]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Perlin {
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Seed of the first octave.
    pub seed: i32,
    /// Interpolation quality of each octave.
    pub quality: NoiseQuality,
    octave_count: usize,
}

impl Default for Perlin {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: DEFAULT_PERSISTENCE,
            seed: 0,
            quality: NoiseQuality::Standard,
            octave_count: DEFAULT_OCTAVE_COUNT,
        }
    }
}

impl Perlin {
    /// Number of octaves summed.
    #[must_use]
    pub const fn octave_count(&self) -> usize {
        self.octave_count
    }

    /// Sets the number of octaves; must be in `1..=MAX_OCTAVE_COUNT`.
    pub fn set_octave_count(&mut self, octave_count: usize) -> Result<(), NoiseError> {
        check_octave_count(octave_count)?;
        self.octave_count = octave_count;
        Ok(())
    }
}

impl NoiseModule for Perlin {
    fn arity(&self) -> usize {
        0
    }

    fn sample(&self, _: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let quality = self.quality;
        Ok(fractal_sum(
            |x, y, z, seed| gradient_coherent_noise_3d(x, y, z, seed, quality),
            self.frequency,
            self.lacunarity,
            self.persistence,
            self.octave_count,
            self.seed,
            x,
            y,
            z,
        ))
    }
}

/// Fractal simplex-style noise on a rotated lattice.
///
/// Same octave model as [`Perlin`], but each octave is
/// [`simplex_style_gradient_coherent_noise_3d`], which has fewer axis-aligned
/// artifacts. The default orientation keeps horizontal slices isotropic.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex {
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Seed of the first octave.
    pub seed: i32,
    /// Lattice rotation applied to the input.
    pub orientation: LatticeOrientation,
    /// Kernel size.
    pub quality: SimplexQuality,
    octave_count: usize,
}

impl Default for Simplex {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: DEFAULT_PERSISTENCE,
            seed: 0,
            orientation: LatticeOrientation::XzBeforeY,
            quality: SimplexQuality::Standard,
            octave_count: DEFAULT_OCTAVE_COUNT,
        }
    }
}

impl Simplex {
    /// Number of octaves summed.
    #[must_use]
    pub const fn octave_count(&self) -> usize {
        self.octave_count
    }

    /// Sets the number of octaves; must be in `1..=MAX_OCTAVE_COUNT`.
    pub fn set_octave_count(&mut self, octave_count: usize) -> Result<(), NoiseError> {
        check_octave_count(octave_count)?;
        self.octave_count = octave_count;
        Ok(())
    }

    /// Sum of the octave amplitudes, `1 + p + p² + …`.
    ///
    /// Clients divide the output by this to normalize it. A persistence of
    /// exactly one makes every octave weigh the same, giving the octave count.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        let p = self.persistence;
        if (p - 1.0).abs() < f64::EPSILON {
            self.octave_count as f64
        } else {
            (p.powi(self.octave_count as i32) - 1.0) / (p - 1.0)
        }
    }
}

impl NoiseModule for Simplex {
    fn arity(&self) -> usize {
        0
    }

    fn sample(&self, _: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let orientation = self.orientation;
        let quality = self.quality;
        Ok(fractal_sum(
            |x, y, z, seed| {
                simplex_style_gradient_coherent_noise_3d(x, y, z, seed, orientation, quality)
            },
            self.frequency,
            self.lacunarity,
            self.persistence,
            self.octave_count,
            self.seed,
            x,
            y,
            z,
        ))
    }
}

/// Cellular noise: each point takes the value of its nearest seed point.
///
/// Seed points are jittered once per unit cell. With `enable_distance` the
/// distance to the seed point is added, giving each cell a ridged interior.
#[derive(Debug, Clone, PartialEq)]
pub struct Voronoi {
    /// Cell density.
    pub frequency: f64,
    /// Scale of the random per-cell value.
    pub displacement: f64,
    /// Seed for point placement and cell values.
    pub seed: i32,
    /// Add the distance to the nearest seed point to the output.
    pub enable_distance: bool,
}

impl Default for Voronoi {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            displacement: 1.0,
            seed: 0,
            enable_distance: false,
        }
    }
}

impl NoiseModule for Voronoi {
    fn arity(&self) -> usize {
        0
    }

    fn sample(&self, _: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let x = make_int32_range(x * self.frequency);
        let y = make_int32_range(y * self.frequency);
        let z = make_int32_range(z * self.frequency);

        let xi = lattice_floor(x);
        let yi = lattice_floor(y);
        let zi = lattice_floor(z);

        let seed = self.seed;
        let mut min_dist = 2_147_483_647.0;
        let mut candidate = (0.0, 0.0, 0.0);

        // A seed point can sit up to one cell away from its own cell, so two
        // rings of neighbours cover every possible nearest point.
        for zc in zi.wrapping_sub(2)..=zi.wrapping_add(2) {
            for yc in yi.wrapping_sub(2)..=yi.wrapping_add(2) {
                for xc in xi.wrapping_sub(2)..=xi.wrapping_add(2) {
                    let xp = f64::from(xc) + value_noise_3d(xc, yc, zc, seed);
                    let yp = f64::from(yc) + value_noise_3d(xc, yc, zc, seed.wrapping_add(1));
                    let zp = f64::from(zc) + value_noise_3d(xc, yc, zc, seed.wrapping_add(2));
                    let dx = xp - x;
                    let dy = yp - y;
                    let dz = zp - z;
                    let dist = dx * dx + dy * dy + dz * dz;
                    if dist < min_dist {
                        min_dist = dist;
                        candidate = (xp, yp, zp);
                    }
                }
            }
        }

        let mut value = 0.0;
        if self.enable_distance {
            let (xp, yp, zp) = candidate;
            let dx = xp - x;
            let dy = yp - y;
            let dz = zp - z;
            value = (dx * dx + dy * dy + dz * dz).sqrt() * SQRT_3 - 1.0;
        }

        let (xp, yp, zp) = candidate;
        let cell = value_noise_3d(
            xp.floor() as i32,
            yp.floor() as i32,
            zp.floor() as i32,
            seed,
        );
        Ok(value + self.displacement * cell)
    }
}
