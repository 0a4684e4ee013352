//! Low-level building blocks for Terrace noise generation.
//!
//! - [`noise`] - Coherent-noise kernels (value, gradient, simplex-style) and their lookup tables
//! - [`math`] - Interpolation curves and lattice helpers shared by the kernels and modules

pub mod math;
pub mod noise;

pub use noise::{LatticeOrientation, NoiseQuality, SimplexQuality};
