//! Two-source modules that combine their sources point by point.

use super::NoiseModule;
use crate::error::NoiseError;
use crate::graph::Sources;

/// Sum of its two sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add;

impl NoiseModule for Add {
    fn arity(&self) -> usize {
        2
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        Ok(sources.sample(0, x, y, z)? + sources.sample(1, x, y, z)?)
    }
}

/// Larger of its two sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl NoiseModule for Max {
    fn arity(&self) -> usize {
        2
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let a = sources.sample(0, x, y, z)?;
        let b = sources.sample(1, x, y, z)?;
        Ok(a.max(b))
    }
}
