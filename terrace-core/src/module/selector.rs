//! Three-source modules where a control source decides how the other two mix.
//!
//! Slot 0 and slot 1 hold the values being mixed; slot 2 is the control.

use terrace_utils::math::{linear_interp, s_curve3};

use super::NoiseModule;
use crate::error::NoiseError;
use crate::graph::Sources;

/// Index of the control source for [`Blend`] and [`Select`].
const CONTROL: usize = 2;

/// Weighted blend of sources 0 and 1.
///
/// The control value is mapped from `[-1, 1]` to a weight in `[0, 1]`, clamped
/// and eased with an S-curve. A control of `-1` yields source 0 and `1`
/// yields source 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blend;

impl NoiseModule for Blend {
    fn arity(&self) -> usize {
        3
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let v0 = sources.sample(0, x, y, z)?;
        let v1 = sources.sample(1, x, y, z)?;
        let control = sources.sample(CONTROL, x, y, z)?;
        let alpha = s_curve3(((control + 1.0) / 2.0).clamp(0.0, 1.0));
        Ok(linear_interp(v0, v1, alpha))
    }
}

/// Picks source 1 where the control lies within `[lower, upper]` and source 0
/// elsewhere.
///
/// A non-zero edge falloff cross-fades the two sources over a band of that
/// half-width around each bound instead of switching abruptly.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    lower_bound: f64,
    upper_bound: f64,
    edge_falloff: f64,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            lower_bound: -1.0,
            upper_bound: 1.0,
            edge_falloff: 0.0,
        }
    }
}

impl Select {
    /// Lower end of the selection range.
    #[must_use]
    pub const fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Upper end of the selection range.
    #[must_use]
    pub const fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Half-width of the transition band at each bound.
    #[must_use]
    pub const fn edge_falloff(&self) -> f64 {
        self.edge_falloff
    }

    /// Sets the selection range. `lower` must be below `upper`.
    ///
    /// The edge falloff is re-clamped to fit the new range.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> Result<(), NoiseError> {
        if lower >= upper || lower.is_nan() || upper.is_nan() {
            return Err(NoiseError::invalid(
                "bounds",
                format!("lower bound {lower} must be below upper bound {upper}"),
            ));
        }
        self.lower_bound = lower;
        self.upper_bound = upper;
        self.edge_falloff = self.clamp_falloff(self.edge_falloff);
        Ok(())
    }

    /// Sets the edge falloff, capped at half the bound width.
    pub fn set_edge_falloff(&mut self, falloff: f64) -> Result<(), NoiseError> {
        if falloff.is_nan() || falloff < 0.0 {
            return Err(NoiseError::invalid(
                "edge_falloff",
                format!("{falloff} must be non-negative"),
            ));
        }
        self.edge_falloff = self.clamp_falloff(falloff);
        Ok(())
    }

    fn clamp_falloff(&self, falloff: f64) -> f64 {
        falloff.min((self.upper_bound - self.lower_bound) / 2.0)
    }
}

impl NoiseModule for Select {
    fn arity(&self) -> usize {
        3
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let control = sources.sample(CONTROL, x, y, z)?;
        let lower = self.lower_bound;
        let upper = self.upper_bound;
        let falloff = self.edge_falloff;

        if falloff <= 0.0 {
            let index = if control < lower || control > upper { 0 } else { 1 };
            return sources.sample(index, x, y, z);
        }

        if control < lower - falloff {
            sources.sample(0, x, y, z)
        } else if control < lower + falloff {
            let lower_curve = lower - falloff;
            let upper_curve = lower + falloff;
            let alpha = s_curve3((control - lower_curve) / (upper_curve - lower_curve));
            Ok(linear_interp(
                sources.sample(0, x, y, z)?,
                sources.sample(1, x, y, z)?,
                alpha,
            ))
        } else if control < upper - falloff {
            sources.sample(1, x, y, z)
        } else if control < upper + falloff {
            let lower_curve = upper - falloff;
            let upper_curve = upper + falloff;
            let alpha = s_curve3((control - lower_curve) / (upper_curve - lower_curve));
            Ok(linear_interp(
                sources.sample(1, x, y, z)?,
                sources.sample(0, x, y, z)?,
                alpha,
            ))
        } else {
            sources.sample(0, x, y, z)
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn bounds_must_be_ordered() {
        let mut select = Select::default();
        assert!(select.set_bounds(0.5, 0.5).is_err());
        assert!(select.set_bounds(1.0, -1.0).is_err());
        assert_eq!((select.lower_bound(), select.upper_bound()), (-1.0, 1.0));
        assert!(select.set_bounds(-0.25, 0.75).is_ok());
        assert_eq!((select.lower_bound(), select.upper_bound()), (-0.25, 0.75));
    }

    #[test]
    fn falloff_is_capped_by_bounds() {
        let mut select = Select::default();
        select.set_edge_falloff(5.0).unwrap();
        assert_eq!(select.edge_falloff(), 1.0);

        select.set_bounds(0.0, 0.5).unwrap();
        assert_eq!(select.edge_falloff(), 0.25);

        assert!(select.set_edge_falloff(-0.1).is_err());
    }
}
