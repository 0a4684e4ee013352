//! Single-source modules that remap their source's output value.

use terrace_utils::math::cubic_interp;

use super::NoiseModule;
use crate::error::NoiseError;
use crate::graph::Sources;

/// Applies `value * scale + bias` to its source.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBias {
    /// Multiplier applied first.
    pub scale: f64,
    /// Offset applied after scaling.
    pub bias: f64,
}

impl Default for ScaleBias {
    fn default() -> Self {
        Self {
            scale: 1.0,
            bias: 0.0,
        }
    }
}

impl NoiseModule for ScaleBias {
    fn arity(&self) -> usize {
        1
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        Ok(sources.sample(0, x, y, z)? * self.scale + self.bias)
    }
}

/// Negates its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invert;

impl NoiseModule for Invert {
    fn arity(&self) -> usize {
        1
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        Ok(-sources.sample(0, x, y, z)?)
    }
}

/// One input/output pair of a [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Source value at which the point applies.
    pub input: f64,
    /// Value produced for `input`.
    pub output: f64,
}

/// Maps its source through a cubic spline over user-defined control points.
///
/// Points are kept sorted by input. Outside the covered range the output
/// clamps to the first or last point's output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    control_points: Vec<ControlPoint>,
}

impl Curve {
    /// Fewest control points needed to evaluate the spline.
    pub const MIN_CONTROL_POINTS: usize = 4;

    /// The control points, sorted by input.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Inserts a control point, keeping the list sorted.
    ///
    /// Fails if a point with the same input already exists.
    pub fn add_control_point(&mut self, input: f64, output: f64) -> Result<(), NoiseError> {
        let position = self.control_points.partition_point(|p| p.input < input);
        if self
            .control_points
            .get(position)
            .is_some_and(|p| p.input.total_cmp(&input).is_eq())
        {
            return Err(NoiseError::invalid(
                "control_point",
                format!("a point with input {input} already exists"),
            ));
        }
        self.control_points
            .insert(position, ControlPoint { input, output });
        Ok(())
    }

    /// Removes every control point.
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
    }
}

impl NoiseModule for Curve {
    fn arity(&self) -> usize {
        1
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let points = &self.control_points;
        if points.len() < Self::MIN_CONTROL_POINTS {
            return Err(NoiseError::invalid(
                "control_points",
                format!(
                    "curve needs at least {} points, has {}",
                    Self::MIN_CONTROL_POINTS,
                    points.len()
                ),
            ));
        }

        let value = sources.sample(0, x, y, z)?;

        // First point whose input lies above the value.
        let position = points.partition_point(|p| p.input <= value);
        let last = points.len() - 1;
        let index = |offset: isize| position.saturating_add_signed(offset).min(last);
        let i0 = index(-2);
        let i1 = index(-1);
        let i2 = index(0);
        let i3 = index(1);

        if i1 == i2 {
            return Ok(points[i1].output);
        }

        let in1 = points[i1].input;
        let in2 = points[i2].input;
        let alpha = (value - in1) / (in2 - in1);
        Ok(cubic_interp(
            points[i0].output,
            points[i1].output,
            points[i2].output,
            points[i3].output,
            alpha,
        ))
    }
}
