//! Single-source modules that move the input point before sampling.

use super::NoiseModule;
use crate::error::NoiseError;
use crate::graph::Sources;

/// Rotates the input point around the origin before sampling its source.
///
/// Angles are in degrees. The rotation matrix is rebuilt whenever the angles
/// change, so evaluation only pays for the matrix product.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatePoint {
    angles: [f64; 3],
    matrix: [[f64; 3]; 3],
}

impl Default for RotatePoint {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl RotatePoint {
    /// Creates a rotation by the given angles around the x, y and z axes.
    #[must_use]
    pub fn new(x_angle: f64, y_angle: f64, z_angle: f64) -> Self {
        Self {
            angles: [x_angle, y_angle, z_angle],
            matrix: rotation_matrix(x_angle, y_angle, z_angle),
        }
    }

    /// Rotation around the x, y and z axes, in degrees.
    #[must_use]
    pub const fn angles(&self) -> [f64; 3] {
        self.angles
    }

    /// Replaces all three rotation angles.
    pub fn set_angles(&mut self, x_angle: f64, y_angle: f64, z_angle: f64) {
        *self = Self::new(x_angle, y_angle, z_angle);
    }

    /// Replaces the rotation around the x axis.
    pub fn set_x_angle(&mut self, x_angle: f64) {
        let [_, y, z] = self.angles;
        self.set_angles(x_angle, y, z);
    }

    /// Replaces the rotation around the y axis.
    pub fn set_y_angle(&mut self, y_angle: f64) {
        let [x, _, z] = self.angles;
        self.set_angles(x, y_angle, z);
    }

    /// Replaces the rotation around the z axis.
    pub fn set_z_angle(&mut self, z_angle: f64) {
        let [x, y, _] = self.angles;
        self.set_angles(x, y, z_angle);
    }
}

fn rotation_matrix(x_angle: f64, y_angle: f64, z_angle: f64) -> [[f64; 3]; 3] {
    let (x_sin, x_cos) = x_angle.to_radians().sin_cos();
    let (y_sin, y_cos) = y_angle.to_radians().sin_cos();
    let (z_sin, z_cos) = z_angle.to_radians().sin_cos();

    [
        [
            y_sin * x_sin * z_sin + y_cos * z_cos,
            x_cos * z_sin,
            y_sin * z_cos - y_cos * x_sin * z_sin,
        ],
        [
            y_sin * x_sin * z_cos - y_cos * z_sin,
            x_cos * z_cos,
            -y_cos * x_sin * z_cos - y_sin * z_sin,
        ],
        [-y_sin * x_cos, x_sin, y_cos * x_cos],
    ]
}

impl NoiseModule for RotatePoint {
    fn arity(&self) -> usize {
        1
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let [r0, r1, r2] = self.matrix;
        let nx = r0[0] * x + r0[1] * y + r0[2] * z;
        let ny = r1[0] * x + r1[1] * y + r1[2] * z;
        let nz = r2[0] * x + r2[1] * y + r2[2] * z;
        sources.sample(0, nx, ny, nz)
    }
}

/// Scales each input coordinate before sampling its source.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePoint {
    /// Multiplier on x.
    pub x_scale: f64,
    /// Multiplier on y.
    pub y_scale: f64,
    /// Multiplier on z.
    pub z_scale: f64,
}

impl Default for ScalePoint {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl ScalePoint {
    /// Same scale on every axis.
    #[must_use]
    pub const fn uniform(scale: f64) -> Self {
        Self {
            x_scale: scale,
            y_scale: scale,
            z_scale: scale,
        }
    }
}

impl NoiseModule for ScalePoint {
    fn arity(&self) -> usize {
        1
    }

    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        sources.sample(0, x * self.x_scale, y * self.y_scale, z * self.z_scale)
    }
}
