/// Axis rotations and per-object rotation state
use nalgebra::Vector3;

/// Rotate a point about the X axis through the origin.
///
/// Right-handed: `y' = y cos - z sin`, `z' = y sin + z cos`.
pub fn rotate_x(v: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

/// Rotate a point about the Y axis through the origin.
///
/// Right-handed: `x' = x cos + z sin`, `z' = -x sin + z cos`.
pub fn rotate_y(v: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Rotate a point about the Z axis through the origin.
///
/// Right-handed: `x' = x cos - y sin`, `y' = x sin + y cos`.
pub fn rotate_z(v: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Accumulated self-rotation around three axes (in radians).
///
/// The pipeline applies these as rotate-X, then rotate-Y, then
/// rotate-Z. Rotations do not commute, so that order is part of the
/// contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Apply the accumulated rotation to a point, in X-Y-Z order.
    pub fn apply(&self, v: Vector3<f32>) -> Vector3<f32> {
        rotate_z(rotate_y(rotate_x(v, self.x), self.y), self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}
