/// Pinhole projection from camera space to screen space
use nalgebra::Vector3;

/// Camera-space depths at or below this are classified not visible.
/// Perspective division is undefined at z = 0; the guard keeps a
/// margin above it.
pub const NEAR_PLANE: f32 = 0.1;

/// An integer pixel coordinate on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Display surface dimensions and perspective strength.
///
/// The projection offsets are always derived from the surface
/// dimensions, so a resize only needs a new `Viewport`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Focal length scalar: larger values narrow the field of view.
    pub focal: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, focal: f32) -> Self {
        Self {
            width,
            height,
            focal,
        }
    }

    /// Project a camera-space point onto the screen.
    ///
    /// Returns `None` when the point sits behind the near plane;
    /// callers must drop such points entirely, including every edge
    /// that references one.
    pub fn project(&self, v: Vector3<f32>) -> Option<ScreenPoint> {
        if v.z <= NEAR_PLANE {
            return None;
        }
        let half_w = self.width as f32 / 2.0;
        let half_h = self.height as f32 / 2.0;
        Some(ScreenPoint {
            x: (self.focal * v.x / v.z + half_w).round() as i32,
            y: (self.focal * v.y / v.z + half_h).round() as i32,
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720, 500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_projection() {
        // Camera at origin looking down +Z: a point straight ahead
        // lands on the surface center.
        let viewport = Viewport::default();
        let p = viewport.project(Vector3::new(0.0, 0.0, 10.0));
        assert_eq!(p, Some(ScreenPoint { x: 640, y: 360 }));
    }

    #[test]
    fn test_projection_formula() {
        let viewport = Viewport::new(1280, 720, 500.0);
        let p = viewport.project(Vector3::new(2.0, -3.0, 10.0)).unwrap();
        assert_eq!(p.x, (500.0_f32 * 2.0 / 10.0 + 640.0).round() as i32);
        assert_eq!(p.y, (500.0_f32 * -3.0 / 10.0 + 360.0).round() as i32);
    }

    #[test]
    fn test_near_plane_rejection() {
        let viewport = Viewport::default();
        assert_eq!(viewport.project(Vector3::new(1.0, 1.0, 0.05)), None);
        assert_eq!(viewport.project(Vector3::new(1.0, 1.0, 0.1)), None);
        assert_eq!(viewport.project(Vector3::new(1.0, 1.0, -5.0)), None);
        assert!(viewport.project(Vector3::new(1.0, 1.0, 0.11)).is_some());
    }

    #[test]
    fn test_offsets_follow_dimensions() {
        let viewport = Viewport::new(640, 480, 500.0);
        let p = viewport.project(Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(p, Some(ScreenPoint { x: 320, y: 240 }));
    }
}
