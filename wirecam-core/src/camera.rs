/// First-person camera state and controller
use nalgebra::Vector3;
use std::f32::consts::PI;

/// Pitch stays inside `[PI/2, 3*PI/2]`.
///
/// The range is centered on PI because the rest pose looks down -Z
/// with pitch = PI and yaw = -PI; kept as-is for visual parity with
/// the reference scene.
pub const PITCH_MIN: f32 = PI / 2.0;
pub const PITCH_MAX: f32 = 3.0 * PI / 2.0;

/// One frame's worth of accumulated input: held movement keys plus
/// the pointer motion delta gathered while capture is active.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub look_dx: f32,
    pub look_dy: f32,
}

/// Persistent camera position and orientation, updated once per frame
/// by [`Camera::update`]. Owned by the frame loop; never shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    /// Movement rate in world units per second.
    pub move_speed: f32,
    /// Radians of turn per pixel of pointer motion.
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -500.0),
            yaw: -PI,
            pitch: PI,
            move_speed: 60.0,
            sensitivity: 0.002,
        }
    }
}

impl Camera {
    pub fn new(position: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            ..Self::default()
        }
    }

    /// Advance the camera by one frame of input, scaled by elapsed
    /// time. Movement tracks the yaw facing in the X-Z plane; vertical
    /// motion is independent of orientation. Pitch is clamped after
    /// every update.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        let step = self.move_speed * dt;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        if input.forward {
            self.position.x += step * sin_yaw;
            self.position.z -= step * cos_yaw;
        }
        if input.back {
            self.position.x -= step * sin_yaw;
            self.position.z += step * cos_yaw;
        }
        if input.left {
            self.position.x -= step * cos_yaw;
            self.position.z -= step * sin_yaw;
        }
        if input.right {
            self.position.x += step * cos_yaw;
            self.position.z += step * sin_yaw;
        }
        if input.up {
            self.position.y += step;
        }
        if input.down {
            self.position.y -= step;
        }

        self.yaw += input.look_dx * self.sensitivity;
        self.pitch += input.look_dy * self.sensitivity;
        self.pitch = self.pitch.clamp(PITCH_MIN, PITCH_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_step_at_zero_yaw() {
        // sin(0) = 0 and cos(0) = 1, so a forward step at yaw 0 moves
        // exactly (0, 0, -move_speed) over one second.
        let mut camera = Camera::new(Vector3::zeros(), 0.0, PI);
        let input = FrameInput {
            forward: true,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0);
        assert_eq!(camera.position, Vector3::new(0.0, 0.0, -camera.move_speed));
    }

    #[test]
    fn test_strafe_perpendicular_to_facing() {
        let mut camera = Camera::new(Vector3::zeros(), 0.0, PI);
        let input = FrameInput {
            right: true,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0);
        assert_eq!(camera.position, Vector3::new(camera.move_speed, 0.0, 0.0));

        let mut camera = Camera::new(Vector3::zeros(), 0.0, PI);
        let input = FrameInput {
            left: true,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0);
        assert_eq!(camera.position, Vector3::new(-camera.move_speed, 0.0, 0.0));
    }

    #[test]
    fn test_vertical_movement_ignores_orientation() {
        let mut camera = Camera::new(Vector3::zeros(), 1.234, PI);
        let input = FrameInput {
            up: true,
            ..FrameInput::default()
        };
        camera.update(&input, 0.5);
        assert_eq!(
            camera.position,
            Vector3::new(0.0, camera.move_speed * 0.5, 0.0)
        );
    }

    #[test]
    fn test_movement_scales_with_dt() {
        let mut camera = Camera::new(Vector3::zeros(), 0.0, PI);
        let input = FrameInput {
            forward: true,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0 / 60.0);
        assert!((camera.position.z + camera.move_speed / 60.0).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped_to_range() {
        let mut camera = Camera::default();
        let input = FrameInput {
            look_dy: 1e9,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0);
        assert_eq!(camera.pitch, PITCH_MAX);

        let input = FrameInput {
            look_dy: -1e9,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0);
        assert_eq!(camera.pitch, PITCH_MIN);
    }

    #[test]
    fn test_look_delta_accumulates_yaw() {
        let mut camera = Camera::default();
        let start_yaw = camera.yaw;
        let input = FrameInput {
            look_dx: 100.0,
            ..FrameInput::default()
        };
        camera.update(&input, 1.0);
        assert!((camera.yaw - (start_yaw + 100.0 * camera.sensitivity)).abs() < 1e-6);
    }
}
