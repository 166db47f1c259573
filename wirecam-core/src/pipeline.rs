/// Per-vertex transform pipeline: object space to screen space
use crate::camera::Camera;
use crate::mesh::Mesh;
use crate::projection::{ScreenPoint, Viewport};
use crate::transform::{rotate_x, rotate_y, RotationState};
use nalgebra::Vector3;

/// Transform one mesh-local vertex into a screen point, or `None` if
/// it falls behind the near plane.
///
/// Stage order is fixed and not reorderable:
/// 1. scale by the mesh size factor
/// 2. self-rotation X, Y, Z about the mesh-local origin
/// 3. translate into camera-relative space
/// 4. camera yaw (Y), then camera pitch (X) - the world rotates
///    opposite to the first-person look
/// 5. perspective projection
///
/// Each call owns a private copy of the vertex; the mesh template is
/// never touched.
pub fn project_vertex(
    local: Vector3<f32>,
    scale: f32,
    rotation: &RotationState,
    camera: &Camera,
    viewport: &Viewport,
) -> Option<ScreenPoint> {
    let v = rotation.apply(local * scale);
    let v = v - camera.position;
    let v = rotate_x(rotate_y(v, camera.yaw), camera.pitch);
    viewport.project(v)
}

/// Project every template vertex of a mesh.
///
/// The output is index-aligned with the vertex list: invisible
/// vertices keep their slot as `None`, so edge indices stay valid.
pub fn project_mesh(
    mesh: &Mesh,
    rotation: &RotationState,
    camera: &Camera,
    viewport: &Viewport,
) -> Vec<Option<ScreenPoint>> {
    mesh.vertices()
        .iter()
        .map(|&v| project_vertex(v, mesh.scale, rotation, camera, viewport))
        .collect()
}

/// The edges of a mesh whose endpoints both projected successfully.
/// An edge with either endpoint not visible is dropped entirely,
/// never rendered clamped or degenerate. A slice shorter than the
/// vertex list treats the missing slots as not visible rather than
/// panicking.
pub fn visible_edges<'a>(
    mesh: &'a Mesh,
    projected: &'a [Option<ScreenPoint>],
) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + 'a {
    mesh.edges().iter().filter_map(move |&(a, b)| {
        let pa = projected.get(a).copied().flatten()?;
        let pb = projected.get(b).copied().flatten()?;
        Some((pa, pb))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use std::collections::HashSet;
    use std::f32::consts::PI;

    fn test_camera() -> Camera {
        // Unclamped pitch 0 / yaw 0: looking straight down +Z.
        Camera::new(Vector3::new(0.0, 0.0, -500.0), 0.0, 0.0)
    }

    #[test]
    fn test_identity_pipeline_matches_projection() {
        let camera = Camera::new(Vector3::zeros(), 0.0, 0.0);
        let viewport = Viewport::default();
        let p = project_vertex(
            Vector3::new(0.0, 0.0, 10.0),
            1.0,
            &RotationState::zero(),
            &camera,
            &viewport,
        );
        assert_eq!(p, Some(ScreenPoint { x: 640, y: 360 }));
    }

    #[test]
    fn test_cube_fully_visible() {
        // Half-extent-1 cube at the origin, scaled by the demo size
        // factor, seen from z = -500: 8 distinct points and all 12
        // edges survive.
        let mesh = Mesh::cuboid(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0), 100.0);
        let projected = project_mesh(&mesh, &RotationState::zero(), &test_camera(), &Viewport::default());

        let points: Vec<ScreenPoint> = projected.iter().copied().flatten().collect();
        assert_eq!(points.len(), 8);
        let distinct: HashSet<ScreenPoint> = points.iter().copied().collect();
        assert_eq!(distinct.len(), 8);

        let edges: Vec<_> = visible_edges(&mesh, &projected).collect();
        assert_eq!(edges.len(), 12);
    }

    #[test]
    fn test_edge_with_near_endpoint_excluded() {
        // One endpoint lands at camera-space z = 0.05, below the near
        // plane; the edge must vanish entirely.
        let vertices = vec![
            Vector3::new(0.0, 0.0, 0.05),
            Vector3::new(0.0, 0.0, 10.0),
        ];
        let mesh = Mesh::new(vertices, vec![(0, 1)], 1.0).unwrap();
        let camera = Camera::new(Vector3::zeros(), 0.0, 0.0);
        let projected = project_mesh(&mesh, &RotationState::zero(), &camera, &Viewport::default());

        assert_eq!(projected[0], None);
        assert!(projected[1].is_some());
        assert_eq!(visible_edges(&mesh, &projected).count(), 0);
    }

    #[test]
    fn test_edge_indices_stay_aligned() {
        // Vertex 0 is invisible; the surviving edge must still join
        // vertices 1 and 2, not shift down a slot.
        let vertices = vec![
            Vector3::new(0.0, 0.0, -10.0),
            Vector3::new(-1.0, 0.0, 10.0),
            Vector3::new(1.0, 0.0, 10.0),
        ];
        let mesh = Mesh::new(vertices, vec![(0, 1), (1, 2)], 1.0).unwrap();
        let camera = Camera::new(Vector3::zeros(), 0.0, 0.0);
        let viewport = Viewport::default();
        let projected = project_mesh(&mesh, &RotationState::zero(), &camera, &viewport);

        let edges: Vec<_> = visible_edges(&mesh, &projected).collect();
        assert_eq!(edges.len(), 1);
        let expected_a = viewport.project(Vector3::new(-1.0, 0.0, 10.0)).unwrap();
        let expected_b = viewport.project(Vector3::new(1.0, 0.0, 10.0)).unwrap();
        assert_eq!(edges[0], (expected_a, expected_b));
    }

    #[test]
    fn test_visible_edges_treats_missing_slots_as_invisible() {
        let vertices = vec![
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(1.0, 0.0, 10.0),
        ];
        let mesh = Mesh::new(vertices, vec![(0, 1)], 1.0).unwrap();

        // A projection slice shorter than the vertex list drops the
        // edge instead of panicking.
        let short = [Some(ScreenPoint { x: 640, y: 360 })];
        assert_eq!(visible_edges(&mesh, &short).count(), 0);
        assert_eq!(visible_edges(&mesh, &[]).count(), 0);
    }

    #[test]
    fn test_camera_yaw_turns_world_opposite() {
        // A point ahead is visible at yaw 0; a half-turn of yaw puts
        // it behind the camera.
        let viewport = Viewport::default();
        let camera = Camera::new(Vector3::zeros(), 0.0, 0.0);
        let ahead = Vector3::new(0.0, 0.0, 10.0);
        assert!(project_vertex(ahead, 1.0, &RotationState::zero(), &camera, &viewport).is_some());

        let turned = Camera::new(Vector3::zeros(), PI, 0.0);
        assert_eq!(
            project_vertex(ahead, 1.0, &RotationState::zero(), &turned, &viewport),
            None
        );
    }

    #[test]
    fn test_self_rotation_moves_projection() {
        let viewport = Viewport::default();
        let camera = test_camera();
        let v = Vector3::new(1.0, 1.0, 1.0);
        let still = project_vertex(v, 100.0, &RotationState::zero(), &camera, &viewport).unwrap();
        let spun =
            project_vertex(v, 100.0, &RotationState::new(0.4, 0.8, 0.2), &camera, &viewport)
                .unwrap();
        assert_ne!(still, spun);
    }
}
