/// Frame orchestrator: a flat list of meshes driven through the
/// pipeline once per frame
use crate::camera::Camera;
use crate::mesh::{Mesh, MeshError};
use crate::pipeline::{project_mesh, visible_edges};
use crate::projection::Viewport;
use crate::surface::{Color, RenderSurface, BLACK, GRAY, WHITE};
use crate::transform::RotationState;
use nalgebra::Vector3;

/// Self-spin rates in radians per second, applied each frame scaled
/// by elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Spin {
    pub fn uniform(rate: f32) -> Self {
        Self {
            x: rate,
            y: rate,
            z: rate,
        }
    }
}

/// How an object's primitives are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub line_width: f32,
    pub point_radius: f32,
}

/// One independent mesh in the scene with its own rotation state.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub rotation: RotationState,
    pub spin: Spin,
    pub style: Style,
}

impl SceneObject {
    pub fn new(mesh: Mesh, style: Style) -> Self {
        Self {
            mesh,
            rotation: RotationState::zero(),
            spin: Spin::default(),
            style,
        }
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }
}

/// Flat list of independent meshes; no hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub background: Color,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            background: BLACK,
        }
    }

    /// The reference scene: a spinning cube floating over a ground
    /// grid of points.
    pub fn demo() -> Result<Self, MeshError> {
        let cube = SceneObject::new(
            Mesh::cuboid(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0), 100.0),
            Style {
                color: WHITE,
                line_width: 2.0,
                point_radius: 5.0,
            },
        )
        .with_spin(Spin::uniform(0.6));

        let grid = SceneObject::new(
            Mesh::ground_grid(10, 1, 100.0)?,
            Style {
                color: GRAY,
                line_width: 1.0,
                point_radius: 1.0,
            },
        );

        Ok(Self {
            objects: vec![grid, cube],
            background: BLACK,
        })
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Advance each object's self-rotation by elapsed time.
    pub fn advance(&mut self, dt: f32) {
        for object in &mut self.objects {
            let spin = object.spin;
            object
                .rotation
                .rotate(spin.x * dt, spin.y * dt, spin.z * dt);
        }
    }

    /// Run one full frame: clear, pipeline every object, draw the
    /// surviving edges and vertices, present.
    pub fn render<S: RenderSurface>(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        surface: &mut S,
    ) {
        surface.clear(self.background);

        for object in &self.objects {
            let projected = project_mesh(&object.mesh, &object.rotation, camera, viewport);

            for (a, b) in visible_edges(&object.mesh, &projected) {
                surface.draw_line(a, b, object.style.color, object.style.line_width);
            }
            for p in projected.iter().flatten() {
                surface.draw_point(*p, object.style.color, object.style.point_radius);
            }
        }

        surface.present();
    }
}
