/// Wirecam Core Library - Camera, transform and projection logic
///
/// This library provides the platform-free core of the wireframe
/// renderer: rotation primitives, pinhole projection, the per-vertex
/// transform pipeline, mesh topology, the first-person camera
/// controller and the frame orchestrator.

pub mod camera;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use camera::{Camera, FrameInput};
pub use mesh::{Mesh, MeshError};
pub use projection::{ScreenPoint, Viewport, NEAR_PLANE};
pub use scene::{Scene, SceneObject, Spin, Style};
pub use surface::{Color, RenderSurface};
pub use transform::RotationState;
