/// Geometry primitives: edges, surfaces and the rotating shape that owns them
use nalgebra::Point3;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::transform::Transform;

/// An unordered pair of vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self(a, b)
    }

    /// First endpoint as listed
    pub fn start(&self) -> usize {
        self.0
    }

    /// Second endpoint as listed
    pub fn end(&self) -> usize {
        self.1
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self(a, b)
    }
}

/// A closed polygon outline described by its edges
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub edges: Vec<Edge>,
}

impl Surface {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl From<&[(usize, usize)]> for Surface {
    fn from(pairs: &[(usize, usize)]) -> Self {
        Self::new(pairs.iter().copied().map(Edge::from).collect())
    }
}

/// A rigid mesh that spins by a fixed angle every animation step
#[derive(Debug, Clone)]
pub struct Shape {
    vertices: Vec<Point3<f64>>,
    edges: Vec<Edge>,
    surfaces: Vec<Surface>,
    angle: f64,
}

impl Shape {
    /// Build a shape from raw vertex positions, rejecting any edge or surface
    /// that points outside the vertex list.
    pub fn new(
        vertices: Vec<Point3<f64>>,
        edges: Vec<Edge>,
        surfaces: Vec<Surface>,
        angle: f64,
    ) -> Result<Self> {
        let len = vertices.len();

        for (i, edge) in edges.iter().enumerate() {
            for vertex in [edge.start(), edge.end()] {
                if vertex >= len {
                    return Err(GeometryError::InvalidEdge { edge: i, vertex, len });
                }
            }
            if edge.start() == edge.end() {
                return Err(GeometryError::DegenerateEdge {
                    edge: i,
                    vertex: edge.start(),
                });
            }
        }

        for (i, surface) in surfaces.iter().enumerate() {
            if surface.edges.is_empty() {
                return Err(GeometryError::EmptySurface { surface: i });
            }
            for edge in &surface.edges {
                for vertex in [edge.start(), edge.end()] {
                    if vertex >= len {
                        return Err(GeometryError::InvalidSurface {
                            surface: i,
                            vertex,
                            len,
                        });
                    }
                }
            }
        }

        debug!(
            vertices = len,
            edges = edges.len(),
            surfaces = surfaces.len(),
            angle,
            "shape constructed"
        );

        Ok(Self {
            vertices,
            edges,
            surfaces,
            angle,
        })
    }

    /// Build a shape from a canonical unit mesh, scaling every vertex by
    /// `size / sqrt(3)`.
    pub fn from_unit_mesh(
        unit_vertices: &[[f64; 3]],
        edges: Vec<Edge>,
        surfaces: Vec<Surface>,
        size: f64,
        angle: f64,
    ) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GeometryError::InvalidSize(size));
        }

        let scale = Transform::unit_scale(size);
        let vertices = unit_vertices
            .iter()
            .map(|&[x, y, z]| Point3::new(x * scale, y * scale, z * scale))
            .collect();

        Self::new(vertices, edges, surfaces, angle)
    }

    /// Rotate every vertex about X, then Y, then Z by the stored angle
    pub fn rotate(&mut self) -> &[Point3<f64>] {
        let matrix = Transform::rotation_matrix(self.angle);
        Transform::apply(&matrix, &mut self.vertices);
        &self.vertices
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<&Point3<f64>> {
        self.vertices.get(index).ok_or(GeometryError::VertexOutOfRange {
            index,
            len: self.vertices.len(),
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Rotation applied per step, in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }
}
