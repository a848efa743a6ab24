/// Canonical polyhedra bundled with the viewer
use std::f64::consts::PI;
use std::fmt;

use crate::error::Result;
use crate::geometry::{Edge, Shape, Surface};

/// Rotation applied per animation step unless a caller asks otherwise
pub const DEFAULT_ANGLE: f64 = PI / 32.0;

/// The built-in shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Pyramid,
    Dodecahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cube, ShapeKind::Pyramid, ShapeKind::Dodecahedron];

    /// Build the shape scaled to `size`, spinning by [`DEFAULT_ANGLE`]
    pub fn build(self, size: f64) -> Result<Shape> {
        self.build_with_angle(size, DEFAULT_ANGLE)
    }

    pub fn build_with_angle(self, size: f64, angle: f64) -> Result<Shape> {
        match self {
            ShapeKind::Cube => Shape::cube(size, angle),
            ShapeKind::Pyramid => Shape::pyramid(size, angle),
            ShapeKind::Dodecahedron => Shape::dodecahedron(size, angle),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Dodecahedron => "dodecahedron",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

fn surfaces(faces: &[&[(usize, usize)]]) -> Vec<Surface> {
    faces.iter().map(|&face| Surface::from(face)).collect()
}

impl Shape {
    /// Axis-aligned cube with corners at (±1, ±1, ±1) before scaling
    pub fn cube(size: f64, angle: f64) -> Result<Self> {
        let vertices = [
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
        ];
        let edge_list = edges(&[
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ]);
        let faces = surfaces(&[
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
            &[(0, 3), (3, 7), (7, 4), (4, 0)],
            &[(0, 1), (1, 5), (5, 4), (4, 0)],
            &[(1, 2), (2, 6), (6, 5), (5, 1)],
            &[(4, 5), (5, 6), (6, 7), (7, 4)],
            &[(3, 2), (2, 6), (6, 7), (7, 3)],
        ]);

        Self::from_unit_mesh(&vertices, edge_list, faces, size, angle)
    }

    /// Square-based pyramid with its apex on +Z
    pub fn pyramid(size: f64, angle: f64) -> Result<Self> {
        let vertices = [
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [0.0, 0.0, 1.0],
        ];
        let edge_list = edges(&[
            (0, 1), (1, 2), (2, 3), (3, 0),
            (0, 4), (1, 4), (2, 4), (3, 4),
        ]);
        let faces = surfaces(&[
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
            &[(0, 4), (4, 3), (3, 0)],
            &[(3, 2), (2, 4), (4, 3)],
            &[(2, 1), (1, 4), (4, 2)],
            &[(1, 4), (4, 0), (0, 1)],
        ]);

        Self::from_unit_mesh(&vertices, edge_list, faces, size, angle)
    }

    /// Regular dodecahedron built on the golden ratio
    pub fn dodecahedron(size: f64, angle: f64) -> Result<Self> {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let inv = 1.0 / phi;
        let vertices = [
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
            [1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, -1.0, -1.0],
            [0.0, inv, phi],
            [0.0, -inv, phi],
            [0.0, inv, -phi],
            [0.0, -inv, -phi],
            [inv, phi, 0.0],
            [-inv, phi, 0.0],
            [inv, -phi, 0.0],
            [-inv, -phi, 0.0],
            [phi, 0.0, inv],
            [phi, 0.0, -inv],
            [-phi, 0.0, inv],
            [-phi, 0.0, -inv],
        ];
        let edge_list = edges(&[
            (6, 18), (6, 15), (12, 13), (5, 13), (5, 10), (8, 9),
            (4, 18), (5, 19), (0, 8), (2, 14), (1, 12), (7, 19),
            (18, 19), (4, 8), (14, 15), (10, 11), (0, 16), (2, 16),
            (1, 17), (7, 15), (3, 11), (3, 14), (4, 13), (3, 17),
            (0, 12), (2, 9), (1, 10), (7, 11), (6, 9), (16, 17),
        ]);
        // Face edges are listed as a set, not in loop order
        let faces = surfaces(&[
            &[(0, 12), (1, 17), (12, 1), (16, 0), (17, 16)],
            &[(4, 18), (6, 9), (8, 4), (9, 8), (18, 6)],
            &[(6, 18), (7, 15), (15, 6), (18, 19), (19, 7)],
            &[(2, 9), (6, 15), (9, 6), (14, 2), (15, 14)],
            &[(0, 16), (2, 9), (8, 0), (9, 8), (16, 2)],
            &[(2, 14), (3, 17), (14, 3), (16, 2), (17, 16)],
            &[(3, 11), (7, 15), (11, 7), (14, 3), (15, 14)],
            &[(1, 17), (3, 11), (10, 1), (11, 10), (17, 3)],
            &[(0, 12), (4, 8), (8, 0), (12, 13), (13, 4)],
            &[(1, 12), (5, 10), (10, 1), (12, 13), (13, 5)],
            &[(5, 10), (7, 19), (10, 11), (11, 7), (19, 5)],
            &[(4, 18), (5, 13), (13, 4), (18, 19), (19, 5)],
        ]);

        Self::from_unit_mesh(&vertices, edge_list, faces, size, angle)
    }
}
