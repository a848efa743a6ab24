/// Error types for shape construction and vertex access
use thiserror::Error;

/// Errors raised by the geometry layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("edge {edge} references vertex {vertex}, but the shape has {len} vertices")]
    InvalidEdge { edge: usize, vertex: usize, len: usize },

    #[error("edge {edge} joins vertex {vertex} to itself")]
    DegenerateEdge { edge: usize, vertex: usize },

    #[error("surface {surface} references vertex {vertex}, but the shape has {len} vertices")]
    InvalidSurface {
        surface: usize,
        vertex: usize,
        len: usize,
    },

    #[error("surface {surface} has no edges")]
    EmptySurface { surface: usize },

    #[error("shape size must be finite and positive, got {0}")]
    InvalidSize(f64),
}

/// Result type alias for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
