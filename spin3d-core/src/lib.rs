/// spin3d core library - geometry, rotation and projection for the ASCII viewer
///
/// This crate holds the renderer-independent parts: the rotating shape model,
/// the per-step rotation transform, the projection onto the character grid
/// and the canonical polyhedra.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod shapes;
pub mod transform;

// Re-export commonly used types
pub use error::{GeometryError, Result};
pub use geometry::{Edge, Shape, Surface};
pub use projection::{project, project_to_cell, to_cell, Cell};
pub use shapes::{ShapeKind, DEFAULT_ANGLE};
pub use transform::Transform;
