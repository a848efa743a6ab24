/// Rendering strategies that paint a shape onto the canvas
use spin3d_core::Shape;

use crate::canvas::Canvas;
use crate::error::Result;

pub mod fill;
pub mod wireframe;

pub use fill::{Palette, SolidFillRenderer};
pub use wireframe::WireframeRenderer;

/// Paints one frame of a shape in its current orientation.
///
/// Implementations only draw; rotating the shape and presenting the canvas
/// belong to the animation driver.
pub trait Renderer {
    fn render(&mut self, shape: &Shape, canvas: &mut Canvas) -> Result<()>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
