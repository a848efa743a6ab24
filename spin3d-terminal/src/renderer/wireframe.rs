/// Wireframe rasterizer: vertices as points, edges as Bresenham lines
use spin3d_core::{project_to_cell, Cell, Shape};

use super::Renderer;
use crate::canvas::Canvas;
use crate::error::Result;

pub const POINT: char = '*';
pub const LINE: char = '.';

/// Draws every vertex and edge, ignoring depth
pub struct WireframeRenderer {
    point: char,
    line: char,
}

impl WireframeRenderer {
    pub fn new(point: char, line: char) -> Self {
        Self { point, line }
    }

    /// Rasterize the segment between two cells, leaving point markers intact
    pub fn draw_line(&self, canvas: &mut Canvas, from: Cell, to: Cell) {
        let Cell { mut row, mut col } = from;
        let d_row = (to.row - row).abs();
        let d_col = (to.col - col).abs();
        let step_row = if row < to.row { 1 } else { -1 };
        let step_col = if col < to.col { 1 } else { -1 };
        let mut error = d_row - d_col;

        loop {
            let cell = Cell::new(row, col);
            if canvas.get(cell) != Some(self.point) {
                canvas.set(cell, self.line);
            }
            if row == to.row && col == to.col {
                break;
            }

            let error_2 = 2 * error;
            if error_2 > -d_col {
                error -= d_col;
                row += step_row;
            }
            if error_2 < d_row {
                error += d_row;
                col += step_col;
            }
        }
    }
}

impl Default for WireframeRenderer {
    fn default() -> Self {
        Self::new(POINT, LINE)
    }
}

impl Renderer for WireframeRenderer {
    fn render(&mut self, shape: &Shape, canvas: &mut Canvas) -> Result<()> {
        for vertex in shape.vertices() {
            canvas.set(project_to_cell(vertex), self.point);
        }

        for edge in shape.edges() {
            let from = project_to_cell(shape.vertex(edge.start())?);
            let to = project_to_cell(shape.vertex(edge.end())?);
            self.draw_line(canvas, from, to);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "wire"
    }
}
