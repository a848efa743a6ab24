/// Square character grid that one frame is painted onto
use crossterm::{style::Print, QueueableCommand};
use std::io::{self, Write};
use spin3d_core::{to_cell, Cell};

/// Glyph for an unpainted cell
pub const BLANK: char = ' ';

/// A `(2 * offset + 1)` square grid centered on the logical origin.
///
/// Storage is row-major with row 0 at the bottom of the picture; rows are
/// emitted from the highest index down so that increasing row coordinates
/// render upward.
pub struct Canvas {
    offset: usize,
    side: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(offset: usize) -> Self {
        let side = offset * 2 + 1;
        Self {
            offset,
            side,
            cells: vec![BLANK; side * side],
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let offset = self.offset as i64;
        let side = self.side as i64;
        let row = cell.row + offset;
        let col = cell.col + offset;

        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some(row as usize * self.side + col as usize)
        } else {
            None
        }
    }

    /// Glyph at a logical cell, `None` outside the grid
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.index(cell).map(|i| self.cells[i])
    }

    pub fn glyph_at(&self, row: i64, col: i64) -> Option<char> {
        self.get(Cell::new(row, col))
    }

    /// Paint a logical cell. Writes outside the grid are dropped and reported
    /// as `false`.
    pub fn set(&mut self, cell: Cell, glyph: char) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// Paint the cell containing a continuous screen position
    pub fn plot(&mut self, row: f64, col: f64, glyph: char) -> bool {
        self.set(Cell::new(to_cell(row), to_cell(col)), glyph)
    }

    /// Logical coordinates covered by the grid along either axis
    pub fn coords(&self) -> std::ops::RangeInclusive<i64> {
        let offset = self.offset as i64;
        -offset..=offset
    }

    /// Rows in presentation order, highest row first
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.side).rev()
    }

    /// Number of cells currently holding `glyph`
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|&&c| c == glyph).count()
    }

    /// Queue the frame, framed by one blank line above and below
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(Print('\n'))?;
        for row in self.rows_top_down() {
            let line: String = row.iter().collect();
            writer.queue(Print(line))?;
            writer.queue(Print('\n'))?;
        }
        writer.queue(Print('\n'))?;
        Ok(())
    }

    /// Write the frame out and reset the grid for the next one
    pub fn present<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.draw(writer)?;
        writer.flush()?;
        self.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_text(canvas: &mut Canvas) -> String {
        let mut out = Vec::new();
        canvas.present(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_canvas_dimensions() {
        let canvas = Canvas::new(4);
        assert_eq!(canvas.offset(), 4);
        assert_eq!(canvas.side(), 9);
        assert_eq!(canvas.count(BLANK), 81);
        assert_eq!(canvas.coords(), -4..=4);
    }

    #[test]
    fn test_clear_then_present_is_blank() {
        let mut canvas = Canvas::new(2);
        canvas.plot(1.0, 1.0, '#');
        canvas.clear();

        let text = frame_text(&mut canvas);
        assert_eq!(text, "\n     \n     \n     \n     \n     \n\n");
    }

    #[test]
    fn test_present_flips_rows_and_clears() {
        let mut canvas = Canvas::new(1);
        canvas.set(Cell::new(1, -1), 'T');
        canvas.set(Cell::new(-1, 1), 'B');

        let text = frame_text(&mut canvas);
        assert_eq!(text, "\nT  \n   \n  B\n\n");
        assert_eq!(canvas.count(BLANK), 9);
    }

    #[test]
    fn test_plot_truncates_toward_zero() {
        let mut canvas = Canvas::new(3);
        canvas.plot(-0.9, 2.7, '*');

        assert_eq!(canvas.glyph_at(0, 2), Some('*'));
        assert_eq!(canvas.glyph_at(-1, 2), Some(BLANK));
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut canvas = Canvas::new(2);
        assert!(!canvas.set(Cell::new(3, 0), '*'));
        assert!(!canvas.plot(0.0, -7.5, '*'));
        assert_eq!(canvas.glyph_at(3, 0), None);
        assert_eq!(canvas.count(BLANK), 25);
    }
}
