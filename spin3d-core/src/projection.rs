/// Orthographic projection onto the character grid
///
/// The screen is a square grid addressed by logical cell coordinates in
/// `[-offset, offset]`. A vertex's `x` selects the cell row and its `y` the
/// column; `z` is dropped. Rows are printed top-down from the highest index,
/// so increasing `x` renders upward.
use nalgebra::Point3;

/// A logical cell on the character grid, origin at the center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Map a continuous coordinate to a cell index by truncating toward zero.
///
/// Both renderers go through this so that `-0.7` and `0.7` land in the same
/// cell as `0.0`. Changing it to rounding or flooring shifts every frame.
pub fn to_cell(coord: f64) -> i64 {
    coord.trunc() as i64
}

/// Screen-space position of a vertex as `(row, col)`, depth discarded
pub fn project(vertex: &Point3<f64>) -> (f64, f64) {
    (vertex.x, vertex.y)
}

/// The cell a vertex lands in
pub fn project_to_cell(vertex: &Point3<f64>) -> Cell {
    let (row, col) = project(vertex);
    Cell::new(to_cell(row), to_cell(col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(to_cell(0.0), 0);
        assert_eq!(to_cell(5.99), 5);
        assert_eq!(to_cell(-5.99), -5);
        assert_eq!(to_cell(-0.4), 0);
        assert_eq!(to_cell(3.0), 3);
    }

    #[test]
    fn test_projection_drops_depth() {
        let near = Point3::new(2.5, -1.5, 9.0);
        let far = Point3::new(2.5, -1.5, -9.0);

        assert_eq!(project(&near), (2.5, -1.5));
        assert_eq!(project_to_cell(&near), project_to_cell(&far));
        assert_eq!(project_to_cell(&near), Cell::new(2, -1));
    }
}
