/// Solid fill by per-pixel ray casting, painted back to front
use spin3d_core::{project, Cell, Shape, Surface};
use tracing::{trace, warn};

use super::Renderer;
use crate::canvas::Canvas;
use crate::error::{RenderError, Result};

/// First glyph of the default palette; surfaces count up from here
pub const BASE_GLYPH: char = '%';

/// Glyphs handed out to surfaces in order
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for the `index`-th surface; wraps around when the palette runs out
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index % self.glyphs.len()]
    }
}

impl Default for Palette {
    /// Printable ASCII from `%` through `~`
    fn default() -> Self {
        Self {
            glyphs: (BASE_GLYPH..='~').collect(),
        }
    }
}

/// A surface edge projected to screen space as `(row, col)` endpoints
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: (f64, f64),
    end: (f64, f64),
}

impl Segment {
    /// Whether the upward ray from `(row, col)` crosses this segment.
    ///
    /// Segments whose endpoints share a column never count, which can
    /// under-count crossings where an outline runs exactly along a column.
    fn crossed_by(&self, row: f64, col: f64) -> bool {
        let (r1, c1) = self.start;
        let (r2, c2) = self.end;
        if c2 - c1 == 0.0 {
            return false;
        }

        let slope = (r2 - r1) / (c2 - c1);
        let intercept = r1 - slope * c1;
        let hit = slope * col + intercept;

        row < hit && r1.min(r2) < hit && hit < r1.max(r2)
    }
}

/// Paints every surface with its own glyph, nearer surfaces last
pub struct SolidFillRenderer {
    palette: Palette,
    glyphs: Vec<char>,
    camera_z: f64,
}

impl SolidFillRenderer {
    /// Assign one glyph per surface of `shape`, in surface order.
    ///
    /// `camera_z` is the viewpoint depth used to order surfaces; the viewer
    /// places it at the canvas offset.
    pub fn new(shape: &Shape, palette: Palette, camera_z: f64) -> Self {
        let surfaces = shape.surfaces().len();
        if surfaces > palette.len() {
            warn!(
                surfaces,
                glyphs = palette.len(),
                "fewer glyphs than surfaces, some surfaces will share a glyph"
            );
        }

        let glyphs = (0..surfaces).map(|k| palette.glyph(k)).collect();

        Self {
            palette,
            glyphs,
            camera_z,
        }
    }

    pub fn glyph_for(&self, surface: usize) -> char {
        self.glyphs
            .get(surface)
            .copied()
            .unwrap_or_else(|| self.palette.glyph(surface))
    }

    /// Depth key used for painter's ordering.
    ///
    /// Sums `|camera_z - z|` over the first endpoint of every edge. This is
    /// a total, not an average, so surfaces with more edges weigh more.
    pub fn surface_depth(&self, shape: &Shape, surface: &Surface) -> Result<f64> {
        let mut total = 0.0;
        for edge in surface.edges() {
            let z = shape.vertex(edge.start())?.z;
            total += (self.camera_z - z).abs();
        }
        Ok(total)
    }

    /// Surface indices sorted farthest first; ties keep surface order
    pub fn depth_order(&self, shape: &Shape) -> Result<Vec<usize>> {
        let depths = shape
            .surfaces()
            .iter()
            .map(|surface| self.surface_depth(shape, surface))
            .collect::<Result<Vec<f64>>>()?;

        let mut order: Vec<usize> = (0..depths.len()).collect();
        order.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));
        Ok(order)
    }

    fn outline(shape: &Shape, surface: &Surface) -> Result<Vec<Segment>> {
        surface
            .edges()
            .iter()
            .map(|edge| {
                Ok(Segment {
                    start: project(shape.vertex(edge.start())?),
                    end: project(shape.vertex(edge.end())?),
                })
            })
            .collect()
    }

    /// Even-odd test of a screen position against a projected outline
    fn inside(outline: &[Segment], row: f64, col: f64) -> bool {
        let crossings = outline
            .iter()
            .filter(|segment| segment.crossed_by(row, col))
            .count();
        crossings % 2 == 1
    }
}

impl Renderer for SolidFillRenderer {
    fn render(&mut self, shape: &Shape, canvas: &mut Canvas) -> Result<()> {
        let order = self.depth_order(shape)?;
        let outlines = order
            .iter()
            .map(|&k| Ok((k, Self::outline(shape, &shape.surfaces()[k])?)))
            .collect::<Result<Vec<_>>>()?;
        trace!(?order, "surface paint order");

        for row in canvas.coords() {
            for col in canvas.coords() {
                for (k, outline) in &outlines {
                    if Self::inside(outline, row as f64, col as f64) {
                        canvas.set(Cell::new(row, col), self.glyph_for(*k));
                    }
                }
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "fill"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::BLANK;
    use nalgebra::Point3;
    use spin3d_core::{Edge, ShapeKind};

    /// Diamond with corners at distance `r` along both screen axes, at depth `z`
    fn diamond(r: f64, z: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, r, z),
            Point3::new(r, 0.0, z),
            Point3::new(0.0, -r, z),
            Point3::new(-r, 0.0, z),
        ]
    }

    fn loop_of(first: usize) -> Surface {
        Surface::new(vec![
            Edge(first, first + 1),
            Edge(first + 1, first + 2),
            Edge(first + 2, first + 3),
            Edge(first + 3, first),
        ])
    }

    #[test]
    fn test_even_odd_fill_of_diamond() {
        let shape = Shape::new(diamond(4.0, 0.0), vec![], vec![loop_of(0)], 0.0).unwrap();
        let mut canvas = Canvas::new(6);
        let mut renderer = SolidFillRenderer::new(&shape, Palette::default(), 6.0);

        renderer.render(&shape, &mut canvas).unwrap();

        for row in -6..=6i64 {
            // The column through the top and bottom corners is a known blind spot
            for col in (-6..=6i64).filter(|&c| c != 0) {
                let distance = row.abs() + col.abs();
                let expected = match distance {
                    d if d < 4 => BASE_GLYPH,
                    d if d > 4 => BLANK,
                    _ => continue,
                };
                assert_eq!(canvas.glyph_at(row, col), Some(expected), "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_axis_aligned_square_is_skipped() {
        // Column-aligned sides are skipped and row-aligned sides never sit
        // strictly between their own endpoints, so nothing is painted
        let vertices = vec![
            Point3::new(-3.0, -3.0, 0.0),
            Point3::new(3.0, -3.0, 0.0),
            Point3::new(3.0, 3.0, 0.0),
            Point3::new(-3.0, 3.0, 0.0),
        ];
        let shape = Shape::new(vertices, vec![], vec![loop_of(0)], 0.0).unwrap();
        let mut canvas = Canvas::new(5);
        let mut renderer = SolidFillRenderer::new(&shape, Palette::default(), 5.0);

        renderer.render(&shape, &mut canvas).unwrap();

        assert_eq!(canvas.count(BLANK), 121);
    }

    #[test]
    fn test_nearer_surface_wins_regardless_of_order() {
        let mut vertices = diamond(4.0, 0.0);
        vertices.extend(diamond(2.0, 3.0));

        for (surfaces, near_index, far_index) in [
            (vec![loop_of(0), loop_of(4)], 1, 0),
            (vec![loop_of(4), loop_of(0)], 0, 1),
        ] {
            let shape = Shape::new(vertices.clone(), vec![], surfaces, 0.0).unwrap();
            let mut canvas = Canvas::new(6);
            let mut renderer = SolidFillRenderer::new(&shape, Palette::default(), 6.0);

            renderer.render(&shape, &mut canvas).unwrap();

            let near = renderer.glyph_for(near_index);
            let far = renderer.glyph_for(far_index);
            assert_ne!(near, far);
            assert_eq!(canvas.glyph_at(0, 1), Some(near));
            assert_eq!(canvas.glyph_at(0, -1), Some(near));
            assert_eq!(canvas.glyph_at(2, 1), Some(far));
        }
    }

    #[test]
    fn test_depth_sums_first_endpoints() {
        let shape = Shape::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 5.0),
            ],
            vec![],
            vec![Surface::new(vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)])],
            0.0,
        )
        .unwrap();
        let renderer = SolidFillRenderer::new(&shape, Palette::default(), 6.0);

        let depth = renderer.surface_depth(&shape, &shape.surfaces()[0]).unwrap();

        // |6 - 0| + |6 - 0| + |6 - 1|; vertex 2 is never a first endpoint
        assert_eq!(depth, 17.0);
    }

    #[test]
    fn test_depth_order_is_stable_for_ties() {
        let shape = ShapeKind::Cube.build_with_angle(6.0, 0.0).unwrap();
        let renderer = SolidFillRenderer::new(&shape, Palette::default(), 6.0);

        let order = renderer.depth_order(&shape).unwrap();
        let depth = |k: usize| renderer.surface_depth(&shape, &shape.surfaces()[k]).unwrap();

        assert_eq!(order.len(), 6);
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(depth(a) > depth(b) || (depth(a) == depth(b) && a < b));
        }
    }

    #[test]
    fn test_default_palette_counts_up_from_base() {
        let shape = ShapeKind::Dodecahedron.build(10.0).unwrap();
        let renderer = SolidFillRenderer::new(&shape, Palette::default(), 10.0);

        assert_eq!(renderer.glyph_for(0), '%');
        assert_eq!(renderer.glyph_for(1), '&');
        assert_eq!(renderer.glyph_for(11), '0');
        assert_eq!(Palette::default().len(), 90);
    }

    #[test]
    fn test_small_palette_wraps_around() {
        let shape = ShapeKind::Pyramid.build(4.0).unwrap();
        let palette = Palette::new("ab".chars()).unwrap();
        let renderer = SolidFillRenderer::new(&shape, palette, 4.0);

        let glyphs: Vec<char> = (0..5).map(|k| renderer.glyph_for(k)).collect();
        assert_eq!(glyphs, vec!['a', 'b', 'a', 'b', 'a']);
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert!(matches!(Palette::new("".chars()), Err(RenderError::EmptyPalette)));
    }

    #[test]
    fn test_rotated_cube_fill_uses_surface_glyphs_only() {
        let mut shape = ShapeKind::Cube.build(10.0).unwrap();
        for _ in 0..3 {
            shape.rotate();
        }
        let mut canvas = Canvas::new(10);
        let mut renderer = SolidFillRenderer::new(&shape, Palette::default(), 10.0);

        renderer.render(&shape, &mut canvas).unwrap();

        let allowed: Vec<char> = (0..6).map(|k| renderer.glyph_for(k)).collect();
        let painted = canvas
            .rows_top_down()
            .flatten()
            .filter(|&&c| c != BLANK)
            .inspect(|c| assert!(allowed.contains(*c), "unexpected glyph {c:?}"))
            .count();
        assert!(painted > 0);
    }
}
