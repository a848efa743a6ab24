/// Command-line options and the resolved viewer configuration
use clap::{Parser, ValueEnum};
use spin3d_core::ShapeKind;
use std::time::Duration;
use tracing::Level;

use crate::renderer::wireframe::{LINE, POINT};
use crate::renderer::Palette;

/// Which renderer paints the frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Vertices and edges only
    Wire,
    /// Ray-cast solid surfaces
    Fill,
}

/// Which built-in shape to spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Solid {
    Cube,
    Pyramid,
    Dodecahedron,
}

impl From<Solid> for ShapeKind {
    fn from(solid: Solid) -> Self {
        match solid {
            Solid::Cube => ShapeKind::Cube,
            Solid::Pyramid => ShapeKind::Pyramid,
            Solid::Dodecahedron => ShapeKind::Dodecahedron,
        }
    }
}

/// Spin a polyhedron in the terminal, drawn with ASCII characters
#[derive(Parser, Debug)]
#[command(name = "spin3d", version, about)]
pub struct Args {
    /// Rendering mode
    #[arg(short, long, value_enum, default_value_t = RenderMode::Wire)]
    pub renderer: RenderMode,

    /// Shape to display
    #[arg(short, long, value_enum, default_value_t = Solid::Cube)]
    pub solid: Solid,

    /// Seconds to wait between frames
    #[arg(short, long, default_value = "0.05", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Screen half-width in characters; also scales the shape
    #[arg(short = 'S', long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub size: u16,

    /// Stop after this many frames instead of running until interrupted
    #[arg(short = 'n', long)]
    pub frames: Option<u64>,

    /// Redraw in place instead of scrolling
    #[arg(long)]
    pub clear_screen: bool,

    /// Fill glyphs handed to surfaces in order
    #[arg(long, value_parser = parse_palette)]
    pub palette: Option<Palette>,

    /// Wireframe vertex glyph
    #[arg(long, default_value_t = POINT)]
    pub point: char,

    /// Wireframe edge glyph
    #[arg(long, default_value_t = LINE)]
    pub line: char,

    /// Diagnostics verbosity, written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("`{value}` must be a finite, non-negative number of seconds"))
}

fn parse_palette(value: &str) -> Result<Palette, String> {
    Palette::new(value.chars()).map_err(|e| e.to_string())
}

/// Everything the animation driver needs, resolved from [`Args`]
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RenderMode,
    pub shape: ShapeKind,
    pub offset: usize,
    pub frame_interval: Duration,
    pub max_frames: Option<u64>,
    pub clear_screen: bool,
    pub palette: Palette,
    pub point: char,
    pub line: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RenderMode::Wire,
            shape: ShapeKind::Cube,
            offset: 10,
            frame_interval: Duration::from_millis(50),
            max_frames: None,
            clear_screen: false,
            palette: Palette::default(),
            point: POINT,
            line: LINE,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            mode: args.renderer,
            shape: args.solid.into(),
            offset: usize::from(args.size),
            frame_interval: args.timeout,
            max_frames: args.frames,
            clear_screen: args.clear_screen,
            palette: args.palette.unwrap_or_default(),
            point: args.point,
            line: args.line,
        }
    }
}
