/// Terminal-based ASCII viewer for spinning polyhedra
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use spin3d_core::Shape;
use tracing::{info, trace};

pub mod canvas;
pub mod config;
pub mod error;
pub mod renderer;

pub use canvas::Canvas;
pub use config::{Args, Config, RenderMode};
pub use error::{RenderError, Result};
pub use renderer::{Palette, Renderer, SolidFillRenderer, WireframeRenderer};

/// Shared flag the animation loop checks between frames
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Build the renderer selected by `config` for `shape`
pub fn build_renderer(config: &Config, shape: &Shape) -> Box<dyn Renderer> {
    match config.mode {
        RenderMode::Wire => Box::new(WireframeRenderer::new(config.point, config.line)),
        RenderMode::Fill => Box::new(SolidFillRenderer::new(
            shape,
            config.palette.clone(),
            config.offset as f64,
        )),
    }
}

/// Animation driver: owns the shape and the canvas and paces frames
pub struct TerminalApp {
    shape: Shape,
    canvas: Canvas,
    renderer: Box<dyn Renderer>,
    frame_interval: Duration,
    max_frames: Option<u64>,
    clear_screen: bool,
    frame_count: u64,
}

impl TerminalApp {
    pub fn new(
        shape: Shape,
        renderer: Box<dyn Renderer>,
        offset: usize,
        frame_interval: Duration,
    ) -> Self {
        Self {
            shape,
            canvas: Canvas::new(offset),
            renderer,
            frame_interval,
            max_frames: None,
            clear_screen: false,
            frame_count: 0,
        }
    }

    /// Build the shape and renderer described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let shape = config.shape.build(config.offset as f64)?;
        let renderer = build_renderer(config, &shape);
        info!(
            shape = %config.shape,
            renderer = renderer.name(),
            offset = config.offset,
            "viewer configured"
        );

        Ok(Self::new(shape, renderer, config.offset, config.frame_interval)
            .with_frame_limit(config.max_frames)
            .with_clear_screen(config.clear_screen))
    }

    pub fn with_frame_limit(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn limit_reached(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frame_count >= max)
    }

    /// Rotate one step and paint the canvas, without presenting it
    pub fn render_frame(&mut self) -> Result<()> {
        self.shape.rotate();
        self.renderer.render(&self.shape, &mut self.canvas)
    }

    /// Write the painted canvas out and clear it
    pub fn present<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        if self.clear_screen {
            writer.queue(Clear(ClearType::All))?;
            writer.queue(cursor::MoveTo(0, 0))?;
        }
        self.canvas.present(writer)?;
        Ok(())
    }

    /// Render and present a single frame
    pub fn step<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.render_frame()?;
        self.present(writer)?;
        self.frame_count += 1;
        trace!(frame = self.frame_count, "frame presented");
        Ok(())
    }

    /// Animate until `stop` is raised or the frame limit is hit.
    ///
    /// The stop signal is only checked between frames; a frame in progress
    /// always completes. Errors end the loop immediately.
    pub fn run<W: Write>(&mut self, writer: &mut W, stop: &StopSignal) -> Result<()> {
        info!(
            renderer = self.renderer.name(),
            interval = ?self.frame_interval,
            max_frames = ?self.max_frames,
            "animation started"
        );

        while !stop.is_stopped() && !self.limit_reached() {
            self.step(writer)?;

            if !self.frame_interval.is_zero() && !stop.is_stopped() && !self.limit_reached() {
                std::thread::sleep(self.frame_interval);
            }
        }

        info!(frames = self.frame_count, "animation stopped");
        Ok(())
    }
}
