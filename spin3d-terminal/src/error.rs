/// Errors raised while painting or presenting frames
use spin3d_core::GeometryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("glyph palette must contain at least one character")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, RenderError>;
