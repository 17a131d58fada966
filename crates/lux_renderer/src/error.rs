use lux_core::SceneError;
use thiserror::Error;

/// Errors that can occur while building a scene or rendering it.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image must have non-zero size, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
