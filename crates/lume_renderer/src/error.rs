//! Error type shared by the renderer.

use lume_math::MathError;
use thiserror::Error;

/// Errors that can occur while building a scene, rendering, or writing images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid camera configuration: {0}")]
    InvalidCameraConfig(String),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("intersection record holds no hit")]
    NoIntersection,

    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid image data: {0}")]
    InvalidImage(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
