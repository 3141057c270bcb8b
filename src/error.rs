//! Error types for the slide compositor

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing a slide image
///
/// Only the background asset, the canvas itself, the font, and the final
/// encode step can fail a render. A missing or undecodable mask is recovered
/// inside the renderer (the slide is produced without the mask layer) and
/// never surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid renderer configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to fetch an asset over HTTP
    #[error("Failed to load asset: {0}")]
    LoadError(String),

    /// Fetched bytes could not be decoded as a raster image
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// No usable font could be resolved for text overlays
    #[error("Font resolution failed: {0}")]
    FontError(String),

    /// Failed to allocate or draw on the render target
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the composed canvas as PNG
    #[error("Encoding failed: {0}")]
    EncodeError(String),
}
