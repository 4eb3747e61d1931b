//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering, encoding or handing off a card
/// image. A user cancelling a share is not an error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The painted card could not be parsed as SVG.
    #[error("SVG parsing failed: {0}")]
    Svg(String),

    /// The raster surface could not be allocated.
    #[error("Failed to create pixmap: {0}")]
    Pixmap(String),

    /// Raster encoding failed.
    #[error("Image encoding failed: {0}")]
    Encode(String),

    /// The platform share call failed for a reason other than cancellation.
    #[error("Share failed: {0}")]
    Share(String),

    /// Writing the download failed.
    #[error("Download failed: {0}")]
    Download(String),
}
