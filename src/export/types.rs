//! Data types for sketch export.

use thiserror::Error;

/// Errors that can occur while exporting a sketch to an image.
///
/// Export failure is a recoverable condition the host surfaces to the user;
/// it never panics and never silently no-ops.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to prepare drawing surface: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save image: {0}")]
    Io(#[from] std::io::Error),
}
