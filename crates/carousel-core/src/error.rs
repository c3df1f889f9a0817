//! Error types for the fallible edges of the core.
//!
//! The mutation API itself never fails; these errors cover parsing input that
//! arrives from outside the editor (patches, icon names, image bytes).

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid patch: {0}")]
    InvalidPatch(#[from] serde_json::Error),
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
    #[error("Unsupported image format")]
    UnsupportedImage,
    #[error("Empty image data")]
    EmptyImage,
    #[error("Malformed data URI: {0}")]
    MalformedDataUri(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
