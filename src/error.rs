//! Error types for penvg.

use crate::style::{StyleKey, TextAlign};
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while drawing.
#[derive(Debug, Error)]
pub enum Error {
    /// The transform cannot be inverted (zero scale, collapsed basis or non-finite coefficients).
    #[error("Singular transform: determinant {determinant}")]
    SingularTransform { determinant: f64 },

    /// `restore` was called without a matching `save`.
    #[error("Transform stack underflow: restore without save")]
    StackUnderflow,

    /// Multiline text supports only left, right and center alignment.
    #[error("Unsupported multiline text alignment: {0:?}")]
    UnsupportedAlignment(TextAlign),

    /// A regular polygon needs at least three vertices.
    #[error("Invalid vertex count: {0} (must be at least 3)")]
    InvalidVertexCount(usize),

    /// A style value could not be parsed for its key.
    #[error("Invalid value {value:?} for style {key}")]
    InvalidStyleValue { key: StyleKey, value: String },

    /// Error reported by the drawing surface.
    #[error(transparent)]
    Surface(#[from] anyhow::Error),

    /// Image decoding or encoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to fetch image bytes.
    #[cfg(feature = "fetch")]
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
