//! Error types for the fractal generators.

use thiserror::Error;

/// All generator failures are precondition violations; there is no I/O and
/// no partial-failure mode, so a bad argument is reported immediately and
/// never clamped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FractalError {
    #[error("order must be at least 1, got {0}")]
    InvalidOrder(u32),

    #[error("size must be positive, got {0}")]
    InvalidSize(f64),

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("malformed hex color {0:?}")]
    MalformedHexColor(String),

    #[error("palette must not be empty")]
    EmptyPalette,
}
