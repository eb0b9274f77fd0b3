//! Error types for imgproc-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// imgproc-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row/column outside the image
    #[error("coordinate out of bounds: ({row}, {col}) in {width}x{height} image")]
    OutOfBounds {
        row: i64,
        col: i64,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected} pixels, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for imgproc operations
pub type Result<T> = std::result::Result<T, Error>;
