//! Error types for imgproc-transform

use thiserror::Error;

/// Errors that can occur during geometric and channel transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgproc_core::Error),

    /// The transform would produce an image with no pixels, or one too
    /// large to address
    #[error("{op}: output size {width}x{height} is not a valid image")]
    EmptyOutput {
        op: &'static str,
        width: u64,
        height: u64,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
