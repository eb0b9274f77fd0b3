//! Error types for imgproc-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgproc_core::Error),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
