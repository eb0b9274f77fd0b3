//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// The fixture could not be turned into a valid image
    #[error("core error: {0}")]
    Core(#[from] imgproc_core::Error),

    /// A fixture pixel was placed outside the image
    #[error("fixture pixel ({row}, {col}) outside {width}x{height} image")]
    FixtureOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
