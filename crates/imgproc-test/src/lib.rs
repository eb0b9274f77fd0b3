//! imgproc-test - Regression test framework for imgproc
//!
//! This crate provides:
//!
//! - [`RegParams`]: a numbered sequence of checks that keeps going after
//!   the first failure and reports every mismatch at the end
//! - [`ImageBuilder`] and the [`fixtures`] factories: every test builds
//!   its own images, so no state is shared between tests
//!
//! # Usage
//!
//! ```
//! use imgproc_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("doc");
//! let smol = fixtures::smol();
//! rp.compare_values(21.0, smol.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod builder;
mod error;
pub mod fixtures;
mod params;

pub use builder::ImageBuilder;
pub use error::{TestError, TestResult};
pub use params::RegParams;
