//! imgproc - RGBA image transformations
//!
//! # Overview
//!
//! Four whole-image operations on packed `0xRRGGBBAA` rasters:
//!
//! - Squash: shrink by integer factors, keeping the top-left pixel of each cell
//! - Color rotation: cycle the red, green and blue channels
//! - Blur: square box blur that averages only in-bounds neighbors
//! - Expand: double both dimensions, averaging between source pixels
//!
//! plus PNG I/O and the [`Transformation`] enum that selects an operation
//! at runtime.
//!
//! # Example
//!
//! ```
//! use imgproc::{Image, Transformation};
//!
//! let src = Image::from_pixels(2, 1, vec![0xAABBCCDD, 0x11223344]).unwrap();
//! let out = Transformation::ColorRotate.apply(&src).unwrap();
//! assert_eq!(out.data(), &[0xCCAABBDD, 0x33112244]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imgproc_core::*;

// Re-export operation crates as modules to avoid name conflicts
pub use imgproc_filter as filter;
pub use imgproc_io as io;
pub use imgproc_transform as transform;

mod dispatch;

pub use dispatch::{Error, Result, Transformation};
