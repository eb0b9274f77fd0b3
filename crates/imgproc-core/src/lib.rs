//! imgproc Core - Basic data structures for RGBA image transformations
//!
//! This crate provides the building blocks shared by every transform:
//!
//! - [`Image`] / [`ImageMut`] - The RGBA raster container (immutable / mutable)
//! - [`color`] - Packing and unpacking of `0xRRGGBBAA` pixels
//! - [`index`] / [`in_bounds`] - Row/column to buffer-index mapping
//! - [`PixelAverager`] - Truncating per-channel mean of a set of pixels
//!
//! # Features
//!
//! - `parallel`: fill destination rows concurrently with rayon in
//!   [`ImageMut::fill_with`]

pub mod averager;
pub mod color;
pub mod error;
pub mod image;

pub use averager::PixelAverager;
pub use color::Channel;
pub use error::{Error, Result};
pub use image::{Image, ImageMut, in_bounds, index};
