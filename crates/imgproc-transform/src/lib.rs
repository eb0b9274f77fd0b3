//! imgproc-transform - Pixel-level transformations
//!
//! This crate provides:
//!
//! - Squash: integer-factor decimation by nearest sampling
//! - Expand: 2x upsampling that averages the in-bounds source neighbors
//! - Color rotation: the R <- B, G <- R, B <- G channel permutation
//!
//! Each operation comes as a per-pixel function, an `*_into` form that
//! fills a caller-allocated destination, and an allocating form.

pub mod channel;
mod error;
pub mod scale;

pub use channel::{color_rot, color_rot_into, rotate_pixel};
pub use error::{TransformError, TransformResult};
pub use scale::{
    expand, expand_dimensions, expand_into, expand_pixel, squash, squash_dimensions, squash_into,
    squash_pixel,
};
