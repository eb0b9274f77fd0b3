//! Test image factories
//!
//! Each call builds a new image, so tests never share fixture state.

use crate::ImageBuilder;
use imgproc_core::{Image, color};

/// Width of [`smol`].
pub const SMOL_WIDTH: u32 = 21;
/// Height of [`smol`].
pub const SMOL_HEIGHT: u32 = 15;

/// Pixel value of [`smol`] at `(row, col)`.
///
/// Every channel varies with position and alpha is not constant, so
/// transforms that mishandle any one channel show up in comparisons.
pub fn smol_pixel(row: u32, col: u32) -> u32 {
    let r = (row * 17 + col * 5) % 256;
    let g = (row * 3 + col * 11 + 40) % 256;
    let b = (row * col * 7 + 90) % 256;
    let a = if (row + col) % 5 == 0 { 0xC0 } else { 0xFF };
    color::pack(r as u8, g as u8, b as u8, a)
}

/// A small 21x15 image with a distinct value at (nearly) every pixel.
pub fn smol() -> Image {
    ImageBuilder::new(SMOL_WIDTH, SMOL_HEIGHT)
        .with_fn(smol_pixel)
        .build()
        .expect("smol fixture dimensions are valid")
}

/// Marker pixels of [`markers`].
pub mod marker {
    pub const X: u32 = 0xFF0000FF;
    pub const Y: u32 = 0x00FF00FF;
    pub const Z: u32 = 0x0000FFFF;
    pub const W: u32 = 0xFFFF0080;
    pub const A: u32 = 0x10101010;
    pub const B: u32 = 0x20202020;
    pub const C: u32 = 0x30303030;
    pub const D: u32 = 0x40404040;
}

/// An 8x4 image in which the pixels sampled by a 4x2 squash are unique:
///
/// ```text
/// XAAAYBBB
/// AAAABBBB
/// ZCCCWDDD
/// CCCCDDDD
/// ```
pub fn markers() -> Image {
    use marker::*;
    ImageBuilder::new(8, 4)
        .rows(
            0,
            0,
            &[
                &[X, A, A, A, Y, B, B, B],
                &[A, A, A, A, B, B, B, B],
                &[Z, C, C, C, W, D, D, D],
                &[C, C, C, C, D, D, D, D],
            ],
        )
        .build()
        .expect("marker fixture dimensions are valid")
}

/// An image whose pixels are all `pixel`.
pub fn uniform(width: u32, height: u32, pixel: u32) -> Image {
    ImageBuilder::new(width, height)
        .uniform(pixel)
        .build()
        .expect("uniform fixture dimensions must be non-zero")
}
