//! Color channel rotation
//!
//! Cycles the color channels of every pixel: the new red is the old blue,
//! the new green the old red and the new blue the old green. Alpha is
//! untouched, so applying the rotation three times is the identity.

use crate::TransformResult;
use imgproc_core::{Image, ImageMut, color};

/// Rotate the color channels of one pixel: `0xAABBCCDD` -> `0xCCAABBDD`.
#[inline]
pub fn rotate_pixel(pixel: u32) -> u32 {
    let (r, g, b, a) = color::extract_rgba(pixel);
    color::pack(b, r, g, a)
}

/// Rotate the color channels of `src` into a same-sized destination.
///
/// # Errors
///
/// Returns a dimension-mismatch error if `dst` is not the size of `src`.
pub fn color_rot_into(src: &Image, dst: &mut ImageMut) -> TransformResult<()> {
    dst.expect_dimensions(src.width(), src.height())?;
    dst.fill_with(|row, col| rotate_pixel(src.get_pixel_unchecked(row, col)));
    Ok(())
}

/// Rotate the color channels of every pixel.
pub fn color_rot(src: &Image) -> TransformResult<Image> {
    let mut dst = ImageMut::new(src.width(), src.height())?;
    color_rot_into(src, &mut dst)?;
    Ok(dst.into())
}
