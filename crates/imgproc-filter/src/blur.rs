//! Box blur
//!
//! Each output pixel is the truncated per-channel mean of the source pixels
//! in the `(2 * blur_dist + 1)`-wide square centered on it. Positions that
//! fall outside the image are left out of the mean rather than padded, so
//! corner and edge pixels average fewer samples than interior ones.
//! Alpha is averaged the same way as the color channels.

use crate::FilterResult;
use imgproc_core::{Image, ImageMut, PixelAverager};
use std::ops::RangeInclusive;

/// Rows or columns of the blur window around `center`, clipped to `0..len`.
///
/// Clipping only skips positions the averager would reject anyway.
fn window(center: u32, blur_dist: u32, len: u32) -> RangeInclusive<i64> {
    let center = center as i64;
    let dist = blur_dist as i64;
    (center - dist).max(0)..=(center + dist).min(len as i64 - 1)
}

/// Blurred pixel at `(row, col)`.
///
/// A `blur_dist` of 0 returns the source pixel unchanged.
pub fn blur_pixel(src: &Image, row: u32, col: u32, blur_dist: u32) -> u32 {
    let rows = window(row, blur_dist, src.height());
    let cols = window(col, blur_dist, src.width());
    let coords = rows.flat_map(|r| cols.clone().map(move |c| (r, c)));
    PixelAverager::from_coords(src, coords).average()
}

/// Blur `src` into a same-sized destination.
///
/// # Errors
///
/// Returns a dimension-mismatch error if `dst` is not the size of `src`.
pub fn blur_into(src: &Image, dst: &mut ImageMut, blur_dist: u32) -> FilterResult<()> {
    dst.expect_dimensions(src.width(), src.height())?;
    dst.fill_with(|row, col| blur_pixel(src, row, col, blur_dist));
    Ok(())
}

/// Box-blur an image.
///
/// # Arguments
///
/// * `src` - Input image
/// * `blur_dist` - Half-width of the square window; 0 copies the image
pub fn blur(src: &Image, blur_dist: u32) -> FilterResult<Image> {
    let mut dst = ImageMut::new(src.width(), src.height())?;
    blur_into(src, &mut dst, blur_dist)?;
    Ok(dst.into())
}
