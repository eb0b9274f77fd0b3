//! Integer-factor resizing
//!
//! - [`squash`]: shrink by independent horizontal/vertical factors, keeping
//!   the top-left pixel of every `xfac` x `yfac` cell (no averaging)
//! - [`expand`]: double both dimensions; output pixels between source
//!   pixels are the truncated mean of their in-bounds source neighbors
//!
//! Both output sizes are fixed by the source size and the factors, so the
//! `*_dimensions` helpers can size a destination before any pixel work.

use crate::{TransformError, TransformResult};
use imgproc_core::{Image, ImageMut, PixelAverager};

/// Output size of [`squash`]: `(width / xfac, height / yfac)`, rounded down.
///
/// # Errors
///
/// Returns [`TransformError::EmptyOutput`] when a factor exceeds the
/// matching source dimension.
///
/// # Panics
///
/// Panics if `xfac` or `yfac` is zero. Factors are validated by the caller
/// before a transform is requested.
pub fn squash_dimensions(src: &Image, xfac: u32, yfac: u32) -> TransformResult<(u32, u32)> {
    assert!(
        xfac >= 1 && yfac >= 1,
        "squash factors must be positive, got xfac={xfac} yfac={yfac}"
    );
    let width = src.width() / xfac;
    let height = src.height() / yfac;
    if width == 0 || height == 0 {
        return Err(TransformError::EmptyOutput {
            op: "squash",
            width: width as u64,
            height: height as u64,
        });
    }
    Ok((width, height))
}

/// Squashed pixel at output `(row, col)`: the source pixel at
/// `(row * yfac, col * xfac)`.
///
/// `(row, col)` must lie inside the output size given by
/// [`squash_dimensions`], which keeps the sample inside the source.
#[inline]
pub fn squash_pixel(src: &Image, row: u32, col: u32, xfac: u32, yfac: u32) -> u32 {
    src.get_pixel_unchecked(row * yfac, col * xfac)
}

/// Squash `src` into a caller-allocated destination.
///
/// # Errors
///
/// Returns a dimension-mismatch error if `dst` is not the size reported
/// by [`squash_dimensions`].
pub fn squash_into(src: &Image, dst: &mut ImageMut, xfac: u32, yfac: u32) -> TransformResult<()> {
    let (width, height) = squash_dimensions(src, xfac, yfac)?;
    dst.expect_dimensions(width, height)?;
    dst.fill_with(|row, col| squash_pixel(src, row, col, xfac, yfac));
    Ok(())
}

/// Shrink an image by sampling every `xfac`-th column of every `yfac`-th row.
///
/// With `xfac = 4, yfac = 2` the 8x4 image
///
/// ```text
/// XAAAYBBB
/// AAAABBBB
/// ZCCCWDDD
/// CCCCDDDD
/// ```
///
/// becomes the 2x2 image
///
/// ```text
/// XY
/// ZW
/// ```
///
/// # Panics
///
/// Panics if `xfac` or `yfac` is zero.
pub fn squash(src: &Image, xfac: u32, yfac: u32) -> TransformResult<Image> {
    let (width, height) = squash_dimensions(src, xfac, yfac)?;
    let mut dst = ImageMut::new(width, height)?;
    squash_into(src, &mut dst, xfac, yfac)?;
    Ok(dst.into())
}

/// Output size of [`expand`]: both dimensions doubled.
///
/// # Errors
///
/// Returns [`TransformError::EmptyOutput`] if a doubled dimension does not
/// fit in `u32`.
pub fn expand_dimensions(src: &Image) -> TransformResult<(u32, u32)> {
    match (src.width().checked_mul(2), src.height().checked_mul(2)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(TransformError::EmptyOutput {
            op: "expand",
            width: src.width() as u64 * 2,
            height: src.height() as u64 * 2,
        }),
    }
}

/// Expanded pixel at output `(row, col)`.
///
/// With `r = row / 2` and `c = col / 2`, the parity of `row` and `col`
/// picks the source neighborhood:
///
/// | row  | col  | averaged source pixels                     |
/// |------|------|--------------------------------------------|
/// | even | even | `(r, c)` (an exact copy)                   |
/// | even | odd  | `(r, c)`, `(r, c+1)`                       |
/// | odd  | even | `(r, c)`, `(r+1, c)`                       |
/// | odd  | odd  | `(r, c)`, `(r, c+1)`, `(r+1, c)`, `(r+1, c+1)` |
///
/// Neighbors past the right or bottom edge are left out of the mean.
pub fn expand_pixel(src: &Image, row: u32, col: u32) -> u32 {
    let r = (row / 2) as i64;
    let c = (col / 2) as i64;
    let row_span = (row % 2) as i64;
    let col_span = (col % 2) as i64;

    let coords = (0..=row_span).flat_map(|dr| (0..=col_span).map(move |dc| (r + dr, c + dc)));
    PixelAverager::from_coords(src, coords).average()
}

/// Expand `src` into a caller-allocated destination.
///
/// # Errors
///
/// Returns a dimension-mismatch error if `dst` is not twice the size of
/// `src` in both directions.
pub fn expand_into(src: &Image, dst: &mut ImageMut) -> TransformResult<()> {
    let (width, height) = expand_dimensions(src)?;
    dst.expect_dimensions(width, height)?;
    dst.fill_with(|row, col| expand_pixel(src, row, col));
    Ok(())
}

/// Double the width and height of an image.
///
/// Even/even output pixels copy the source exactly; the others are the
/// truncated per-channel mean (alpha included) of the two or four source
/// pixels they sit between. See [`expand_pixel`].
pub fn expand(src: &Image) -> TransformResult<Image> {
    let (width, height) = expand_dimensions(src)?;
    let mut dst = ImageMut::new(width, height)?;
    expand_into(src, &mut dst)?;
    Ok(dst.into())
}
