//! Pixel access and coordinate mapping
//!
//! Coordinates are `(row, col)` pairs. Speculative neighbor coordinates
//! (which may fall off the image) are signed `i64`; checked accessors
//! take them directly so callers never have to pre-clamp.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

/// Linear buffer index of `(row, col)` in an image `width` pixels wide.
///
/// Only meaningful for in-bounds coordinates; see [`in_bounds`].
#[inline]
pub fn index(width: u32, row: u32, col: u32) -> usize {
    row as usize * width as usize + col as usize
}

/// Whether `(row, col)` lies inside a `width` x `height` image.
#[inline]
pub fn in_bounds(width: u32, height: u32, row: i64, col: i64) -> bool {
    (0..height as i64).contains(&row) && (0..width as i64).contains(&col)
}

impl Image {
    /// Linear buffer index of `(row, col)` in this image.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        index(self.width(), row, col)
    }

    /// Whether `(row, col)` lies inside this image.
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        in_bounds(self.width(), self.height(), row, col)
    }

    /// Get the pixel at `(row, col)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, row: i64, col: i64) -> Option<u32> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.get_pixel_unchecked(row as u32, col as u32))
    }

    /// Get a pixel value without bounds checking against the image shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer. A column
    /// past the row end silently reads the next row.
    #[inline]
    pub fn get_pixel_unchecked(&self, row: u32, col: u32) -> u32 {
        self.data()[self.index(row, col)]
    }

    /// Get RGBA values at `(row, col)`.
    pub fn get_rgba(&self, row: i64, col: i64) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(row, col).map(crate::color::extract_rgba)
    }
}

impl ImageMut {
    /// Whether `(row, col)` lies inside this image.
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        in_bounds(self.width(), self.height(), row, col)
    }

    /// Get the pixel at `(row, col)`.
    pub fn get_pixel(&self, row: i64, col: i64) -> Option<u32> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.data()[index(self.width(), row as u32, col as u32)])
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, row: i64, col: i64, val: u32) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(row as u32, col as u32, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the image shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, row: u32, col: u32, val: u32) {
        let idx = index(self.width(), row, col);
        self.data_mut()[idx] = val;
    }

    /// Set an RGBA pixel at `(row, col)`.
    pub fn set_rgba(&mut self, row: i64, col: i64, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(row, col, crate::color::pack(r, g, b, a))
    }
}
