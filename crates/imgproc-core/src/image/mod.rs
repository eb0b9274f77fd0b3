//! Image - The main RGBA raster container
//!
//! # Pixel layout
//!
//! - One packed `0xRRGGBBAA` word per pixel
//! - Rows are stored consecutively (row-major), with no padding, so the
//!   pixel at `(row, col)` lives at `row * width + col`
//! - The buffer length always equals `width * height`
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod fill;

pub use access::{in_bounds, index};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGBA pixels, row-major
    data: Vec<u32>,
}

impl ImageData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = pixel_count(width, height)?;
        Ok(ImageData {
            width,
            height,
            data: vec![0u32; len],
        })
    }
}

/// Number of pixels in a `width` x `height` buffer.
///
/// Fails instead of wrapping when the product does not fit in `usize`.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Image - RGBA raster container
///
/// `Image` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use imgproc_core::Image;
///
/// let image = Image::new(640, 480).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// assert_eq!(image.data().len(), 640 * 480);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with the specified dimensions.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::zeroed(width, height)?),
        })
    }

    /// Create an image from an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferLength`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data: pixels,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_data(&self, row: u32) -> &[u32] {
        let start = row as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Create a new all-zero image with the same dimensions.
    pub fn create_template(&self) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![0u32; self.inner.data.len()],
            }),
        }
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Write image metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Image Info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, pixels = {}",
            self.inner.width,
            self.inner.height,
            self.inner.data.len()
        )?;
        Ok(())
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns an [`ImageMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }
}

impl Eq for Image {}

/// Mutable image
///
/// Allows modification of image data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new, exclusively owned all-zero image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, row: u32) -> &mut [u32] {
        let start = row as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Fail with [`Error::DimensionMismatch`] unless this image is
    /// `width` x `height`.
    pub fn expect_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if self.dimensions() != (width, height) {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: self.dimensions(),
            });
        }
        Ok(())
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}
