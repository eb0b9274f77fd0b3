//! Transformation dispatch
//!
//! [`Transformation`] names one engine operation together with its
//! parameters, so callers (the command-line tool in particular) can pick an
//! operation at runtime and run it without matching on names themselves.

use imgproc_core::{Image, ImageMut};
use imgproc_filter::FilterError;
use imgproc_io::IoError;
use imgproc_transform::TransformError;
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

/// Errors from any imgproc operation
#[derive(Debug, Error)]
pub enum Error {
    /// Core container error
    #[error(transparent)]
    Core(#[from] imgproc_core::Error),

    /// Squash, expand or color rotation failed
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Blur failed
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Reading or writing an image failed
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;

/// A pixel transformation and its parameters
///
/// # Examples
///
/// ```
/// use imgproc::{Image, Transformation};
///
/// let src = Image::new(6, 4).unwrap();
/// let op = Transformation::Expand;
/// assert_eq!(op.output_dimensions(&src).unwrap(), (12, 8));
/// assert_eq!(op.apply(&src).unwrap().dimensions(), (12, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// Keep every `xfac`-th column of every `yfac`-th row
    Squash { xfac: NonZeroU32, yfac: NonZeroU32 },
    /// Cycle the color channels (R <- B, G <- R, B <- G)
    ColorRotate,
    /// Box blur with a `(2 * blur_dist + 1)`-wide square window
    Blur { blur_dist: u32 },
    /// Double both dimensions, averaging between source pixels
    Expand,
}

impl Transformation {
    /// Command-line name of the transformation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Squash { .. } => "squash",
            Self::ColorRotate => "color_rot",
            Self::Blur { .. } => "blur",
            Self::Expand => "expand",
        }
    }

    /// Size of the image this transformation produces from `src`.
    ///
    /// # Errors
    ///
    /// Fails when the output would have no pixels (a squash factor larger
    /// than the source) or would not fit in `u32` (expanding a huge image).
    pub fn output_dimensions(&self, src: &Image) -> Result<(u32, u32)> {
        let dims = match *self {
            Self::Squash { xfac, yfac } => {
                imgproc_transform::squash_dimensions(src, xfac.get(), yfac.get())?
            }
            Self::ColorRotate | Self::Blur { .. } => src.dimensions(),
            Self::Expand => imgproc_transform::expand_dimensions(src)?,
        };
        Ok(dims)
    }

    /// Run the transformation into a caller-allocated destination.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error unless `dst` has the size given
    /// by [`Transformation::output_dimensions`].
    pub fn apply_into(&self, src: &Image, dst: &mut ImageMut) -> Result<()> {
        log::debug!(
            "{} {}x{} -> {}x{}",
            self,
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        );
        match *self {
            Self::Squash { xfac, yfac } => {
                imgproc_transform::squash_into(src, dst, xfac.get(), yfac.get())?
            }
            Self::ColorRotate => imgproc_transform::color_rot_into(src, dst)?,
            Self::Blur { blur_dist } => imgproc_filter::blur_into(src, dst, blur_dist)?,
            Self::Expand => imgproc_transform::expand_into(src, dst)?,
        }
        Ok(())
    }

    /// Run the transformation, allocating the destination.
    pub fn apply(&self, src: &Image) -> Result<Image> {
        let (width, height) = self.output_dimensions(src)?;
        let mut dst = ImageMut::new(width, height)?;
        self.apply_into(src, &mut dst)?;
        Ok(dst.into())
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Squash { xfac, yfac } => write!(f, "squash({xfac}, {yfac})"),
            Self::Blur { blur_dist } => write!(f, "blur({blur_dist})"),
            _ => f.write_str(self.name()),
        }
    }
}
