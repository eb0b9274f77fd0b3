//! Fresh-per-test image construction

use crate::error::{TestError, TestResult};
use imgproc_core::{Image, ImageMut};

type PixelFn = Box<dyn Fn(u32, u32) -> u32 + Sync>;

/// Builds a test image from a base pattern plus individual overrides.
///
/// ```
/// use imgproc_test::ImageBuilder;
///
/// let image = ImageBuilder::new(3, 2)
///     .with_fn(|row, col| row * 3 + col)
///     .pixel(1, 1, 0xFF)
///     .build()
///     .unwrap();
/// assert_eq!(image.data(), &[0, 1, 2, 3, 0xFF, 5]);
/// ```
pub struct ImageBuilder {
    width: u32,
    height: u32,
    base: Option<PixelFn>,
    overrides: Vec<(u32, u32, u32)>,
}

impl ImageBuilder {
    /// Start an all-zero `width` x `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            base: None,
            overrides: Vec::new(),
        }
    }

    /// Fill every pixel with `f(row, col)`.
    pub fn with_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, u32) -> u32 + Sync + 'static,
    {
        self.base = Some(Box::new(f));
        self
    }

    /// Fill every pixel with the same value.
    pub fn uniform(self, pixel: u32) -> Self {
        self.with_fn(move |_, _| pixel)
    }

    /// Override the pixel at `(row, col)` after the base pattern is applied.
    pub fn pixel(mut self, row: u32, col: u32, val: u32) -> Self {
        self.overrides.push((row, col, val));
        self
    }

    /// Override a whole row-major block starting at `(row, col)`.
    pub fn rows(mut self, row: u32, col: u32, rows: &[&[u32]]) -> Self {
        for (dr, line) in rows.iter().enumerate() {
            for (dc, &val) in line.iter().enumerate() {
                self.overrides.push((row + dr as u32, col + dc as u32, val));
            }
        }
        self
    }

    /// Produce the image.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are invalid or an override lies outside
    /// the image.
    pub fn build(self) -> TestResult<Image> {
        let mut image = ImageMut::new(self.width, self.height)?;
        if let Some(f) = &self.base {
            image.fill_with(|row, col| f(row, col));
        }
        for (row, col, val) in self.overrides {
            if !image.in_bounds(row as i64, col as i64) {
                return Err(TestError::FixtureOutOfBounds {
                    row,
                    col,
                    width: self.width,
                    height: self.height,
                });
            }
            image.set_pixel_unchecked(row, col, val);
        }
        Ok(image.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_zero() {
        let image = ImageBuilder::new(2, 3).build().unwrap();
        assert_eq!(image.dimensions(), (2, 3));
        assert!(image.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_builder_rows_block() {
        let image = ImageBuilder::new(3, 3)
            .uniform(7)
            .rows(1, 1, &[&[1, 2], &[3, 4]])
            .build()
            .unwrap();
        assert_eq!(image.data(), &[7, 7, 7, 7, 1, 2, 7, 3, 4]);
    }

    #[test]
    fn test_builder_rejects_out_of_bounds_override() {
        assert!(matches!(
            ImageBuilder::new(2, 2).pixel(2, 0, 1).build(),
            Err(TestError::FixtureOutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(matches!(
            ImageBuilder::new(0, 2).build(),
            Err(TestError::Core(_))
        ));
    }
}
