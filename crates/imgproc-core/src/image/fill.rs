//! Whole-image fill from a per-pixel function
//!
//! Every destination pixel of a transform depends only on the (immutable)
//! source image, so rows can be filled independently. With the `parallel`
//! feature the rows are distributed over the rayon thread pool; each worker
//! owns a disjoint row slice of the destination.

use super::ImageMut;

impl ImageMut {
    /// Overwrite every pixel with `f(row, col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgproc_core::{Image, ImageMut};
    ///
    /// let mut image = ImageMut::new(3, 2).unwrap();
    /// image.fill_with(|row, col| row * 10 + col);
    /// let image: Image = image.into();
    /// assert_eq!(image.data(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(u32, u32) -> u32 + Sync,
    {
        let width = self.width() as usize;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.data_mut()
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, line)| fill_row(line, row as u32, &f));
        }

        #[cfg(not(feature = "parallel"))]
        for (row, line) in self.data_mut().chunks_mut(width).enumerate() {
            fill_row(line, row as u32, &f);
        }
    }
}

#[inline]
fn fill_row<F>(line: &mut [u32], row: u32, f: &F)
where
    F: Fn(u32, u32) -> u32,
{
    for (col, pixel) in line.iter_mut().enumerate() {
        *pixel = f(row, col as u32);
    }
}
