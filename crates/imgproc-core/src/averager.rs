//! Per-channel pixel averaging
//!
//! [`PixelAverager`] accumulates the four channel sums of any number of
//! pixels and reports the truncated integer mean of each channel. It is the
//! shared primitive behind neighborhood operations: callers enumerate
//! candidate coordinates, possibly off the edge of the image, and
//! [`PixelAverager::ingest_from_image`] drops the ones that are out of
//! bounds.

use crate::Image;
use crate::color::{self, Channel};

/// Running sums of the red, green, blue and alpha channels.
///
/// A fresh averager is created for each output pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelAverager {
    r: u64,
    g: u64,
    b: u64,
    a: u64,
    count: u64,
}

impl PixelAverager {
    /// Create an empty averager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pixel to the running sums.
    #[inline]
    pub fn ingest(&mut self, pixel: u32) {
        self.r += color::red(pixel) as u64;
        self.g += color::green(pixel) as u64;
        self.b += color::blue(pixel) as u64;
        self.a += color::alpha(pixel) as u64;
        self.count += 1;
    }

    /// Add the pixel at `(row, col)` of `image`, or do nothing if the
    /// coordinate is outside the image.
    #[inline]
    pub fn ingest_from_image(&mut self, image: &Image, row: i64, col: i64) {
        if let Some(pixel) = image.get_pixel(row, col) {
            self.ingest(pixel);
        }
    }

    /// Average the in-bounds pixels of `image` at `coords`.
    ///
    /// Coordinates outside the image are skipped, so a neighborhood that
    /// hangs off an edge averages only the part that overlaps the image.
    pub fn from_coords<I>(image: &Image, coords: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut averager = PixelAverager::new();
        for (row, col) in coords {
            averager.ingest_from_image(image, row, col);
        }
        averager
    }

    /// Number of pixels ingested so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running sum of one channel.
    #[inline]
    pub fn sum(&self, which: Channel) -> u64 {
        match which {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Truncated mean of every channel, packed into one pixel.
    ///
    /// Each channel is `sum / count` with integer division (never rounded).
    /// An averager that has seen no pixels yields `0x00000000`.
    pub fn average(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        // A mean of u8 values always fits back into a u8.
        let mean = |sum: u64| (sum / self.count) as u8;
        color::pack(mean(self.r), mean(self.g), mean(self.b), mean(self.a))
    }
}

impl Extend<u32> for PixelAverager {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, pixels: I) {
        for pixel in pixels {
            self.ingest(pixel);
        }
    }
}

impl FromIterator<u32> for PixelAverager {
    fn from_iter<I: IntoIterator<Item = u32>>(pixels: I) -> Self {
        let mut averager = PixelAverager::new();
        averager.extend(pixels);
        averager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let pa = PixelAverager::new();
        for which in Channel::ALL {
            assert_eq!(pa.sum(which), 0);
        }
        assert_eq!(pa.count(), 0);
    }

    #[test]
    fn test_ingest() {
        let mut pa = PixelAverager::new();
        pa.ingest(0x8888CCCC);
        assert_eq!(pa.sum(Channel::Red), 0x88);
        assert_eq!(pa.sum(Channel::Green), 0x88);
        assert_eq!(pa.sum(Channel::Blue), 0xCC);
        assert_eq!(pa.sum(Channel::Alpha), 0xCC);
        assert_eq!(pa.count(), 1);
    }

    #[test]
    fn test_ingest_from_image_skips_out_of_bounds() {
        let image = Image::from_pixels(2, 2, vec![0x574439FF, 0, 0, 0x3B2E23FF]).unwrap();
        let mut pa = PixelAverager::new();

        pa.ingest_from_image(&image, 0, 0);
        assert_eq!(pa.count(), 1);
        pa.ingest_from_image(&image, 1, 1);
        assert_eq!(pa.sum(Channel::Red), 0x57 + 0x3B);
        assert_eq!(pa.sum(Channel::Green), 0x44 + 0x2E);
        assert_eq!(pa.sum(Channel::Blue), 0x39 + 0x23);
        assert_eq!(pa.sum(Channel::Alpha), 0xFF + 0xFF);
        assert_eq!(pa.count(), 2);

        let before = pa;
        pa.ingest_from_image(&image, -1, 0);
        pa.ingest_from_image(&image, 0, 2);
        pa.ingest_from_image(&image, 2, 1);
        assert_eq!(pa, before);
    }

    #[test]
    fn test_from_coords_counts_only_in_bounds() {
        let image = Image::from_pixels(2, 1, vec![0x10203040, 0x30405060]).unwrap();
        let coords = [(0, -1), (0, 0), (0, 1), (0, 2), (1, 0)];
        let pa = PixelAverager::from_coords(&image, coords);
        assert_eq!(pa.count(), 2);
        assert_eq!(pa.average(), 0x20304050);
    }

    #[test]
    fn test_average_truncates() {
        let pa: PixelAverager = [0x690E6CFF, 0x87E61DBF, 0x24516099].into_iter().collect();
        assert_eq!(pa.average(), 0x5C6C4DC7);
    }

    #[test]
    fn test_average_is_floor_not_round() {
        // Channel sums of 5 over 2 pixels: floor(2.5) = 2
        let pa: PixelAverager = [0x02020202, 0x03030303].into_iter().collect();
        assert_eq!(pa.average(), 0x02020202);

        // 255 + 254 = 509, 509 / 2 = 254
        let pa: PixelAverager = [0xFFFFFFFF, 0xFEFEFEFE].into_iter().collect();
        assert_eq!(pa.average(), 0xFEFEFEFE);
    }

    #[test]
    fn test_average_single_pixel_is_identity() {
        let pa: PixelAverager = std::iter::once(0xAABBCCDD).collect();
        assert_eq!(pa.average(), 0xAABBCCDD);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(PixelAverager::new().average(), 0);
    }
}
