//! Blur regression test
//!
//! Tests the box blur against a direct computation that visits every
//! candidate position and skips the ones outside the image, at several
//! distances including 0 and one larger than the image.

use imgproc_core::color::{self, Channel};
use imgproc_core::{Image, ImageMut};
use imgproc_filter::{blur, blur_into, blur_pixel};
use imgproc_test::fixtures::{self, SMOL_HEIGHT, SMOL_WIDTH};
use imgproc_test::{ImageBuilder, RegParams};

/// Blurred `smol()` pixel, summing over the full unclipped window.
fn expected_pixel(row: u32, col: u32, dist: u32) -> u32 {
    let (row, col, dist) = (row as i64, col as i64, dist as i64);
    let mut sums = [0u64; 4];
    let mut n = 0u64;
    for r in row - dist..=row + dist {
        for c in col - dist..=col + dist {
            if r < 0 || c < 0 || r >= SMOL_HEIGHT as i64 || c >= SMOL_WIDTH as i64 {
                continue;
            }
            let p = fixtures::smol_pixel(r as u32, c as u32);
            for (sum, which) in sums.iter_mut().zip(Channel::ALL) {
                *sum += color::channel(p, which) as u64;
            }
            n += 1;
        }
    }
    let [r, g, b, a] = sums.map(|s| (s / n) as u8);
    color::pack(r, g, b, a)
}

#[test]
fn blur_reg_identity() {
    let mut rp = RegParams::new("blur_identity");

    let src = fixtures::smol();
    let out = blur(&src, 0).expect("blur 0");
    rp.compare_images(&src, &out);

    assert!(rp.cleanup(), "blur_identity regression test failed");
}

#[test]
fn blur_reg_corner() {
    let mut rp = RegParams::new("blur_corner");

    // Only the 2x2 top-left block is nonzero; with blur_dist 1 the corner
    // averages exactly those four pixels.
    let src = ImageBuilder::new(5, 5)
        .rows(0, 0, &[&[0x04080C10, 0x08080808], &[0x0C0C0C0C, 0x10101010]])
        .build()
        .unwrap();
    // r: (4+8+12+16)/4 = 10, g: (8+8+12+16)/4 = 11,
    // b: (12+8+12+16)/4 = 12, a: (16+8+12+16)/4 = 13
    rp.compare_pixels(0x0A0B0C0D, blur_pixel(&src, 0, 0, 1));
    // (1, 1) sees nine pixels, four of them nonzero: 40/9, 44/9, 48/9, 52/9
    rp.compare_pixels(0x04040505, blur_pixel(&src, 1, 1, 1));

    assert!(rp.cleanup(), "blur_corner regression test failed");
}

#[test]
fn blur_reg_distances() {
    let mut rp = RegParams::new("blur_distances");

    let src = fixtures::smol();
    for dist in [1, 2, 3, 7, 30] {
        eprintln!("  blur_dist = {}", dist);
        let expected = ImageBuilder::new(SMOL_WIDTH, SMOL_HEIGHT)
            .with_fn(move |row, col| expected_pixel(row, col, dist))
            .build()
            .expect("build expected");
        let out = blur(&src, dist).expect("blur");
        rp.compare_images(&expected, &out);
    }

    // Caller-allocated destination gives the same result.
    let mut dst = ImageMut::new(SMOL_WIDTH, SMOL_HEIGHT).unwrap();
    blur_into(&src, &mut dst, 2).expect("blur_into");
    let out = blur(&src, 2).unwrap();
    rp.compare_images(&out, &Image::from(dst));

    // A destination of another size is rejected.
    let mut wrong = ImageMut::new(SMOL_WIDTH, SMOL_HEIGHT + 1).unwrap();
    rp.compare_values(
        1.0,
        blur_into(&src, &mut wrong, 2).is_err() as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "blur_distances regression test failed");
}
