//! Squash regression test
//!
//! Tests nearest-sample decimation: the identity factor, one-axis factors
//! against images built from the sampling rule, factors that do not divide
//! the source size, and the 8x4 marker image squashed by 4x2.

use imgproc_core::{Image, ImageMut};
use imgproc_test::fixtures::{self, SMOL_HEIGHT, SMOL_WIDTH, marker};
use imgproc_test::{ImageBuilder, RegParams};
use imgproc_transform::{squash, squash_dimensions, squash_into};

#[test]
fn squash_reg_identity() {
    let mut rp = RegParams::new("squash_identity");

    let src = fixtures::smol();
    let out = squash(&src, 1, 1).expect("squash 1x1");
    rp.compare_images(&src, &out);

    assert!(rp.cleanup(), "squash_identity regression test failed");
}

#[test]
fn squash_reg_factors() {
    let mut rp = RegParams::new("squash_factors");

    let src = fixtures::smol();
    for (xfac, yfac) in [(3, 1), (1, 3), (2, 2), (4, 4), (5, 7), (21, 15)] {
        eprintln!("  squash {}x{}", xfac, yfac);
        let out = squash(&src, xfac, yfac).expect("squash");
        let expected = ImageBuilder::new(SMOL_WIDTH / xfac, SMOL_HEIGHT / yfac)
            .with_fn(move |row, col| fixtures::smol_pixel(row * yfac, col * xfac))
            .build()
            .expect("build expected");
        rp.compare_images(&expected, &out);
    }

    // 21x15 by 4x4 drops the trailing column and the trailing three rows.
    rp.compare_values(5.0, squash(&src, 4, 4).unwrap().width() as f64, 0.0);
    rp.compare_values(3.0, squash(&src, 4, 4).unwrap().height() as f64, 0.0);

    // Larger than the source in either direction leaves nothing to sample.
    rp.compare_values(1.0, squash(&src, 22, 1).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, squash(&src, 1, 16).is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "squash_factors regression test failed");
}

#[test]
fn squash_reg_markers() {
    let mut rp = RegParams::new("squash_markers");

    let src = fixtures::markers();
    let out = squash(&src, 4, 2).expect("squash 4x2");
    let expected = ImageBuilder::new(2, 2)
        .rows(0, 0, &[&[marker::X, marker::Y], &[marker::Z, marker::W]])
        .build()
        .expect("build expected");
    rp.compare_images(&expected, &out);

    // The same through a caller-allocated destination.
    let (w, h) = squash_dimensions(&src, 4, 2).unwrap();
    let mut dst = ImageMut::new(w, h).unwrap();
    squash_into(&src, &mut dst, 4, 2).expect("squash_into");
    rp.compare_images(&expected, &Image::from(dst));

    assert!(rp.cleanup(), "squash_markers regression test failed");
}
