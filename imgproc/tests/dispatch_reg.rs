//! Transformation dispatch regression test
//!
//! Runs every [`Transformation`] through `apply` and `apply_into` and
//! compares the results with the engine functions called directly, then
//! runs the 4x2 marker squash end to end through a PNG file.

use imgproc::io::{ImageFormat, read_image, write_image};
use imgproc::{Image, ImageMut, Transformation};
use imgproc_test::fixtures::{self, marker};
use imgproc_test::{ImageBuilder, RegParams};
use std::num::NonZeroU32;

fn nz(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap()
}

#[test]
fn dispatch_reg_matches_engine() {
    let mut rp = RegParams::new("dispatch_engine");

    let src = fixtures::smol();
    let cases = [
        (
            Transformation::Squash {
                xfac: nz(3),
                yfac: nz(2),
            },
            imgproc::transform::squash(&src, 3, 2).unwrap(),
        ),
        (
            Transformation::ColorRotate,
            imgproc::transform::color_rot(&src).unwrap(),
        ),
        (
            Transformation::Blur { blur_dist: 2 },
            imgproc::filter::blur(&src, 2).unwrap(),
        ),
        (
            Transformation::Expand,
            imgproc::transform::expand(&src).unwrap(),
        ),
    ];

    for (op, expected) in cases {
        eprintln!("  {}", op);
        let out = op.apply(&src).expect("apply");
        rp.compare_images(&expected, &out);

        let (w, h) = op.output_dimensions(&src).expect("output_dimensions");
        let mut dst = ImageMut::new(w, h).unwrap();
        op.apply_into(&src, &mut dst).expect("apply_into");
        rp.compare_images(&expected, &Image::from(dst));
    }

    assert!(rp.cleanup(), "dispatch_engine regression test failed");
}

#[test]
fn dispatch_reg_markers_end_to_end() {
    let mut rp = RegParams::new("dispatch_markers");

    let dir = std::env::temp_dir();
    let input = dir.join(format!("imgproc_dispatch_{}_in.png", std::process::id()));
    let output = dir.join(format!("imgproc_dispatch_{}_out.png", std::process::id()));

    write_image(&fixtures::markers(), &input, ImageFormat::Png).expect("write input");

    let src = read_image(&input).expect("read input");
    let op = Transformation::Squash {
        xfac: nz(4),
        yfac: nz(2),
    };
    let out = op.apply(&src).expect("squash");
    write_image(&out, &output, ImageFormat::Png).expect("write output");

    let expected = ImageBuilder::new(2, 2)
        .rows(0, 0, &[&[marker::X, marker::Y], &[marker::Z, marker::W]])
        .build()
        .unwrap();
    rp.compare_images(&expected, &read_image(&output).expect("read output"));

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert!(rp.cleanup(), "dispatch_markers regression test failed");
}
