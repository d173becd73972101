//! Binary morphology regression test
//!
//! Exercises dilation, erosion, opening and closing on synthetic
//! buffers and checks the standard morphological inequalities.
//!
//! Run with:
//! ```
//! cargo test -p rasterlab-morph --test binmorph_reg
//! ```

use rasterlab_core::buffer::statistics::white_area;
use rasterlab_core::{PixelBuffer, Rgb};
use rasterlab_morph::{close, dilate, erode, open};

/// A blob with a one-pixel hole and a detached speck.
fn test_image() -> PixelBuffer {
    let mut buf = PixelBuffer::new_filled(20, 20, Rgb::BLACK);
    for y in 4..12 {
        for x in 4..12 {
            buf.set(x, y, Rgb::WHITE).unwrap();
        }
    }
    buf.set(7, 7, Rgb::BLACK).unwrap();
    buf.set(16, 16, Rgb::WHITE).unwrap();
    buf
}

#[test]
fn binmorph_reg() {
    let pixs = test_image();
    let orig_count = white_area(&pixs);

    for radius in 1..=3 {
        let dilated = dilate(&pixs, radius);
        assert!(
            white_area(&dilated) >= orig_count,
            "dilation decreased foreground at radius {radius}"
        );

        let eroded = erode(&pixs, radius);
        assert!(
            white_area(&eroded) <= orig_count,
            "erosion increased foreground at radius {radius}"
        );

        let opened = open(&pixs, radius);
        assert!(
            white_area(&opened) <= orig_count,
            "opening increased foreground at radius {radius}"
        );

        let closed = close(&pixs, radius);
        assert!(
            white_area(&closed) >= orig_count,
            "closing decreased foreground at radius {radius}"
        );
    }
}

#[test]
fn opening_removes_speck() {
    let pixs = test_image();
    let opened = open(&pixs, 1);
    assert!(!opened.is_white(16, 16));
    // The blob interior survives.
    assert!(opened.is_white(8, 8));
}

#[test]
fn closing_fills_hole() {
    let pixs = test_image();
    let closed = close(&pixs, 1);
    assert!(closed.is_white(7, 7));
}

#[test]
fn radius_zero_is_identity() {
    let pixs = test_image();
    assert_eq!(dilate(&pixs, 0), pixs);
    assert_eq!(erode(&pixs, 0), pixs);
}
