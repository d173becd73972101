//! Connected component regression test
//!
//! Labels a synthetic scene of blobs with varied shapes and checks
//! the component count, areas and bounding boxes.
//!
//! Run with:
//! ```
//! cargo test -p rasterlab-region --test conncomp_reg
//! ```

use rasterlab_core::{PixelBuffer, Point, Rgb, Size};
use rasterlab_region::label_components;

fn fill_rect(buf: &mut PixelBuffer, x0: u32, y0: u32, w: u32, h: u32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            buf.set(x, y, Rgb::WHITE).unwrap();
        }
    }
}

#[test]
fn conncomp_reg() {
    let mut pixs = PixelBuffer::new_filled(40, 30, Rgb::BLACK);

    // A solid square, a thin horizontal bar, a diagonal staircase and
    // a lone pixel.
    fill_rect(&mut pixs, 2, 2, 6, 6);
    fill_rect(&mut pixs, 15, 4, 12, 1);
    for i in 0..5 {
        pixs.set(5 + i, 15 + i, Rgb::WHITE).unwrap();
    }
    pixs.set(35, 25, Rgb::WHITE).unwrap();

    let labels = label_components(&pixs).unwrap();
    assert_eq!(labels.len(), 5);

    // Sentinel
    assert_eq!(labels[0].area, 0);
    assert_eq!(labels[0].centroid, Point::ORIGIN);

    // Square
    assert_eq!(labels[1].area, 36);
    assert_eq!(labels[1].pos, Point::new(2, 2));
    assert_eq!(labels[1].pos_dr, Point::new(7, 7));
    assert_eq!(labels[1].size, Size::new(6, 6));
    assert_eq!(labels[1].centroid, Point::new(4, 4));

    // Bar
    assert_eq!(labels[2].area, 12);
    assert_eq!(labels[2].size, Size::new(12, 1));

    // Staircase: diagonal adjacency connects the steps
    assert_eq!(labels[3].area, 5);
    assert_eq!(labels[3].pos, Point::new(5, 15));
    assert_eq!(labels[3].pos_dr, Point::new(9, 19));

    // Lone pixel
    assert_eq!(labels[4].area, 1);
    assert_eq!(labels[4].centroid, Point::new(35, 25));

    // Areas partition the foreground.
    let total: u32 = labels.iter().map(|l| l.area).sum();
    assert_eq!(total, 36 + 12 + 5 + 1);
}

#[test]
fn masks_match_source_dimensions() {
    let mut pixs = PixelBuffer::new_filled(12, 7, Rgb::BLACK);
    pixs.set(6, 3, Rgb::WHITE).unwrap();

    let labels = label_components(&pixs).unwrap();
    for label in &labels {
        assert_eq!(label.mask.width(), 12);
        assert_eq!(label.mask.height(), 7);
    }
}
