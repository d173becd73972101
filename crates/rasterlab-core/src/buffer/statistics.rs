//! Area and centroid measurements on binary buffers
//!
//! These operate standalone on any binary buffer; labeling computes the
//! same quantities per component. Foreground membership is decided on
//! the blue channel, which is representative for well-formed binary
//! buffers (all three channels equal).

use super::{BYTES_PER_PIXEL, PixelBuffer};
use crate::geometry::Point;

/// Number of white pixels (blue channel nonzero).
pub fn white_area(buf: &PixelBuffer) -> u32 {
    buf.data()
        .iter()
        .step_by(BYTES_PER_PIXEL)
        .filter(|&&b| b != 0)
        .count() as u32
}

/// Number of black pixels (blue channel zero).
pub fn black_area(buf: &PixelBuffer) -> u32 {
    buf.data()
        .iter()
        .step_by(BYTES_PER_PIXEL)
        .filter(|&&b| b == 0)
        .count() as u32
}

/// Centroid of the white pixels, integer-truncated.
///
/// An empty selection has no mean; the centroid is defined as the
/// origin in that case rather than failing.
pub fn white_centroid(buf: &PixelBuffer) -> Point {
    centroid(buf, |v| v == 255)
}

/// Centroid of the black pixels, integer-truncated; origin when there
/// are none.
pub fn black_centroid(buf: &PixelBuffer) -> Point {
    centroid(buf, |v| v == 0)
}

fn centroid(buf: &PixelBuffer, hit: impl Fn(u8) -> bool) -> Point {
    let mut area: i64 = 0;
    let mut sum_x: i64 = 0;
    let mut sum_y: i64 = 0;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            if hit(buf.data()[buf.byte_index(x, y)]) {
                area += 1;
                sum_x += x as i64;
                sum_y += y as i64;
            }
        }
    }

    if area == 0 {
        return Point::ORIGIN;
    }
    Point::new((sum_x / area) as i32, (sum_y / area) as i32)
}
