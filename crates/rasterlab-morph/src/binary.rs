//! Binary morphological operations
//!
//! Implements erosion and dilation for binary BGRA buffers with a
//! diamond structuring element (the L1 ball of a given radius), plus
//! opening and closing compositions.
//!
//! The structuring element at radius `r` covers every pixel within
//! Manhattan distance `r` of the center; radius 1 is the 4-neighbor
//! cross. Neighbors falling outside the buffer are skipped - no
//! wraparound and no assumed border value.

use rasterlab_core::PixelBuffer;

/// Dilate the white foreground.
///
/// Every pixel within Manhattan distance `radius` of a white input
/// pixel becomes white in the output. The scan reads the unmodified
/// input only, so there is no in-pass feedback.
pub fn dilate(buf: &PixelBuffer, radius: u32) -> PixelBuffer {
    stamp(buf, radius, 255)
}

/// Erode the white foreground.
///
/// The symmetric operation on black pixels: every pixel within
/// Manhattan distance `radius` of a black input pixel becomes black.
/// Equivalent to dilating the background.
pub fn erode(buf: &PixelBuffer, radius: u32) -> PixelBuffer {
    stamp(buf, radius, 0)
}

/// Opening: erosion followed by dilation.
///
/// Removes foreground detail smaller than the structuring element;
/// the white area never grows.
pub fn open(buf: &PixelBuffer, radius: u32) -> PixelBuffer {
    dilate(&erode(buf, radius), radius)
}

/// Closing: dilation followed by erosion.
///
/// Fills background detail smaller than the structuring element;
/// the white area never shrinks.
pub fn close(buf: &PixelBuffer, radius: u32) -> PixelBuffer {
    erode(&dilate(buf, radius), radius)
}

/// Paint the diamond around every pixel whose blue channel equals
/// `value` (255 stamps white, 0 stamps black).
fn stamp(buf: &PixelBuffer, radius: u32, value: u8) -> PixelBuffer {
    let mut out = buf.clone();

    let w = buf.width() as i32;
    let h = buf.height() as i32;
    let r = radius as i32;

    for y in 0..h {
        for x in 0..w {
            let center = buf.data()[buf.byte_index(x as u32, y as u32)];
            let is_hit = if value == 0 { center == 0 } else { center == 255 };
            if !is_hit {
                continue;
            }

            for ny in y - r..=y + r {
                if ny < 0 || ny >= h {
                    continue;
                }
                // Row half-width shrinks with vertical distance
                let span = r - (y - ny).abs();
                for nx in x - span..=x + span {
                    if nx < 0 || nx >= w {
                        continue;
                    }
                    let i = out.byte_index(nx as u32, ny as u32);
                    let d = out.data_mut();
                    d[i] = value;
                    d[i + 1] = value;
                    d[i + 2] = value;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Rgb;
    use rasterlab_core::buffer::statistics::white_area;

    fn with_white(width: u32, height: u32, pixels: &[(u32, u32)]) -> PixelBuffer {
        let mut buf = PixelBuffer::new_filled(width, height, Rgb::BLACK);
        for &(x, y) in pixels {
            buf.set(x, y, Rgb::WHITE).unwrap();
        }
        buf
    }

    #[test]
    fn dilate_radius_one_is_four_neighbor() {
        let buf = with_white(5, 5, &[(2, 2)]);
        let out = dilate(&buf, 1);
        assert_eq!(white_area(&out), 5);
        assert!(out.is_white(2, 2));
        assert!(out.is_white(1, 2));
        assert!(out.is_white(3, 2));
        assert!(out.is_white(2, 1));
        assert!(out.is_white(2, 3));
        assert!(!out.is_white(1, 1));
    }

    #[test]
    fn dilate_radius_two_is_manhattan_ball() {
        let buf = with_white(7, 7, &[(3, 3)]);
        let out = dilate(&buf, 2);
        // |dx| + |dy| <= 2 -> 13 pixels
        assert_eq!(white_area(&out), 13);
        assert!(out.is_white(1, 3));
        assert!(out.is_white(4, 2));
        assert!(!out.is_white(5, 5));
    }

    #[test]
    fn dilate_skips_outside_pixels() {
        let buf = with_white(3, 3, &[(0, 0)]);
        let out = dilate(&buf, 2);
        // The ball is clipped by the two borders.
        assert_eq!(white_area(&out), 6);
    }

    #[test]
    fn erode_removes_single_pixel() {
        let buf = with_white(5, 5, &[(2, 2)]);
        let out = erode(&buf, 1);
        assert_eq!(white_area(&out), 0);
    }

    #[test]
    fn erode_of_all_white_is_identity() {
        let buf = PixelBuffer::new_filled(4, 4, Rgb::WHITE);
        let out = erode(&buf, 1);
        // No black pixel exists, nothing is stamped.
        assert_eq!(white_area(&out), 16);
    }

    #[test]
    fn no_in_pass_feedback() {
        // Two white pixels three apart: with feedback a radius-1 dilation
        // would bridge them; without it the gap survives.
        let buf = with_white(7, 1, &[(1, 0), (5, 0)]);
        let out = dilate(&buf, 1);
        assert!(!out.is_white(3, 0));
    }

    #[test]
    fn opening_and_closing_inequalities() {
        // A 3x3 white blob with a one-pixel nick.
        let mut buf = PixelBuffer::new_filled(9, 9, Rgb::BLACK);
        for y in 3..6 {
            for x in 3..6 {
                buf.set(x, y, Rgb::WHITE).unwrap();
            }
        }
        buf.set(4, 4, Rgb::BLACK).unwrap();

        let original = white_area(&buf);
        assert!(white_area(&open(&buf, 1)) <= original);
        assert!(white_area(&close(&buf, 1)) >= original);
    }
}
