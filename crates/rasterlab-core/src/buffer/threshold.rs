//! Binarization by inclusive per-channel thresholds
//!
//! Produces binary buffers (pixels all-white or all-black, alpha 255).
//! Two complementary polarities are provided:
//!
//! - [`binarize`] / [`binarize_range`]: pixels whose channels fall
//!   inside the inclusive ranges become white, the rest black.
//! - [`binarize_inv`] / [`binarize_range_inv`]: exact pixel-for-pixel
//!   complements (in-range pixels become black).
//!
//! All range bounds are inclusive on both ends.

use super::{BYTES_PER_PIXEL, PixelBuffer};
use crate::color::Rgb;

/// Binarize against per-channel maxima: white where every channel is
/// `<=` its maximum.
pub fn binarize(buf: &PixelBuffer, max: Rgb) -> PixelBuffer {
    binarize_range(buf, Rgb::BLACK, max)
}

/// Inverted polarity of [`binarize`].
pub fn binarize_inv(buf: &PixelBuffer, max: Rgb) -> PixelBuffer {
    binarize_range_inv(buf, Rgb::BLACK, max)
}

/// Binarize with the same scalar maximum on all three channels.
pub fn binarize_gray(buf: &PixelBuffer, max: u8) -> PixelBuffer {
    binarize(buf, Rgb::gray(max))
}

/// Inverted polarity of [`binarize_gray`].
pub fn binarize_gray_inv(buf: &PixelBuffer, max: u8) -> PixelBuffer {
    binarize_inv(buf, Rgb::gray(max))
}

/// Binarize against per-channel inclusive ranges: white where every
/// channel satisfies `min <= v <= max`.
pub fn binarize_range(buf: &PixelBuffer, min: Rgb, max: Rgb) -> PixelBuffer {
    select(buf, min, max, 255, 0)
}

/// Inverted polarity of [`binarize_range`]: in-range pixels become
/// black, the rest white.
pub fn binarize_range_inv(buf: &PixelBuffer, min: Rgb, max: Rgb) -> PixelBuffer {
    select(buf, min, max, 0, 255)
}

fn select(buf: &PixelBuffer, min: Rgb, max: Rgb, inside: u8, outside: u8) -> PixelBuffer {
    let mut out = PixelBuffer::new(buf.width(), buf.height());

    let src = buf.data();
    let dst = out.data_mut();

    for (s, d) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        let hit = min.b <= s[0]
            && s[0] <= max.b
            && min.g <= s[1]
            && s[1] <= max.g
            && min.r <= s[2]
            && s[2] <= max.r;

        let v = if hit { inside } else { outside };
        d[0] = v;
        d[1] = v;
        d[2] = v;
        d[3] = 255;
    }

    out
}
