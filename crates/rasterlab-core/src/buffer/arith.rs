//! Per-channel arithmetic between buffers
//!
//! Inversion and the logical AND/OR composition used to combine binary
//! maps. On binary (0/255) buffers, per-channel min and max are exactly
//! logical AND and OR.

use super::{BYTES_PER_PIXEL, PixelBuffer};
use crate::error::Result;

/// Invert every color channel (`255 - v`); alpha forced to 255.
///
/// Inversion is an involution: `invert(invert(x)) == x` for opaque
/// buffers.
pub fn invert(buf: &PixelBuffer) -> PixelBuffer {
    let mut out = PixelBuffer::new(buf.width(), buf.height());

    let src = buf.data();
    let dst = out.data_mut();

    for (s, d) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        d[0] = 255 - s[0];
        d[1] = 255 - s[1];
        d[2] = 255 - s[2];
        d[3] = 255;
    }

    out
}

/// Per-channel minimum of two buffers (logical AND on binary maps).
///
/// # Errors
///
/// [`crate::Error::SizeMismatch`] if the buffers differ in byte length.
pub fn and(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    a.check_same_size(b)?;
    Ok(combine(a, b, u8::min))
}

/// Per-channel maximum of two buffers (logical OR on binary maps).
///
/// # Errors
///
/// [`crate::Error::SizeMismatch`] if the buffers differ in byte length.
pub fn or(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    a.check_same_size(b)?;
    Ok(combine(a, b, u8::max))
}

fn combine(a: &PixelBuffer, b: &PixelBuffer, op: fn(u8, u8) -> u8) -> PixelBuffer {
    let mut out = PixelBuffer::new(a.width(), a.height());

    let left = a.data();
    let right = b.data();
    let dst = out.data_mut();

    for i in (0..left.len()).step_by(BYTES_PER_PIXEL) {
        dst[i] = op(left[i], right[i]);
        dst[i + 1] = op(left[i + 1], right[i + 1]);
        dst[i + 2] = op(left[i + 2], right[i + 2]);
        dst[i + 3] = 255;
    }

    out
}
