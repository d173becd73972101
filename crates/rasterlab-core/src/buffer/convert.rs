//! Grayscale conversion
//!
//! Maps each pixel to a single luma value, replicated into the B, G and
//! R channels with alpha forced opaque.
//!
//! # Rounding policy
//!
//! The weighted formulas are evaluated in f64 and **truncated** to a
//! byte, not rounded. Downstream consumers depend on the exact byte
//! values, so the truncation is contractual.

use super::{BYTES_PER_PIXEL, PixelBuffer};

/// Luma formula used by [`grayscale`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayMethod {
    /// v = (R + G + B) / 3
    #[default]
    Average,
    /// v = 0.299 R + 0.587 G + 0.114 B
    Bt601,
    /// v = 0.2126 R + 0.7152 G + 0.0722 B
    Bt709,
    /// v = 0.25 R + 0.50 G + 0.25 B
    YCgCo,
    /// v = max(R, G, B)
    Max,
    /// v = min(R, G, B)
    Min,
}

/// Convert a buffer to grayscale.
///
/// The computed value is written to all three color channels; alpha is
/// forced to 255.
pub fn grayscale(buf: &PixelBuffer, method: GrayMethod) -> PixelBuffer {
    let mut out = PixelBuffer::new(buf.width(), buf.height());

    let src = buf.data();
    let dst = out.data_mut();

    for (s, d) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        let (b, g, r) = (s[0], s[1], s[2]);
        let v = match method {
            GrayMethod::Average => (b as f64 + g as f64 + r as f64) / 3.0,
            GrayMethod::Bt601 => 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64,
            GrayMethod::Bt709 => 0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64,
            GrayMethod::YCgCo => 0.25 * r as f64 + 0.50 * g as f64 + 0.25 * b as f64,
            GrayMethod::Max => b.max(g).max(r) as f64,
            GrayMethod::Min => b.min(g).min(r) as f64,
        };

        // Truncation, not rounding
        let v = v as u8;
        d[0] = v;
        d[1] = v;
        d[2] = v;
        d[3] = 255;
    }

    out
}
