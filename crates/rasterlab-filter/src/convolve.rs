//! Convolution operations
//!
//! 3x3 convolution over the blue channel of a grayscale BGRA buffer,
//! with the result replicated across B, G and R. The one-pixel border
//! has no full neighborhood and is copied from the input unchanged.
//! Sums are scaled by a weight and narrowed to a byte by dropping the
//! fraction, clamped to the byte range.

use rasterlab_core::PixelBuffer;

use crate::error::{FilterError, FilterResult};
use crate::kernel;

/// Convolve with a real-valued 3x3 kernel.
pub fn filter(buf: &PixelBuffer, kernel: &[[f64; 3]; 3], weight: f64) -> PixelBuffer {
    let mut out = buf.clone();
    let w = buf.width();
    let h = buf.height();

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let mut sum = 0.0;
            for (ky, row) in kernel.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    let sx = x + kx as u32 - 1;
                    let sy = y + ky as u32 - 1;
                    sum += k * buf.data()[buf.byte_index(sx, sy)] as f64;
                }
            }
            // Truncation, not rounding
            let v = (sum * weight) as u8;
            let i = out.byte_index(x, y);
            let d = out.data_mut();
            d[i] = v;
            d[i + 1] = v;
            d[i + 2] = v;
        }
    }

    out
}

/// Convolve with an integer 3x3 kernel, scaling the sum by `weight`.
pub fn filter_int(buf: &PixelBuffer, kernel: &[[i32; 3]; 3], weight: f64) -> PixelBuffer {
    let mut out = buf.clone();
    let w = buf.width();
    let h = buf.height();

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let mut sum = 0i32;
            for (ky, row) in kernel.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    let sx = x + kx as u32 - 1;
                    let sy = y + ky as u32 - 1;
                    sum += k * buf.data()[buf.byte_index(sx, sy)] as i32;
                }
            }
            let v = (sum as f64 * weight) as u8;
            let i = out.byte_index(x, y);
            let d = out.data_mut();
            d[i] = v;
            d[i + 1] = v;
            d[i + 2] = v;
        }
    }

    out
}

/// 3x3 box blur.
pub fn average(buf: &PixelBuffer) -> PixelBuffer {
    filter(buf, &kernel::AVERAGE, 1.0)
}

/// Gaussian blur with a binomial kernel of size 3, 5 or 7.
///
/// The divisor is the kernel sum `2^(2*size - 2)`. A margin of
/// `size / 2` pixels on each side keeps the input values; the interior
/// is written as opaque gray. Any other size is rejected with
/// [`FilterError::InvalidKernelSize`].
pub fn gaussian(buf: &PixelBuffer, size: u32) -> FilterResult<PixelBuffer> {
    match size {
        3 => Ok(gaussian_fixed(buf, &kernel::GAUSSIAN3, 16)),
        5 => Ok(gaussian_fixed(buf, &kernel::GAUSSIAN5, 256)),
        7 => Ok(gaussian_fixed(buf, &kernel::GAUSSIAN7, 4096)),
        other => Err(FilterError::InvalidKernelSize(other)),
    }
}

fn gaussian_fixed<const N: usize>(
    buf: &PixelBuffer,
    kernel: &[[i32; N]; N],
    divisor: i32,
) -> PixelBuffer {
    let mut out = buf.clone();
    let w = buf.width();
    let h = buf.height();
    let margin = (N / 2) as u32;

    if w <= 2 * margin || h <= 2 * margin {
        return out;
    }

    for y in margin..h - margin {
        for x in margin..w - margin {
            let mut sum = 0i32;
            for (ky, row) in kernel.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    let sx = x + kx as u32 - margin;
                    let sy = y + ky as u32 - margin;
                    sum += k * buf.data()[buf.byte_index(sx, sy)] as i32;
                }
            }
            let v = (sum / divisor) as u8;
            let i = out.byte_index(x, y);
            let d = out.data_mut();
            d[i] = v;
            d[i + 1] = v;
            d[i + 2] = v;
            d[i + 3] = 255;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Rgb;

    #[test]
    fn average_of_uniform_is_uniform() {
        let buf = PixelBuffer::new_filled(5, 5, Rgb::gray(90));
        let out = average(&buf);
        assert_eq!(out.get(2, 2), Some(Rgb::gray(90)));
    }

    #[test]
    fn border_is_copied_from_input() {
        let buf = PixelBuffer::new_filled(5, 5, Rgb::gray(200));
        let out = filter(&buf, &kernel::AVERAGE, 0.0);
        assert_eq!(out.get(0, 0), Some(Rgb::gray(200)));
        assert_eq!(out.get(4, 4), Some(Rgb::gray(200)));
        assert_eq!(out.get(2, 2), Some(Rgb::gray(0)));
    }

    #[test]
    fn average_truncates_fraction() {
        // Center pixel 255, rest 0: sum is 255/9 = 28.33 -> 28
        let mut buf = PixelBuffer::new_filled(3, 3, Rgb::BLACK);
        buf.set(1, 1, Rgb::WHITE).unwrap();
        let out = average(&buf);
        assert_eq!(out.get(1, 1), Some(Rgb::gray(28)));
    }

    #[test]
    fn weight_scales_the_sum() {
        let buf = PixelBuffer::new_filled(3, 3, Rgb::gray(100));
        let identity = [[0, 0, 0], [0, 1, 0], [0, 0, 0]];
        let out = filter_int(&buf, &identity, 0.5);
        assert_eq!(out.get(1, 1), Some(Rgb::gray(50)));
    }

    #[test]
    fn gaussian_rejects_bad_sizes() {
        let buf = PixelBuffer::new_filled(10, 10, Rgb::BLACK);
        assert!(matches!(
            gaussian(&buf, 4),
            Err(FilterError::InvalidKernelSize(4))
        ));
        assert!(matches!(
            gaussian(&buf, 9),
            Err(FilterError::InvalidKernelSize(9))
        ));
    }

    #[test]
    fn gaussian_preserves_uniform_interior() {
        let buf = PixelBuffer::new_filled(9, 9, Rgb::gray(77));
        for size in [3, 5, 7] {
            let out = gaussian(&buf, size).unwrap();
            assert_eq!(out.get(4, 4), Some(Rgb::gray(77)));
        }
    }

    #[test]
    fn gaussian_margin_keeps_input() {
        let buf = PixelBuffer::new_filled(9, 9, Rgb::gray(130));
        let out = gaussian(&buf, 7).unwrap();
        // 7/2 = 3 pixel margin on each side
        assert_eq!(out.get(2, 2), Some(Rgb::gray(130)));
        assert_eq!(out.get(2, 4), Some(Rgb::gray(130)));
    }
}
