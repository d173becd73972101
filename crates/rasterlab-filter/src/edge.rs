//! Edge detection and hysteresis composition
//!
//! Gradient operators combine horizontal and vertical directional
//! kernels via `|Gx| + |Gy|`, a cheap approximation of the gradient
//! magnitude that avoids the square root. Hysteresis composition keeps
//! only the low-threshold components that contain at least one
//! high-threshold pixel.

use rasterlab_core::{PixelBuffer, Rgb};
use rasterlab_region::label_components;

use crate::convolve::filter_int;
use crate::error::FilterResult;
use crate::kernel;

/// Prewitt edge magnitude, `|Gx| + |Gy|` scaled by `weight`.
pub fn prewitt(buf: &PixelBuffer, weight: f64) -> PixelBuffer {
    gradient(buf, &kernel::PREWITT_X, &kernel::PREWITT_Y, weight)
}

/// Sobel edge magnitude, `|Gx| + |Gy|` scaled by `weight`.
pub fn sobel(buf: &PixelBuffer, weight: f64) -> PixelBuffer {
    gradient(buf, &kernel::SOBEL_X, &kernel::SOBEL_Y, weight)
}

/// Four-neighbor Laplacian scaled by `weight`.
pub fn laplacian(buf: &PixelBuffer, weight: f64) -> PixelBuffer {
    filter_int(buf, &kernel::LAPLACIAN, weight)
}

fn gradient(
    buf: &PixelBuffer,
    kernel_x: &[[i32; 3]; 3],
    kernel_y: &[[i32; 3]; 3],
    weight: f64,
) -> PixelBuffer {
    let mut out = buf.clone();
    let w = buf.width();
    let h = buf.height();

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for ky in 0..3 {
                for kx in 0..3 {
                    let sx = x + kx as u32 - 1;
                    let sy = y + ky as u32 - 1;
                    let v = buf.data()[buf.byte_index(sx, sy)] as i32;
                    gx += kernel_x[ky][kx] * v;
                    gy += kernel_y[ky][kx] * v;
                }
            }
            let v = ((gx.abs() + gy.abs()) as f64 * weight) as u8;
            let i = out.byte_index(x, y);
            let d = out.data_mut();
            d[i] = v;
            d[i + 1] = v;
            d[i + 2] = v;
        }
    }

    out
}

/// Hysteresis edge composition over a gradient-magnitude buffer.
///
/// Thresholds are swapped if given in the wrong order. Pixels at or
/// above `low` form candidate components; a component survives only if
/// it contains a pixel at or above `high`. Surviving component masks
/// are OR-combined into an otherwise black result.
pub fn hysteresis(buf: &PixelBuffer, low: u8, high: u8) -> FilterResult<PixelBuffer> {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };

    let min_over = threshold_map(buf, low);
    let max_over = threshold_map(buf, high);

    let labels = label_components(&min_over)?;
    let mut out = PixelBuffer::new_filled(buf.width(), buf.height(), Rgb::BLACK);

    for label in &labels[1..] {
        if contains_strong(label, &max_over) {
            out = rasterlab_core::buffer::arith::or(&out, &label.mask)?;
        }
    }

    Ok(out)
}

/// Binary map of pixels whose blue channel is at or above `threshold`.
fn threshold_map(buf: &PixelBuffer, threshold: u8) -> PixelBuffer {
    let mut out = PixelBuffer::new(buf.width(), buf.height());
    let d = out.data_mut();
    for (i, px) in buf.data().chunks_exact(4).enumerate() {
        let v = if px[0] >= threshold { 255 } else { 0 };
        d[4 * i] = v;
        d[4 * i + 1] = v;
        d[4 * i + 2] = v;
        d[4 * i + 3] = 255;
    }
    out
}

/// True if any pixel of the component is white in the strong map.
///
/// Only the component's bounding box needs scanning.
fn contains_strong(label: &rasterlab_region::Label, strong: &PixelBuffer) -> bool {
    for y in label.pos.y..=label.pos_dr.y {
        for x in label.pos.x..=label.pos_dr.x {
            let (x, y) = (x as u32, y as u32);
            if label.mask.is_white(x, y) && strong.is_white(x, y) {
                return true;
            }
        }
    }
    false
}
