//! Drawing primitives
//!
//! Axis-aligned boxes, box outlines and a clipped centered marker.
//! Each function copies the input and draws on the copy; the source
//! buffer is never touched.

use super::PixelBuffer;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::{Point, Size};

/// Draw a filled, opaque box with its top-left corner at `pos`.
///
/// # Errors
///
/// [`crate::Error::OutOfBounds`] when the box leaves the buffer.
pub fn draw_box(buf: &PixelBuffer, color: Rgb, pos: Point, size: Size) -> Result<PixelBuffer> {
    check_rect(buf, pos, size)?;

    let mut out = buf.clone();
    for y in pos.y..pos.y + size.height {
        for x in pos.x..pos.x + size.width {
            let i = out.byte_index(x as u32, y as u32);
            let d = out.data_mut();
            d[i] = color.b;
            d[i + 1] = color.g;
            d[i + 2] = color.r;
            d[i + 3] = 255;
        }
    }
    Ok(out)
}

/// Draw a one-pixel box outline: top and bottom rows plus left and
/// right columns. Only the color channels are written; alpha keeps the
/// source value.
///
/// # Errors
///
/// [`crate::Error::OutOfBounds`] when the box leaves the buffer.
pub fn draw_box_outline(
    buf: &PixelBuffer,
    color: Rgb,
    pos: Point,
    size: Size,
) -> Result<PixelBuffer> {
    check_rect(buf, pos, size)?;

    let mut out = buf.clone();
    let bottom = pos.y + size.height - 1;
    let right = pos.x + size.width - 1;

    for x in pos.x..=right {
        paint(&mut out, x as u32, pos.y as u32, color);
        paint(&mut out, x as u32, bottom as u32, color);
    }
    for y in pos.y..=bottom {
        paint(&mut out, pos.x as u32, y as u32, color);
        paint(&mut out, right as u32, y as u32, color);
    }
    Ok(out)
}

/// Outline variant taking the two opposite corners (both inclusive),
/// the shape labeling produces for bounding boxes.
pub fn draw_box_outline_corners(
    buf: &PixelBuffer,
    color: Rgb,
    ul: Point,
    dr: Point,
) -> Result<PixelBuffer> {
    draw_box_outline(
        buf,
        color,
        ul,
        Size::new(dr.x - ul.x + 1, dr.y - ul.y + 1),
    )
}

/// Draw a filled marker box centered on `center`.
///
/// Intended for pointer overlays: pixels falling outside the buffer are
/// silently skipped instead of failing, and alpha keeps the source
/// value.
pub fn draw_marker(buf: &PixelBuffer, color: Rgb, center: Point, size: Size) -> PixelBuffer {
    let mut out = buf.clone();

    let half_w = size.width / 2;
    let half_h = size.height / 2;

    for y in center.y - half_h..=center.y + half_h {
        for x in center.x - half_w..=center.x + half_w {
            if !out.contains(x, y) {
                continue;
            }
            paint(&mut out, x as u32, y as u32, color);
        }
    }
    out
}

fn paint(buf: &mut PixelBuffer, x: u32, y: u32, color: Rgb) {
    let i = buf.byte_index(x, y);
    let d = buf.data_mut();
    d[i] = color.b;
    d[i + 1] = color.g;
    d[i + 2] = color.r;
}

fn check_rect(buf: &PixelBuffer, pos: Point, size: Size) -> Result<()> {
    if pos.x < 0 || pos.y < 0 || size.width <= 0 || size.height <= 0 {
        return Err(buf.out_of_bounds(pos));
    }
    let corner = Point::new(pos.x + size.width - 1, pos.y + size.height - 1);
    if corner.x >= buf.width() as i32 || corner.y >= buf.height() as i32 {
        return Err(buf.out_of_bounds(corner));
    }
    Ok(())
}
