//! Rectangle cropping

use super::{BYTES_PER_PIXEL, PixelBuffer};
use crate::error::Result;
use crate::geometry::{Point, Size};

/// Copy a rectangle out of a buffer into a new, smaller buffer.
///
/// The rectangle must lie entirely inside the source; this is a caller
/// precondition and violations fail fast rather than reading out of
/// range.
///
/// # Errors
///
/// [`crate::Error::OutOfBounds`] when `pos` is negative, the size is
/// non-positive, or `pos + size` leaves the source buffer.
pub fn crop(buf: &PixelBuffer, pos: Point, size: Size) -> Result<PixelBuffer> {
    if pos.x < 0 || pos.y < 0 || size.width <= 0 || size.height <= 0 {
        return Err(buf.out_of_bounds(pos));
    }
    let right = pos.x as i64 + size.width as i64;
    let bottom = pos.y as i64 + size.height as i64;
    if right > buf.width() as i64 || bottom > buf.height() as i64 {
        return Err(buf.out_of_bounds(Point::new(
            pos.x + size.width - 1,
            pos.y + size.height - 1,
        )));
    }

    let mut out = PixelBuffer::new(size.width as u32, size.height as u32);
    let row_bytes = BYTES_PER_PIXEL * size.width as usize;

    for y in 0..size.height as u32 {
        let src_start = buf.byte_index(pos.x as u32, pos.y as u32 + y);
        let dst_start = out.byte_index(0, y);
        out.data_mut()[dst_start..dst_start + row_bytes]
            .copy_from_slice(&buf.data()[src_start..src_start + row_bytes]);
    }

    Ok(out)
}
