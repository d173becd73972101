//! RGBA byte-order conversion
//!
//! External producers and consumers use RGBA byte order; the buffers
//! store BGRA. Conversion both ways is a per-pixel swap of the first
//! and third bytes, so a round trip reproduces the input exactly.

use rasterlab_core::PixelBuffer;

use crate::error::IoResult;

/// Build a buffer from RGBA bytes.
///
/// Fails with a dimension mismatch if `bytes` is not `4 * w * h` long.
pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> IoResult<PixelBuffer> {
    let mut data = bytes.to_vec();
    for px in data.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    Ok(PixelBuffer::from_vec(width, height, data)?)
}

/// Export a buffer as RGBA bytes.
pub fn to_rgba_bytes(buf: &PixelBuffer) -> Vec<u8> {
    let mut data = buf.data().to_vec();
    for px in data.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    data
}
