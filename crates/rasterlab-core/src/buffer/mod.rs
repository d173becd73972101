//! PixelBuffer - the shared image representation
//!
//! A `PixelBuffer` owns a contiguous byte sequence of length
//! `4 * width * height`, one pixel per 4 bytes in B,G,R,A channel order,
//! plus the image dimensions.
//!
//! # Invariants
//!
//! - `data.len() == 4 * width * height` at all times; constructors that
//!   accept caller bytes validate this and fail with
//!   [`Error::DimensionMismatch`].
//! - Operations never mutate their input: every transform takes
//!   `&PixelBuffer` and allocates a fresh output buffer. An operation
//!   that changes dimensions (crop) allocates at the new size.
//!
//! # Channel order
//!
//! Byte `+0` is blue, `+1` green, `+2` red, `+3` alpha. Binary
//! operations read the blue channel when they need a single foreground
//! test; binarization writes all three channels identically so the
//! choice is immaterial for well-formed binary buffers.

pub mod arith;
pub mod clip;
pub mod convert;
pub mod graphics;
pub mod statistics;
pub mod threshold;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{Point, Size};

/// Bytes per pixel (B, G, R, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// A flat BGRA image buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zeroed buffer (black, fully transparent).
    pub fn new(width: u32, height: u32) -> Self {
        let len = BYTES_PER_PIXEL * width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Create an opaque buffer filled with a solid color.
    pub fn new_filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut buf = Self::new(width, height);
        for px in buf.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = color.b;
            px[1] = color.g;
            px[2] = color.r;
            px[3] = 255;
        }
        buf
    }

    /// Wrap an existing BGRA byte sequence.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `data.len() != 4 * width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = BYTES_PER_PIXEL * width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image extent as a [`Size`]
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Total pixel count
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw BGRA bytes
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw BGRA bytes
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Whether `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte offset of pixel `(x, y)`.
    ///
    /// Callers must ensure the coordinate is in bounds.
    #[inline]
    pub fn byte_index(&self, x: u32, y: u32) -> usize {
        BYTES_PER_PIXEL * (self.width as usize * y as usize + x as usize)
    }

    /// Read the color at `(x, y)`, `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.byte_index(x, y);
        Some(Rgb::new(self.data[i + 2], self.data[i + 1], self.data[i]))
    }

    /// Write an opaque color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate is outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x: x as i32,
                y: y as i32,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.byte_index(x, y);
        self.data[i] = color.b;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.r;
        self.data[i + 3] = 255;
        Ok(())
    }

    /// Whether the blue channel at `(x, y)` is nonzero.
    ///
    /// Foreground test for binary buffers. Callers must ensure the
    /// coordinate is in bounds.
    #[inline]
    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.data[self.byte_index(x, y)] != 0
    }

    /// Require another buffer to have the same byte length.
    pub(crate) fn check_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(Error::SizeMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        Ok(())
    }

    /// Point-version of the bounds error, for signed coordinates.
    pub(crate) fn out_of_bounds(&self, p: Point) -> Error {
        Error::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_validates_length() {
        let ok = PixelBuffer::from_vec(2, 2, vec![0; 16]);
        assert!(ok.is_ok());

        let err = PixelBuffer::from_vec(2, 2, vec![0; 15]).unwrap_err();
        match err {
            Error::DimensionMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn set_get_round_trip() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set(2, 1, Rgb::new(10, 20, 30)).unwrap();
        assert_eq!(buf.get(2, 1), Some(Rgb::new(10, 20, 30)));
        // BGRA layout in memory
        let i = buf.byte_index(2, 1);
        assert_eq!(&buf.data()[i..i + 4], &[30, 20, 10, 255]);
        assert!(buf.get(4, 0).is_none());
        assert!(buf.set(0, 3, Rgb::WHITE).is_err());
    }

    #[test]
    fn new_filled_is_opaque() {
        let buf = PixelBuffer::new_filled(2, 2, Rgb::RED);
        for px in buf.data().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 255, 255]);
        }
    }
}
