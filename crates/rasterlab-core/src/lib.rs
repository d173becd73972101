//! rasterlab-core - Pixel buffers and point-wise image operations
//!
//! The core crate owns the shared data representation, a flat BGRA
//! [`PixelBuffer`], together with the operations that need nothing but
//! per-pixel state:
//!
//! - **Grayscale conversion** - six selectable luma formulas
//! - **Thresholding** - inclusive-range binarization in both polarities
//! - **Arithmetic** - inversion and AND/OR (min/max) composition
//! - **Cropping and drawing** - rectangle copy, boxes, outlines, markers
//! - **Binary statistics** - white/black area and centroid
//!
//! All operations are pure: inputs are read-only and every call returns
//! a freshly allocated buffer.
//!
//! # Examples
//!
//! ```
//! use rasterlab_core::{GrayMethod, PixelBuffer, Rgb};
//! use rasterlab_core::buffer::{convert, threshold};
//!
//! let buf = PixelBuffer::new_filled(16, 16, Rgb::new(200, 120, 40));
//! let gray = convert::grayscale(&buf, GrayMethod::Bt601);
//! let binary = threshold::binarize_gray(&gray, 128);
//! assert_eq!(binary.width(), 16);
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod geometry;

pub use buffer::convert::GrayMethod;
pub use buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use color::Rgb;
pub use error::{Error, Result};
pub use geometry::{Point, Size};
