//! Binary morphology for rasterlab
//!
//! Erosion, dilation, opening and closing on binary BGRA buffers using
//! a diamond structuring element. All operations take a shared
//! reference to the input and return a fresh buffer.
//!
//! # Examples
//!
//! ```
//! use rasterlab_core::{PixelBuffer, Rgb};
//! use rasterlab_morph::dilate;
//!
//! let mut buf = PixelBuffer::new_filled(5, 5, Rgb::BLACK);
//! buf.set(2, 2, Rgb::WHITE)?;
//!
//! let grown = dilate(&buf, 1);
//! assert!(grown.is_white(2, 1));
//! # Ok::<(), rasterlab_core::Error>(())
//! ```

pub mod binary;

pub use binary::{close, dilate, erode, open};
