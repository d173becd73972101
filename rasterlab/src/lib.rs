//! Rasterlab - Raster image analysis for Rust
//!
//! A toolkit for analyzing flat BGRA pixel buffers:
//!
//! - Point-wise transforms (grayscale, binarization, invert, AND/OR)
//! - Binary morphology with a diamond structuring element
//! - 3x3 convolution, Gaussian blur, edge operators
//! - Connected component labeling with per-component statistics
//! - Hysteresis edge composition
//! - Geometric utilities (crop, box drawing, area and centroid)
//! - PNG import/export
//!
//! # Example
//!
//! ```
//! use rasterlab::{GrayMethod, PixelBuffer, Rgb};
//! use rasterlab::buffer::{convert::grayscale, threshold::binarize_gray_inv};
//! use rasterlab::region::label_components;
//!
//! let mut buf = PixelBuffer::new_filled(32, 32, Rgb::new(40, 40, 40));
//! buf.set(10, 10, Rgb::new(250, 250, 250))?;
//!
//! let gray = grayscale(&buf, GrayMethod::Bt601);
//! // Bright pixels become the white foreground
//! let binary = binarize_gray_inv(&gray, 128);
//! let labels = label_components(&binary)?;
//! assert_eq!(labels.len(), 2);
//! assert_eq!(labels[1].area, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_filter as filter;
pub use rasterlab_io as io;
pub use rasterlab_morph as morph;
pub use rasterlab_region as region;
