//! rasterlab-filter - Convolution filtering for rasterlab
//!
//! 3x3 convolution over grayscale BGRA buffers with fixed kernel
//! tables, Gaussian blur for kernel sizes 3/5/7, Prewitt/Sobel and
//! Laplacian edge operators, and labeling-based hysteresis edge
//! composition.
//!
//! # Examples
//!
//! ```
//! use rasterlab_core::{PixelBuffer, Rgb};
//! use rasterlab_filter::{gaussian, sobel};
//!
//! let buf = PixelBuffer::new_filled(16, 16, Rgb::gray(80));
//! let smoothed = gaussian(&buf, 5)?;
//! let edges = sobel(&smoothed, 1.0);
//! assert_eq!(edges.get(8, 8), Some(Rgb::BLACK));
//! # Ok::<(), rasterlab_filter::FilterError>(())
//! ```

pub mod convolve;
pub mod edge;
pub mod error;
pub mod kernel;

pub use convolve::{average, filter, filter_int, gaussian};
pub use edge::{hysteresis, laplacian, prewitt, sobel};
pub use error::{FilterError, FilterResult};
