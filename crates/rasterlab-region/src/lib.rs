//! rasterlab-region - Connected component analysis for rasterlab
//!
//! This crate labels the 8-connected white components of a binary
//! buffer and reports per-component statistics: bounding box, area,
//! centroid and a full-size mask holding just that component.
//!
//! # Examples
//!
//! ```
//! use rasterlab_core::{PixelBuffer, Rgb};
//! use rasterlab_region::label_components;
//!
//! let mut buf = PixelBuffer::new_filled(10, 10, Rgb::BLACK);
//! buf.set(2, 2, Rgb::WHITE)?;
//! buf.set(3, 3, Rgb::WHITE)?;
//! buf.set(8, 8, Rgb::WHITE)?;
//!
//! // Index 0 is the background sentinel; the diagonal pair is one
//! // component, the far pixel another.
//! let labels = label_components(&buf)?;
//! assert_eq!(labels.len(), 3);
//! assert_eq!(labels[1].area, 2);
//! # Ok::<(), rasterlab_region::RegionError>(())
//! ```

pub mod conncomp;
pub mod error;

pub use conncomp::{Label, label_components};
pub use error::{RegionError, RegionResult};
