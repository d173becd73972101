//! rasterlab-io - Buffer import and export for rasterlab
//!
//! Converts between the BGRA pixel buffers used by the processing
//! crates and external RGBA byte streams, with PNG as the on-disk
//! format.
//!
//! # Examples
//!
//! ```no_run
//! use rasterlab_io::{load_png, save_png};
//!
//! let buf = load_png("input.png")?;
//! save_png(&buf, "copy.png")?;
//! # Ok::<(), rasterlab_io::IoError>(())
//! ```

pub mod convert;
pub mod error;
pub mod png;

pub use convert::{from_rgba_bytes, to_rgba_bytes};
pub use error::{IoError, IoResult};
pub use png::{load_png, read_png, save_png, write_png};
