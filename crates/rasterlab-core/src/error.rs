//! Error types for rasterlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Operations report failures to the caller; none are silently corrected
//! and none abort the process.

use thiserror::Error;

/// rasterlab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer length does not match the claimed dimensions
    /// (a BGRA buffer must hold exactly `4 * width * height` bytes).
    #[error("dimension mismatch: {width}x{height} requires {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Two buffers combined pixel-wise differ in byte length.
    #[error("buffer size mismatch: {left} bytes vs {right} bytes")]
    SizeMismatch { left: usize, right: usize },

    /// Coordinates or a rectangle reference pixels outside the buffer.
    #[error("out of bounds: ({x}, {y}) outside {width}x{height}")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
