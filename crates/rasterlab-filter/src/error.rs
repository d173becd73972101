//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] rasterlab_region::RegionError),

    /// Gaussian kernel size other than 3, 5 or 7
    #[error("invalid kernel size: {0} (expected 3, 5 or 7)")]
    InvalidKernelSize(u32),
}

/// Result type for filtering operations
pub type FilterResult<T> = Result<T, FilterError>;
