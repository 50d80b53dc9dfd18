//! Error types for lloyd-palette.

use lloyd_core::ClusterError;
use thiserror::Error;

/// Errors raised while building a reduced-palette image.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaletteError {
    /// Requested palette size is outside 1..=256.
    #[error("invalid palette size {colors}: must be between 1 and 256")]
    InvalidPaletteSize {
        /// Requested number of colors
        colors: usize,
    },

    /// The clustering engine rejected the run.
    ///
    /// An image with fewer pixels than colors surfaces here as
    /// `ClusterError::InsufficientData`.
    #[error("clustering failed: {0}")]
    Clustering(#[from] ClusterError),

    /// A palette index does not address the color table.
    #[error("palette index {index} out of range for table of {len} colors")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Color table length
        len: usize,
    },

    /// The index buffer does not cover the image exactly.
    #[error("index buffer has {actual} entries, image needs {expected}")]
    DimensionMismatch {
        /// width * height
        expected: usize,
        /// Supplied index count
        actual: usize,
    },
}

/// Result alias for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;
