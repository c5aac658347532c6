//! Error types for chroma-core grid operations.
//!
//! The node contract is total over valid grids, so errors only arise at the
//! boundary: constructing an [`crate::Image`] from untrusted host data.
//!
//! # Usage
//!
//! ```
//! use chroma_core::{Error, Image};
//!
//! let ragged = Image::from_rows(vec![
//!     vec![[0, 0, 0], [0, 0, 0]],
//!     vec![[0, 0, 0]],
//! ]);
//! assert!(matches!(ragged, Err(Error::RaggedRow { row: 1, .. })));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or indexing pixel grids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A row in a nested-row grid has a different length than the first row.
    ///
    /// Returned by [`crate::Image::from_rows`] when the input is not
    /// rectangular.
    #[error("row {row} has {len} pixels, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Length of the first row
        expected: usize,
    },

    /// A flat pixel buffer does not match the declared dimensions.
    ///
    /// Returned by [`crate::Image::from_pixels`] when
    /// `data.len() != width * height`.
    #[error("pixel buffer holds {got} pixels, expected {expected}")]
    DataSizeMismatch {
        /// Expected pixel count (`width * height`)
        expected: usize,
        /// Actual buffer length
        got: usize,
    },

    /// Pixel coordinates are outside image bounds.
    ///
    /// Returned by [`crate::Image::try_pixel`].
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::RaggedRow`] error.
    #[inline]
    pub fn ragged_row(row: usize, len: usize, expected: usize) -> Self {
        Self::RaggedRow { row, len, expected }
    }

    /// Creates an [`Error::DataSizeMismatch`] error.
    #[inline]
    pub fn data_size_mismatch(expected: usize, got: usize) -> Self {
        Self::DataSizeMismatch { expected, got }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if this is a grid-shape validation error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::RaggedRow { .. } | Self::DataSizeMismatch { .. }
        )
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
