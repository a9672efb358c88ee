//! Error types for ndlut-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers failure modes of the array layer:
//! - Shape construction (zero channels, empty dims, overflowing sample counts)
//! - Typed buffer access (depth mismatch, non-contiguous views)
//! - Lockstep iteration over incompatible arrays
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use crate::ElemDepth;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the array layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Shape arguments cannot describe an array.
    ///
    /// Returned for zero channels, an empty dims list, or a shape whose
    /// sample count overflows `usize`.
    #[error("invalid shape {dims:?} x{channels}ch: {reason}")]
    InvalidShape {
        /// Requested extents
        dims: Vec<usize>,
        /// Requested channel count
        channels: usize,
        /// Why the shape was rejected
        reason: String,
    },

    /// Provided buffer length does not match the shape.
    #[error("buffer holds {got} samples, shape needs {expected}")]
    LengthMismatch {
        /// Samples the shape requires
        expected: usize,
        /// Samples the buffer holds
        got: usize,
    },

    /// Typed access requested with the wrong element type.
    #[error("array stores {stored} samples, {requested} access requested")]
    DepthMismatch {
        /// Depth of the stored samples
        stored: ElemDepth,
        /// Depth implied by the access
        requested: ElemDepth,
    },

    /// Operation requires a contiguous array.
    #[error("array is not contiguous")]
    NotContiguous,

    /// Axis index does not exist on this array.
    #[error("axis {axis} out of range for {ndim}-dimensional array")]
    AxisOutOfRange {
        /// Requested axis
        axis: usize,
        /// Number of dimensions the array has
        ndim: usize,
    },

    /// Narrowing range does not fit the axis.
    #[error("range {start}..{end} out of bounds for axis extent {extent}")]
    BadRange {
        /// Range start
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// Extent of the axis
        extent: usize,
    },

    /// Two arrays that must agree in shape do not.
    #[error("shape mismatch: {a:?} vs {b:?}")]
    ShapeMismatch {
        /// First shape
        a: Vec<usize>,
        /// Second shape
        b: Vec<usize>,
    },

    /// Two arrays that must agree in channel count do not.
    #[error("channel mismatch: {a} vs {b}")]
    ChannelMismatch {
        /// First channel count
        a: usize,
        /// Second channel count
        b: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(dims: &[usize], channels: usize, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            dims: dims.to_vec(),
            channels,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DepthMismatch`] error.
    #[inline]
    pub fn depth_mismatch(requested: ElemDepth, stored: ElemDepth) -> Self {
        Self::DepthMismatch { stored, requested }
    }

    /// Returns `true` if this is a typed-access error.
    #[inline]
    pub fn is_access_error(&self) -> bool {
        matches!(self, Self::DepthMismatch { .. } | Self::NotContiguous)
    }
}
