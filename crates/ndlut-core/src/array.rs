//! N-dimensional multi-channel array buffer.
//!
//! This module provides [`NdArray`], the container every lookup transform
//! operates on.
//!
//! # Memory Layout
//!
//! Samples are stored row-major with channels interleaved innermost:
//!
//! ```text
//! dims = [2, 3], channels = 2
//! Memory: [c0 c1  c0 c1  c0 c1]   <- position row 0
//!         [c0 c1  c0 c1  c0 c1]   <- position row 1
//! ```
//!
//! Each dimension has a stride in sample units. A freshly constructed
//! array is contiguous (strides are densely packed); [`NdArray::narrow`]
//! produces views whose strides still refer to the parent layout, which is
//! how non-contiguous arrays arise.
//!
//! # Storage Sharing
//!
//! The sample buffer lives behind an `Arc` (see
//! [`ArrayData`](crate::ArrayData)): clones and narrowed views share it,
//! and mutable access copies the buffer only when it is shared. The
//! destination arrays produced by transforms are freshly allocated and
//! uniquely owned, so writing to them never copies.
//!
//! # Usage
//!
//! ```rust
//! use ndlut_core::{ElemDepth, NdArray};
//!
//! let a = NdArray::from_vec(&[2, 2], 1, vec![1u16, 2, 3, 4]).unwrap();
//! assert_eq!(a.total(), 4);
//! assert_eq!(a.depth(), ElemDepth::U16);
//! assert_eq!(a.as_slice::<u16>().unwrap(), &[1, 2, 3, 4]);
//!
//! // Zero-copy view of the second row.
//! let row = a.narrow(0, 1, 1).unwrap();
//! assert_eq!(row.as_slice::<u16>().unwrap(), &[3, 4]);
//! ```

use crate::{ArrayData, ElemDepth, Element, Error, Result};

/// Computes packed strides and the total sample count for a shape.
///
/// Fails on zero channels, an empty dims list, or overflow.
fn layout(dims: &[usize], channels: usize) -> Result<(Vec<usize>, usize)> {
    if channels == 0 {
        return Err(Error::invalid_shape(dims, channels, "channels must be at least 1"));
    }
    if dims.is_empty() {
        return Err(Error::invalid_shape(dims, channels, "need at least one dimension"));
    }
    let mut strides = vec![0usize; dims.len()];
    let mut acc = channels;
    for d in (0..dims.len()).rev() {
        strides[d] = acc;
        acc = acc
            .checked_mul(dims[d])
            .ok_or_else(|| Error::invalid_shape(dims, channels, "sample count overflows usize"))?;
    }
    Ok((strides, acc))
}

/// N-dimensional, multi-channel, homogeneously typed array.
///
/// Attributes:
/// - `dims` - ordered extents; the product is [`total`](Self::total)
/// - `channels` - interleaved components per position (innermost)
/// - `depth` - the [`ElemDepth`] of every sample
///
/// Lifecycle: the caller creates sources and tables; transforms allocate
/// their own destinations and hand ownership back. Nothing here frees
/// anything early - buffers are dropped with the last array referring to
/// them.
#[derive(Debug, Clone)]
pub struct NdArray {
    data: ArrayData,
    dims: Vec<usize>,
    strides: Vec<usize>,
    channels: usize,
    offset: usize,
}

impl NdArray {
    /// Creates a zero-filled array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] for zero channels, empty dims, or a
    /// shape whose sample count overflows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ndlut_core::{ElemDepth, NdArray};
    ///
    /// let a = NdArray::zeros(&[4, 3], 2, ElemDepth::F32).unwrap();
    /// assert_eq!(a.total(), 12);
    /// assert_eq!(a.sample_count(), 24);
    /// ```
    pub fn zeros(dims: &[usize], channels: usize, depth: ElemDepth) -> Result<Self> {
        let (strides, samples) = layout(dims, channels)?;
        Ok(Self {
            data: ArrayData::zeros(depth, samples),
            dims: dims.to_vec(),
            strides,
            channels,
            offset: 0,
        })
    }

    /// Creates an array from an owned sample buffer.
    ///
    /// The buffer length must equal `product(dims) * channels`; the depth
    /// is taken from the element type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] for a bad shape and
    /// [`Error::LengthMismatch`] when the buffer does not fit it.
    pub fn from_vec<T: Element>(dims: &[usize], channels: usize, data: Vec<T>) -> Result<Self> {
        let (strides, samples) = layout(dims, channels)?;
        if data.len() != samples {
            return Err(Error::LengthMismatch {
                expected: samples,
                got: data.len(),
            });
        }
        Ok(Self {
            data: T::into_storage(data),
            dims: dims.to_vec(),
            strides,
            channels,
            offset: 0,
        })
    }

    /// Ordered extents of the array.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Interleaved components per position.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Depth tag of every sample.
    #[inline]
    pub fn depth(&self) -> ElemDepth {
        self.data.depth()
    }

    /// Number of positions (product of dims, channels not included).
    #[inline]
    pub fn total(&self) -> usize {
        self.dims.iter().product()
    }

    /// Number of samples (`total * channels`).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.total() * self.channels
    }

    /// Per-dimension strides in sample units.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Whether the view is densely packed.
    ///
    /// Freshly constructed arrays are contiguous; views produced by
    /// [`narrow`](Self::narrow) on an inner axis are not.
    pub fn is_contiguous(&self) -> bool {
        let mut acc = self.channels;
        for d in (0..self.dims.len()).rev() {
            if self.strides[d] != acc {
                return false;
            }
            acc *= self.dims[d];
        }
        true
    }

    /// Borrows the samples of a contiguous array as a typed slice.
    ///
    /// The slice covers exactly [`sample_count`](Self::sample_count)
    /// samples in layout order.
    ///
    /// # Errors
    ///
    /// [`Error::DepthMismatch`] when `T` is not the stored type,
    /// [`Error::NotContiguous`] for strided views (iterate those through
    /// [`RunPairs`](crate::RunPairs) instead).
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        if !self.is_contiguous() {
            return Err(Error::NotContiguous);
        }
        let buf = T::slice_of(&self.data)
            .ok_or_else(|| Error::depth_mismatch(T::DEPTH, self.depth()))?;
        Ok(&buf[self.offset..self.offset + self.sample_count()])
    }

    /// Mutably borrows the samples of a contiguous array.
    ///
    /// Copies the underlying buffer first if other arrays share it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`as_slice`](Self::as_slice).
    pub fn as_slice_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        if !self.is_contiguous() {
            return Err(Error::NotContiguous);
        }
        let offset = self.offset;
        let count = self.sample_count();
        let depth = self.data.depth();
        let buf = T::slice_of_mut(&mut self.data)
            .ok_or_else(|| Error::depth_mismatch(T::DEPTH, depth))?;
        Ok(&mut buf[offset..offset + count])
    }

    /// Borrows the backing samples from this view's origin onward.
    ///
    /// Unlike [`as_slice`](Self::as_slice) this works for strided views;
    /// the offsets in a [`RunSpan`](crate::RunSpan) index into this slice.
    ///
    /// # Errors
    ///
    /// [`Error::DepthMismatch`] when `T` is not the stored type.
    pub fn samples<T: Element>(&self) -> Result<&[T]> {
        let buf = T::slice_of(&self.data)
            .ok_or_else(|| Error::depth_mismatch(T::DEPTH, self.depth()))?;
        Ok(&buf[self.offset..])
    }

    /// Mutable counterpart of [`samples`](Self::samples).
    pub fn samples_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        let offset = self.offset;
        let depth = self.data.depth();
        let buf = T::slice_of_mut(&mut self.data)
            .ok_or_else(|| Error::depth_mismatch(T::DEPTH, depth))?;
        Ok(&mut buf[offset..])
    }

    /// Zero-copy view restricted to `start..start + len` along one axis.
    ///
    /// The view shares storage with `self`. Narrowing the outermost axis
    /// keeps the view contiguous; narrowing any inner axis produces a
    /// strided view.
    ///
    /// # Errors
    ///
    /// [`Error::AxisOutOfRange`] / [`Error::BadRange`] when the request
    /// does not fit the array.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ndlut_core::NdArray;
    ///
    /// let a = NdArray::from_vec(&[2, 3], 1, vec![0u8, 1, 2, 10, 11, 12]).unwrap();
    /// let mid = a.narrow(1, 1, 2).unwrap();
    /// assert_eq!(mid.dims(), &[2, 2]);
    /// assert!(!mid.is_contiguous());
    /// ```
    pub fn narrow(&self, axis: usize, start: usize, len: usize) -> Result<Self> {
        if axis >= self.dims.len() {
            return Err(Error::AxisOutOfRange {
                axis,
                ndim: self.dims.len(),
            });
        }
        let extent = self.dims[axis];
        let end = start.checked_add(len).unwrap_or(usize::MAX);
        if len == 0 || end > extent {
            return Err(Error::BadRange { start, end, extent });
        }
        let mut view = self.clone();
        view.dims[axis] = len;
        view.offset += start * self.strides[axis];
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_layout() {
        let a = NdArray::zeros(&[4, 3], 2, ElemDepth::U8).unwrap();
        assert_eq!(a.dims(), &[4, 3]);
        assert_eq!(a.channels(), 2);
        assert_eq!(a.total(), 12);
        assert_eq!(a.sample_count(), 24);
        assert_eq!(a.strides(), &[6, 2]);
        assert!(a.is_contiguous());
    }

    #[test]
    fn test_bad_shapes() {
        assert!(NdArray::zeros(&[4], 0, ElemDepth::U8).is_err());
        assert!(NdArray::zeros(&[], 1, ElemDepth::U8).is_err());
        assert!(NdArray::zeros(&[usize::MAX, 2], 1, ElemDepth::U8).is_err());
    }

    #[test]
    fn test_from_vec_length_check() {
        let err = NdArray::from_vec(&[2, 2], 1, vec![0u8; 3]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 4, got: 3 }));
    }

    #[test]
    fn test_typed_access() {
        let a = NdArray::from_vec(&[2], 2, vec![1i16, 2, 3, 4]).unwrap();
        assert_eq!(a.as_slice::<i16>().unwrap(), &[1, 2, 3, 4]);
        let err = a.as_slice::<u16>().unwrap_err();
        assert!(matches!(
            err,
            Error::DepthMismatch {
                stored: ElemDepth::S16,
                requested: ElemDepth::U16
            }
        ));
    }

    #[test]
    fn test_narrow_outer_axis_stays_contiguous() {
        let a = NdArray::from_vec(&[3, 2], 1, vec![0u8, 1, 10, 11, 20, 21]).unwrap();
        let tail = a.narrow(0, 1, 2).unwrap();
        assert!(tail.is_contiguous());
        assert_eq!(tail.as_slice::<u8>().unwrap(), &[10, 11, 20, 21]);
    }

    #[test]
    fn test_narrow_inner_axis_is_strided() {
        let a = NdArray::from_vec(&[2, 3], 1, vec![0u8, 1, 2, 10, 11, 12]).unwrap();
        let mid = a.narrow(1, 1, 2).unwrap();
        assert_eq!(mid.dims(), &[2, 2]);
        assert!(!mid.is_contiguous());
        assert!(matches!(mid.as_slice::<u8>(), Err(Error::NotContiguous)));
        // Backing samples start at the view origin.
        assert_eq!(mid.samples::<u8>().unwrap()[0], 1);
    }

    #[test]
    fn test_narrow_bounds() {
        let a = NdArray::zeros(&[4], 1, ElemDepth::U8).unwrap();
        assert!(a.narrow(1, 0, 1).is_err());
        assert!(a.narrow(0, 3, 2).is_err());
        assert!(a.narrow(0, 0, 0).is_err());
    }

    #[test]
    fn test_write_is_copy_on_write() {
        let mut a = NdArray::from_vec(&[4], 1, vec![0u8, 1, 2, 3]).unwrap();
        let b = a.clone();
        a.as_slice_mut::<u8>().unwrap()[0] = 99;
        assert_eq!(a.as_slice::<u8>().unwrap()[0], 99);
        assert_eq!(b.as_slice::<u8>().unwrap()[0], 0);
    }

    #[test]
    fn test_zero_extent_is_empty() {
        let a = NdArray::zeros(&[0, 5], 3, ElemDepth::F64).unwrap();
        assert_eq!(a.total(), 0);
        assert_eq!(a.as_slice::<f64>().unwrap().len(), 0);
    }
}
