//! Lockstep run iteration over two same-shape arrays.
//!
//! A transform that reads one array and writes another does not care about
//! dimensionality - it only needs matching stretches of samples from both.
//! [`RunPairs`] walks two arrays in lockstep and yields [`RunSpan`]s: pairs
//! of sample offsets plus a shared run length, where each run is contiguous
//! in both arrays.
//!
//! For two fully contiguous arrays there is exactly one run covering every
//! sample. Strided views (see [`NdArray::narrow`](crate::NdArray::narrow))
//! decompose into one run per contiguous slab.
//!
//! The iterator copies the layout it needs at construction and holds no
//! borrows, so the arrays can be re-borrowed (including mutably) while
//! iterating.

use crate::{Error, NdArray, Result};

/// One pair of contiguous runs, as sample offsets into each array's
/// backing slice (see [`NdArray::samples`](crate::NdArray::samples)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// Offset of the run in the first array.
    pub a: usize,
    /// Offset of the run in the second array.
    pub b: usize,
    /// Run length in samples.
    pub len: usize,
}

/// Iterator yielding lockstep contiguous runs of two arrays.
///
/// # Example
///
/// ```rust
/// use ndlut_core::{NdArray, RunPairs};
///
/// let a = NdArray::from_vec(&[2, 3], 1, vec![0u8, 1, 2, 3, 4, 5]).unwrap();
/// let b = NdArray::zeros(&[2, 3], 1, ndlut_core::ElemDepth::U8).unwrap();
///
/// // Both contiguous: a single run covers all six samples.
/// let runs: Vec<_> = RunPairs::new(&a, &b).unwrap().collect();
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].len, 6);
/// ```
#[derive(Debug)]
pub struct RunPairs {
    outer: Vec<usize>,
    a_strides: Vec<usize>,
    b_strides: Vec<usize>,
    cursor: Vec<usize>,
    run_len: usize,
    remaining: usize,
}

impl RunPairs {
    /// Builds the iterator for two arrays of identical dims and channels.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] / [`Error::ChannelMismatch`] when the
    /// arrays do not line up.
    pub fn new(a: &NdArray, b: &NdArray) -> Result<Self> {
        if a.dims() != b.dims() {
            return Err(Error::ShapeMismatch {
                a: a.dims().to_vec(),
                b: b.dims().to_vec(),
            });
        }
        if a.channels() != b.channels() {
            return Err(Error::ChannelMismatch {
                a: a.channels(),
                b: b.channels(),
            });
        }

        let dims = a.dims();
        let ndim = dims.len();

        // Fuse the longest suffix of dims over which both arrays are
        // densely packed; that suffix forms one run.
        let mut packed = a.channels();
        let mut split = ndim;
        while split > 0
            && a.strides()[split - 1] == packed
            && b.strides()[split - 1] == packed
        {
            packed *= dims[split - 1];
            split -= 1;
        }
        let run_len = packed;

        let outer: Vec<usize> = dims[..split].to_vec();
        let remaining = if a.total() == 0 {
            0
        } else {
            outer.iter().product()
        };

        Ok(Self {
            cursor: vec![0; split],
            a_strides: a.strides()[..split].to_vec(),
            b_strides: b.strides()[..split].to_vec(),
            outer,
            run_len,
            remaining,
        })
    }

    /// Length in samples of every run this iterator yields.
    #[inline]
    pub fn run_len(&self) -> usize {
        self.run_len
    }
}

impl Iterator for RunPairs {
    type Item = RunSpan;

    fn next(&mut self) -> Option<RunSpan> {
        if self.remaining == 0 {
            return None;
        }

        let a = self
            .cursor
            .iter()
            .zip(&self.a_strides)
            .map(|(i, s)| i * s)
            .sum();
        let b = self
            .cursor
            .iter()
            .zip(&self.b_strides)
            .map(|(i, s)| i * s)
            .sum();

        self.remaining -= 1;
        for d in (0..self.cursor.len()).rev() {
            self.cursor[d] += 1;
            if self.cursor[d] < self.outer[d] {
                break;
            }
            self.cursor[d] = 0;
        }

        Some(RunSpan {
            a,
            b,
            len: self.run_len,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RunPairs {}
