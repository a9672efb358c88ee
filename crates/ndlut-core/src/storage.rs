//! Type-erased sample storage.
//!
//! [`ArrayData`] is the backing buffer of an [`NdArray`](crate::NdArray):
//! one variant per element type, each holding an `Arc<Vec<T>>` so that
//! views can share storage without copying. Mutation goes through
//! [`Arc::make_mut`], so a buffer is only cloned when it is actually
//! shared (copy-on-write).
//!
//! Typed access is routed through the [`Element`](crate::Element) trait,
//! which knows which variant corresponds to each Rust type.

use crate::ElemDepth;
use half::f16;
use std::sync::Arc;

/// Type-erased, reference-counted sample buffer.
///
/// The variant determines the element depth of every sample in the buffer.
/// Lengths are in samples (channels already multiplied in).
#[derive(Debug, Clone)]
pub enum ArrayData {
    /// 8-bit unsigned samples.
    U8(Arc<Vec<u8>>),
    /// 8-bit signed samples.
    S8(Arc<Vec<i8>>),
    /// 16-bit unsigned samples.
    U16(Arc<Vec<u16>>),
    /// 16-bit signed samples.
    S16(Arc<Vec<i16>>),
    /// 32-bit signed samples.
    S32(Arc<Vec<i32>>),
    /// 32-bit float samples.
    F32(Arc<Vec<f32>>),
    /// 64-bit float samples.
    F64(Arc<Vec<f64>>),
    /// 16-bit half-precision float samples.
    F16(Arc<Vec<f16>>),
}

impl ArrayData {
    /// Allocates a zero-filled buffer of `len` samples of the given depth.
    pub fn zeros(depth: ElemDepth, len: usize) -> Self {
        match depth {
            ElemDepth::U8 => Self::U8(Arc::new(vec![0; len])),
            ElemDepth::S8 => Self::S8(Arc::new(vec![0; len])),
            ElemDepth::U16 => Self::U16(Arc::new(vec![0; len])),
            ElemDepth::S16 => Self::S16(Arc::new(vec![0; len])),
            ElemDepth::S32 => Self::S32(Arc::new(vec![0; len])),
            ElemDepth::F32 => Self::F32(Arc::new(vec![0.0; len])),
            ElemDepth::F64 => Self::F64(Arc::new(vec![0.0; len])),
            ElemDepth::F16 => Self::F16(Arc::new(vec![f16::ZERO; len])),
        }
    }

    /// Depth tag of the stored samples.
    pub fn depth(&self) -> ElemDepth {
        match self {
            Self::U8(_) => ElemDepth::U8,
            Self::S8(_) => ElemDepth::S8,
            Self::U16(_) => ElemDepth::U16,
            Self::S16(_) => ElemDepth::S16,
            Self::S32(_) => ElemDepth::S32,
            Self::F32(_) => ElemDepth::F32,
            Self::F64(_) => ElemDepth::F64,
            Self::F16(_) => ElemDepth::F16,
        }
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Self::U8(buf) => buf.len(),
            Self::S8(buf) => buf.len(),
            Self::U16(buf) => buf.len(),
            Self::S16(buf) => buf.len(),
            Self::S32(buf) => buf.len(),
            Self::F32(buf) => buf.len(),
            Self::F64(buf) => buf.len(),
            Self::F16(buf) => buf.len(),
        }
    }

    /// Returns `true` if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
