//! Element traits bridging Rust sample types and runtime depth tags.
//!
//! # Types
//!
//! - [`Element`] - Implemented for every type an array can store
//!   (`u8`, `i8`, `u16`, `i16`, `i32`, `f32`, `f64`, [`half::f16`])
//! - [`LutIndex`] - Implemented only for the indexable source types
//!   (`u8`, `i8`, `u16`, `i16`)
//!
//! # Design
//!
//! [`ArrayData`](crate::ArrayData) erases the element type; [`Element`]
//! recovers it. Each implementation knows its own storage variant, so
//! typed access never transmutes - a mismatched request simply returns
//! `None` and surfaces as a
//! [`DepthMismatch`](crate::Error::DepthMismatch) error at the array layer.
//!
//! [`LutIndex`] encodes the one rule a lookup transform hinges on: how a
//! source sample addresses a table slot. Unsigned samples index directly;
//! signed samples are shifted by half the domain so the most negative
//! value lands on slot zero. The rule is written out per type rather than
//! derived, because it differs in kind (not just in constants) between
//! signed and unsigned domains.

use crate::{ArrayData, ElemDepth};
use half::f16;
use std::sync::Arc;

/// Trait for array element types.
///
/// Connects a Rust numeric type to its [`ElemDepth`] tag and to the
/// matching [`ArrayData`] variant.
///
/// # Example
///
/// ```rust
/// use ndlut_core::{ElemDepth, Element};
///
/// assert_eq!(<u16 as Element>::DEPTH, ElemDepth::U16);
/// assert_eq!(<half::f16 as Element>::DEPTH, ElemDepth::F16);
/// ```
pub trait Element: Copy + Default + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    /// Depth tag corresponding to `Self`.
    const DEPTH: ElemDepth;

    /// Borrows the typed sample buffer, if `data` stores `Self` samples.
    fn slice_of(data: &ArrayData) -> Option<&[Self]>;

    /// Mutably borrows the typed sample buffer, if `data` stores `Self`
    /// samples. Clones the buffer first when it is shared (copy-on-write).
    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]>;

    /// Wraps an owned sample buffer in the matching storage variant.
    fn into_storage(buf: Vec<Self>) -> ArrayData;
}

impl Element for u8 {
    const DEPTH: ElemDepth = ElemDepth::U8;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::U8(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::U8(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::U8(Arc::new(buf))
    }
}

impl Element for i8 {
    const DEPTH: ElemDepth = ElemDepth::S8;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::S8(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::S8(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::S8(Arc::new(buf))
    }
}

impl Element for u16 {
    const DEPTH: ElemDepth = ElemDepth::U16;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::U16(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::U16(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::U16(Arc::new(buf))
    }
}

impl Element for i16 {
    const DEPTH: ElemDepth = ElemDepth::S16;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::S16(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::S16(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::S16(Arc::new(buf))
    }
}

impl Element for i32 {
    const DEPTH: ElemDepth = ElemDepth::S32;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::S32(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::S32(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::S32(Arc::new(buf))
    }
}

impl Element for f32 {
    const DEPTH: ElemDepth = ElemDepth::F32;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::F32(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::F32(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::F32(Arc::new(buf))
    }
}

impl Element for f64 {
    const DEPTH: ElemDepth = ElemDepth::F64;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::F64(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::F64(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::F64(Arc::new(buf))
    }
}

impl Element for f16 {
    const DEPTH: ElemDepth = ElemDepth::F16;

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::F16(buf) => Some(buf.as_slice()),
            _ => None,
        }
    }

    fn slice_of_mut(data: &mut ArrayData) -> Option<&mut [Self]> {
        match data {
            ArrayData::F16(buf) => Some(Arc::make_mut(buf).as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(buf: Vec<Self>) -> ArrayData {
        ArrayData::F16(Arc::new(buf))
    }
}

/// Trait for source sample types that can address a lookup table.
///
/// A source sample maps to a table slot in `0..DOMAIN`. Unsigned types map
/// identically; signed types are biased by half the domain:
///
/// | type  | domain | rule        |
/// |-------|--------|-------------|
/// | `u8`  | 256    | `s`         |
/// | `i8`  | 256    | `s + 128`   |
/// | `u16` | 65536  | `s`         |
/// | `i16` | 65536  | `s + 32768` |
///
/// Wider integers and floats have no implementation: their domains cannot
/// be materialised as tables.
pub trait LutIndex: Element {
    /// Number of distinct slots samples of this type can address.
    const DOMAIN: usize;

    /// Table slot for this sample, in `0..DOMAIN`.
    fn index(self) -> usize;
}

impl LutIndex for u8 {
    const DOMAIN: usize = 256;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl LutIndex for i8 {
    const DOMAIN: usize = 256;

    #[inline]
    fn index(self) -> usize {
        (self as i32 + 128) as usize
    }
}

impl LutIndex for u16 {
    const DOMAIN: usize = 65536;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl LutIndex for i16 {
    const DOMAIN: usize = 65536;

    #[inline]
    fn index(self) -> usize {
        (self as i32 + 32768) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_index_is_identity() {
        assert_eq!(0u8.index(), 0);
        assert_eq!(255u8.index(), 255);
        assert_eq!(0u16.index(), 0);
        assert_eq!(65535u16.index(), 65535);
    }

    #[test]
    fn test_signed_index_is_biased() {
        assert_eq!((-128i8).index(), 0);
        assert_eq!(0i8.index(), 128);
        assert_eq!(127i8.index(), 255);
        assert_eq!(i16::MIN.index(), 0);
        assert_eq!(0i16.index(), 32768);
        assert_eq!(i16::MAX.index(), 65535);
    }

    #[test]
    fn test_index_spans_domain() {
        // Every sample lands inside the domain, endpoints included.
        for s in i8::MIN..=i8::MAX {
            assert!(s.index() < <i8 as LutIndex>::DOMAIN);
        }
        for s in u8::MIN..=u8::MAX {
            assert!(s.index() < <u8 as LutIndex>::DOMAIN);
        }
    }

    #[test]
    fn test_slice_of_rejects_other_depths() {
        let data = ArrayData::zeros(ElemDepth::U16, 4);
        assert!(<u16 as Element>::slice_of(&data).is_some());
        assert!(<i16 as Element>::slice_of(&data).is_none());
        assert!(<f32 as Element>::slice_of(&data).is_none());
    }
}
