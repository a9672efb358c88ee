//! Byte-indexed LUT primitive.
//!
//! Self-contained 256-entry lookup for 8-bit sources, the routine the
//! dispatch engine delegates to whenever the source depth is `u8` or `s8`.
//! It owns its validation and its kernel registry, so it can also be
//! called directly; [`lut_transform`](crate::lut_transform) on an 8-bit
//! source is bit-identical to calling [`byte_lut`] with the same inputs.

use crate::kernels::{self, BYTE_KERNELS};
use crate::{LutError, LutResult};
use ndlut_core::{NdArray, RunPairs};
use tracing::trace;

/// Domain size of an 8-bit source sample.
const BYTE_DOMAIN: usize = 256;

/// Applies a 256-entry lookup table to an 8-bit source array.
///
/// The table must be contiguous with exactly 256 positions, carrying
/// either one channel (applied to every source channel) or the source's
/// channel count (one table slice per channel). Signed sources index the
/// table biased by 128, so the most negative sample reads slot 0.
///
/// Returns a freshly allocated destination with the source's dims and
/// channels and the table's depth.
///
/// # Errors
///
/// [`LutError::UnsupportedSourceDepth`] for non-8-bit sources,
/// [`LutError::BadTable`] for a table that violates the shape contract,
/// [`LutError::UnsupportedTableDepth`] when no kernel exists for the
/// table's depth.
///
/// # Example
///
/// ```rust
/// use ndlut::byte_lut;
/// use ndlut_core::NdArray;
///
/// let src = NdArray::from_vec(&[4], 1, vec![0u8, 1, 254, 255]).unwrap();
/// let table = NdArray::from_vec(&[256], 1, (0..=255).rev().collect::<Vec<u8>>()).unwrap();
/// let dst = byte_lut(&src, &table).unwrap();
/// assert_eq!(dst.as_slice::<u8>().unwrap(), &[255, 254, 1, 0]);
/// ```
pub fn byte_lut(src: &NdArray, table: &NdArray) -> LutResult<NdArray> {
    let cn = src.channels();
    let lutcn = table.channels();
    trace!(
        src_depth = %src.depth(),
        table_depth = %table.depth(),
        cn,
        lutcn,
        "byte_lut"
    );

    if !src.depth().is_byte_domain() {
        return Err(LutError::UnsupportedSourceDepth { depth: src.depth() });
    }
    if table.total() != BYTE_DOMAIN {
        return Err(LutError::table_size(BYTE_DOMAIN, table.total()));
    }
    if !table.is_contiguous() {
        return Err(LutError::table_not_contiguous());
    }
    if lutcn != 1 && lutcn != cn {
        return Err(LutError::table_channels(lutcn, cn));
    }

    let kernel = kernels::find(BYTE_KERNELS, src.depth(), table.depth())
        .ok_or_else(|| LutError::unsupported_pair(src.depth(), table.depth()))?;

    let mut dst = NdArray::zeros(src.dims(), cn, table.depth())?;
    for span in RunPairs::new(src, &dst)? {
        kernel(src, table, &mut dst, span, cn, lutcn)?;
    }
    Ok(dst)
}
