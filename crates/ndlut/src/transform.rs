//! Validation and dispatch for lookup transforms.
//!
//! [`lut_transform`] is the engine's one public operation: it inspects the
//! source depth, routes 8-bit sources to the byte primitive, validates the
//! table against the source's lookup domain, and drives the registered
//! kernel over the contiguous runs of the source/destination pair.
//!
//! All validation happens before the destination is allocated; a failing
//! call performs no writes.

use crate::kernels::{self, GENERIC_KERNELS};
use crate::{byte, LutError, LutResult};
use ndlut_core::{NdArray, RunPairs};
use tracing::{debug, trace};

/// Applies a lookup table to every sample of an N-dimensional array.
///
/// The table addresses the full domain of the source depth: 256 positions
/// for 8-bit sources, 65536 for 16-bit sources. Unsigned samples index
/// directly; signed samples are biased by half the domain. The table
/// carries either one channel, applied to every source channel, or the
/// source's channel count, one interleaved table slice per channel.
///
/// The destination is freshly allocated with the source's dims and
/// channels and the table's element depth; the source and table are never
/// written to.
///
/// 8-bit sources take the byte fast path ([`byte_lut`](crate::byte_lut))
/// and produce bit-identical results to calling the primitive directly.
/// 16-bit sources dispatch to a kernel selected by the
/// `(source depth, table depth)` pair; the supported table depths are
/// `u8`, `s8`, `u16`, `s16`, `s32`, `f32` and `f64`. Wider integer and
/// float sources have no lookup domain and are rejected.
///
/// # Errors
///
/// - [`LutError::UnsupportedSourceDepth`] - source is not 8-bit or 16-bit
/// - [`LutError::UnsupportedTableDepth`] - no kernel for the depth pair
/// - [`LutError::BadTable`] - table size, contiguity, or channel rule
///   violated
///
/// # Example
///
/// ```rust
/// use ndlut::lut_transform;
/// use ndlut_core::NdArray;
///
/// // Truncate 16-bit samples to their low byte.
/// let src = NdArray::from_vec(&[1, 4], 1, vec![0u16, 1, 65535, 32768]).unwrap();
/// let table = NdArray::from_vec(&[65536], 1, (0..65536).map(|i| i as u8).collect::<Vec<u8>>()).unwrap();
/// let dst = lut_transform(&src, &table).unwrap();
/// assert_eq!(dst.as_slice::<u8>().unwrap(), &[0, 1, 255, 0]);
/// ```
pub fn lut_transform(src: &NdArray, table: &NdArray) -> LutResult<NdArray> {
    let cn = src.channels();
    let lutcn = table.channels();
    trace!(
        src_depth = %src.depth(),
        table_depth = %table.depth(),
        cn,
        lutcn,
        total = src.total(),
        "lut_transform"
    );

    if src.depth().is_byte_domain() {
        debug!(depth = %src.depth(), "taking byte fast path");
        return byte::byte_lut(src, table);
    }

    let domain = src
        .depth()
        .index_domain()
        .ok_or(LutError::UnsupportedSourceDepth { depth: src.depth() })?;

    if table.total() != domain {
        return Err(LutError::table_size(domain, table.total()));
    }
    if !table.is_contiguous() {
        return Err(LutError::table_not_contiguous());
    }
    if lutcn != 1 && lutcn != cn {
        return Err(LutError::table_channels(lutcn, cn));
    }

    let kernel = kernels::find(GENERIC_KERNELS, src.depth(), table.depth())
        .ok_or_else(|| LutError::unsupported_pair(src.depth(), table.depth()))?;

    let mut dst = NdArray::zeros(src.dims(), cn, table.depth())?;
    for span in RunPairs::new(src, &dst)? {
        kernel(src, table, &mut dst, span, cn, lutcn)?;
    }
    Ok(dst)
}

/// Callback-delivering variant of [`lut_transform`].
///
/// Runs the transform synchronously on the calling thread, then hands the
/// result to `done` exactly once. No scheduling is involved; the call
/// returns after the callback does. Useful at boundaries that expect
/// completion-notification style delivery.
///
/// # Example
///
/// ```rust
/// use ndlut::lut_transform_with;
/// use ndlut_core::NdArray;
///
/// let src = NdArray::from_vec(&[2], 1, vec![1u8, 2]).unwrap();
/// let table = NdArray::from_vec(&[256], 1, (0u8..=255).collect::<Vec<u8>>()).unwrap();
///
/// let mut out = None;
/// lut_transform_with(&src, &table, |result| out = Some(result));
/// assert_eq!(out.unwrap().unwrap().as_slice::<u8>().unwrap(), &[1, 2]);
/// ```
pub fn lut_transform_with<F>(src: &NdArray, table: &NdArray, done: F)
where
    F: FnOnce(LutResult<NdArray>),
{
    done(lut_transform(src, table));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndlut_core::ElemDepth;

    fn u16_identity_table() -> NdArray {
        NdArray::from_vec(&[65536], 1, (0..65536).map(|i| i as u16).collect::<Vec<u16>>()).unwrap()
    }

    #[test]
    fn test_u16_to_u8_truncation() {
        let src = NdArray::from_vec(&[1, 4], 1, vec![0u16, 1, 65535, 32768]).unwrap();
        let table =
            NdArray::from_vec(&[65536], 1, (0..65536).map(|i| i as u8).collect::<Vec<u8>>()).unwrap();
        let dst = lut_transform(&src, &table).unwrap();
        assert_eq!(dst.depth(), ElemDepth::U8);
        assert_eq!(dst.dims(), &[1, 4]);
        assert_eq!(dst.as_slice::<u8>().unwrap(), &[0, 1, 255, 0]);
    }

    #[test]
    fn test_s16_source_bias() {
        // Table slot j holds j; i16 sample v reads slot v + 32768.
        let src = NdArray::from_vec(&[3], 1, vec![i16::MIN, 0, i16::MAX]).unwrap();
        let dst = lut_transform(&src, &u16_identity_table()).unwrap();
        assert_eq!(dst.as_slice::<u16>().unwrap(), &[0, 32768, 65535]);
    }

    #[test]
    fn test_u16_to_f64() {
        let table =
            NdArray::from_vec(&[65536], 1, (0..65536).map(|i| i as f64).collect::<Vec<f64>>()).unwrap();
        let src = NdArray::from_vec(&[2], 1, vec![7u16, 60000]).unwrap();
        let dst = lut_transform(&src, &table).unwrap();
        assert_eq!(dst.as_slice::<f64>().unwrap(), &[7.0, 60000.0]);
    }

    #[test]
    fn test_per_channel_vs_broadcast() {
        // Broadcast: both channels through the same table.
        let src = NdArray::from_vec(&[2], 2, vec![1u16, 2, 3, 4]).unwrap();
        let dst = lut_transform(&src, &u16_identity_table()).unwrap();
        assert_eq!(dst.as_slice::<u16>().unwrap(), &[1, 2, 3, 4]);

        // Per-channel: channel 1's slice negates via offset table.
        let mut entries = vec![0i32; 65536 * 2];
        for i in 0..65536 {
            entries[i * 2] = i as i32;
            entries[i * 2 + 1] = -(i as i32);
        }
        let table = NdArray::from_vec(&[65536], 2, entries).unwrap();
        let dst = lut_transform(&src, &table).unwrap();
        assert_eq!(dst.as_slice::<i32>().unwrap(), &[1, -2, 3, -4]);
    }

    #[test]
    fn test_float_source_rejected() {
        let src = NdArray::zeros(&[4], 1, ElemDepth::F32).unwrap();
        let err = lut_transform(&src, &u16_identity_table()).unwrap_err();
        assert!(matches!(
            err,
            LutError::UnsupportedSourceDepth { depth: ElemDepth::F32 }
        ));
    }

    #[test]
    fn test_s32_source_rejected() {
        // 32-bit sources have no materialisable domain.
        let src = NdArray::zeros(&[4], 1, ElemDepth::S32).unwrap();
        assert!(matches!(
            lut_transform(&src, &u16_identity_table()),
            Err(LutError::UnsupportedSourceDepth { depth: ElemDepth::S32 })
        ));
    }

    #[test]
    fn test_f16_table_rejected() {
        let src = NdArray::zeros(&[4], 1, ElemDepth::U16).unwrap();
        let table = NdArray::zeros(&[65536], 1, ElemDepth::F16).unwrap();
        let err = lut_transform(&src, &table).unwrap_err();
        assert!(matches!(
            err,
            LutError::UnsupportedTableDepth {
                source: ElemDepth::U16,
                table: ElemDepth::F16
            }
        ));
    }

    #[test]
    fn test_wrong_table_size_rejected() {
        let src = NdArray::zeros(&[4], 1, ElemDepth::U16).unwrap();
        let table = NdArray::zeros(&[256], 1, ElemDepth::U16).unwrap();
        let err = lut_transform(&src, &table).unwrap_err();
        assert!(matches!(err, LutError::BadTable { .. }));
        assert!(err.to_string().contains("65536"));
    }

    #[test]
    fn test_noncontiguous_table_rejected() {
        // Narrowing an inner axis leaves a strided view with 65536
        // positions, so only the contiguity check can reject it.
        let parent = NdArray::zeros(&[65536, 2], 1, ElemDepth::U16).unwrap();
        let table = parent.narrow(1, 0, 1).unwrap();
        assert_eq!(table.total(), 65536);
        let src = NdArray::zeros(&[4], 1, ElemDepth::U16).unwrap();
        let err = lut_transform(&src, &table).unwrap_err();
        assert!(matches!(err, LutError::BadTable { .. }));
        assert!(err.to_string().contains("contiguous"));
    }

    #[test]
    fn test_channel_rule_rejected() {
        let src = NdArray::zeros(&[4], 3, ElemDepth::U16).unwrap();
        let table = NdArray::zeros(&[65536], 2, ElemDepth::U16).unwrap();
        assert!(matches!(
            lut_transform(&src, &table),
            Err(LutError::BadTable { .. })
        ));
    }

    #[test]
    fn test_byte_source_equals_primitive() {
        let src = NdArray::from_vec(&[2, 2], 1, vec![3u8, 1, 255, 0]).unwrap();
        let table =
            NdArray::from_vec(&[256], 1, (0..256).map(|i| (i * 2) as u16).collect::<Vec<u16>>())
                .unwrap();
        let via_engine = lut_transform(&src, &table).unwrap();
        let via_primitive = crate::byte_lut(&src, &table).unwrap();
        assert_eq!(
            via_engine.as_slice::<u16>().unwrap(),
            via_primitive.as_slice::<u16>().unwrap()
        );
    }

    #[test]
    fn test_strided_source_view() {
        // 2x4 source narrowed to its middle columns; the narrowed view
        // transforms the same as a contiguous copy of those columns.
        let src = NdArray::from_vec(&[2, 4], 1, vec![10u16, 11, 12, 13, 20, 21, 22, 23]).unwrap();
        let view = src.narrow(1, 1, 2).unwrap();
        assert!(!view.is_contiguous());
        let dst = lut_transform(&view, &u16_identity_table()).unwrap();
        assert_eq!(dst.as_slice::<u16>().unwrap(), &[11, 12, 21, 22]);
    }

    #[test]
    fn test_empty_source() {
        let src = NdArray::zeros(&[0, 3], 2, ElemDepth::U16).unwrap();
        let dst = lut_transform(&src, &u16_identity_table()).unwrap();
        assert_eq!(dst.total(), 0);
        assert_eq!(dst.dims(), &[0, 3]);
        assert_eq!(dst.channels(), 2);
    }

    #[test]
    fn test_identity_applied_twice() {
        let src = NdArray::from_vec(&[3], 1, vec![5u16, 1000, 65535]).unwrap();
        let once = lut_transform(&src, &u16_identity_table()).unwrap();
        let twice = lut_transform(&once, &u16_identity_table()).unwrap();
        assert_eq!(
            twice.as_slice::<u16>().unwrap(),
            src.as_slice::<u16>().unwrap()
        );
    }

    #[test]
    fn test_callback_variant_matches_direct() {
        let src = NdArray::from_vec(&[2], 1, vec![4u16, 9]).unwrap();
        let table = u16_identity_table();

        let direct = lut_transform(&src, &table).unwrap();
        let mut delivered = None;
        lut_transform_with(&src, &table, |r| delivered = Some(r));
        let via_callback = delivered.unwrap().unwrap();
        assert_eq!(
            direct.as_slice::<u16>().unwrap(),
            via_callback.as_slice::<u16>().unwrap()
        );

        // Errors are delivered through the same channel.
        let bad = NdArray::zeros(&[4], 1, ElemDepth::F32).unwrap();
        let mut delivered = None;
        lut_transform_with(&bad, &table, |r| delivered = Some(r));
        assert!(matches!(
            delivered.unwrap(),
            Err(LutError::UnsupportedSourceDepth { .. })
        ));
    }

    #[test]
    fn test_source_and_table_unchanged() {
        let src = NdArray::from_vec(&[2], 1, vec![1u16, 2]).unwrap();
        let table = u16_identity_table();
        let src_before: Vec<u16> = src.as_slice::<u16>().unwrap().to_vec();
        let _ = lut_transform(&src, &table).unwrap();
        assert_eq!(src.as_slice::<u16>().unwrap(), src_before.as_slice());
        assert_eq!(table.as_slice::<u16>().unwrap()[12345], 12345);
    }
}
