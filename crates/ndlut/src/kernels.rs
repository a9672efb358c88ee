//! Gather kernels and the kernel registry.
//!
//! One generic routine, [`gather`], implements the table lookup for every
//! supported element combination; the registry entries below are its
//! monomorphised instances keyed by `(source depth, table depth)`. Adding a
//! supported pair is one table line.
//!
//! The registry is deliberately sparse. 16-bit sources map to the seven
//! integer/float table depths; `f16` tables have no kernel, and 32-bit
//! integer sources never reach this table because their domain cannot be
//! materialised (see [`ElemDepth::index_domain`]).

use ndlut_core::{ElemDepth, Element, LutIndex, NdArray, RunSpan};

/// Type-erased kernel: applies one contiguous run of the transform.
///
/// `span` indexes the backing samples of `src` and `dst`; `cn` is the
/// shared channel count and `lutcn` the table's. Depth agreement with the
/// concrete instantiation is guaranteed by registry lookup.
pub(crate) type KernelFn =
    fn(&NdArray, &NdArray, &mut NdArray, RunSpan, usize, usize) -> ndlut_core::Result<()>;

/// Elementwise table lookup over one contiguous run.
///
/// `src` and `dst` are the same length, a whole number of positions
/// (`len * cn` samples). With a broadcast table (`lutcn == 1`) every
/// sample goes through the same `DOMAIN`-entry table; with a per-channel
/// table (`lutcn == cn`) channel `k` reads the interleaved slice
/// `table[index * cn + k]`.
fn gather<S: LutIndex, T: Element>(src: &[S], table: &[T], dst: &mut [T], cn: usize, lutcn: usize) {
    if lutcn == 1 {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = table[s.index()];
        }
    } else {
        for (d, s) in dst.chunks_exact_mut(cn).zip(src.chunks_exact(cn)) {
            for k in 0..cn {
                d[k] = table[s[k].index() * cn + k];
            }
        }
    }
}

/// Monomorphisable front of [`gather`]: borrows the typed run slices and
/// the table, then delegates.
fn run_gather<S: LutIndex, T: Element>(
    src: &NdArray,
    table: &NdArray,
    dst: &mut NdArray,
    span: RunSpan,
    cn: usize,
    lutcn: usize,
) -> ndlut_core::Result<()> {
    let s = &src.samples::<S>()?[span.a..span.a + span.len];
    let t = table.as_slice::<T>()?;
    let d = &mut dst.samples_mut::<T>()?[span.b..span.b + span.len];
    gather(s, t, d, cn, lutcn);
    Ok(())
}

/// One registry row: the depth pair a kernel instance serves.
pub(crate) struct KernelEntry {
    pub src: ElemDepth,
    pub table: ElemDepth,
    pub kernel: KernelFn,
}

macro_rules! entry {
    ($s:ty => $src:ident, $t:ty => $tab:ident) => {
        KernelEntry {
            src: ElemDepth::$src,
            table: ElemDepth::$tab,
            kernel: run_gather::<$s, $t>,
        }
    };
}

/// Kernels for the generic (16-bit source) path.
pub(crate) const GENERIC_KERNELS: &[KernelEntry] = &[
    // u16 source
    entry!(u16 => U16, u8 => U8),
    entry!(u16 => U16, i8 => S8),
    entry!(u16 => U16, u16 => U16),
    entry!(u16 => U16, i16 => S16),
    entry!(u16 => U16, i32 => S32),
    entry!(u16 => U16, f32 => F32),
    entry!(u16 => U16, f64 => F64),
    // i16 source
    entry!(i16 => S16, u8 => U8),
    entry!(i16 => S16, i8 => S8),
    entry!(i16 => S16, u16 => U16),
    entry!(i16 => S16, i16 => S16),
    entry!(i16 => S16, i32 => S32),
    entry!(i16 => S16, f32 => F32),
    entry!(i16 => S16, f64 => F64),
];

/// Kernels for the byte (8-bit source) primitive.
pub(crate) const BYTE_KERNELS: &[KernelEntry] = &[
    // u8 source
    entry!(u8 => U8, u8 => U8),
    entry!(u8 => U8, i8 => S8),
    entry!(u8 => U8, u16 => U16),
    entry!(u8 => U8, i16 => S16),
    entry!(u8 => U8, i32 => S32),
    entry!(u8 => U8, f32 => F32),
    entry!(u8 => U8, f64 => F64),
    // i8 source
    entry!(i8 => S8, u8 => U8),
    entry!(i8 => S8, i8 => S8),
    entry!(i8 => S8, u16 => U16),
    entry!(i8 => S8, i16 => S16),
    entry!(i8 => S8, i32 => S32),
    entry!(i8 => S8, f32 => F32),
    entry!(i8 => S8, f64 => F64),
];

/// Finds the kernel registered for a depth pair, if any.
pub(crate) fn find(registry: &[KernelEntry], src: ElemDepth, table: ElemDepth) -> Option<KernelFn> {
    registry
        .iter()
        .find(|e| e.src == src && e.table == table)
        .map(|e| e.kernel)
}
