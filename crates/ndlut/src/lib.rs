//! # ndlut
//!
//! Generic lookup-table transforms over N-dimensional numeric arrays.
//!
//! A lookup transform replaces every sample of a source array with the
//! table entry its value addresses. This crate implements that operation
//! across source/table element depth combinations, with broadcast and
//! per-channel table semantics:
//!
//! - [`lut_transform`] - validate, dispatch, and run the transform
//! - [`lut_transform_with`] - same, delivering the result to a callback
//! - [`byte_lut`] - the 256-entry primitive for 8-bit sources
//!
//! # Supported depth pairs
//!
//! | source | table depths |
//! |--------|--------------|
//! | `u8`, `s8` | `u8 s8 u16 s16 s32 f32 f64` |
//! | `u16`, `s16` | `u8 s8 u16 s16 s32 f32 f64` |
//!
//! `f16` tables and 32-bit or float sources are rejected with typed
//! errors: a 32-bit domain would need a 2^32-entry table, and the `f16`
//! target path is pending a vectorised implementation.
//!
//! # Usage
//!
//! ```rust
//! use ndlut::lut_transform;
//! use ndlut_core::NdArray;
//!
//! // Scale 16-bit samples into float via a 65536-entry table.
//! let table: Vec<f32> = (0..65536).map(|i| i as f32 / 65535.0).collect();
//! let table = NdArray::from_vec(&[65536], 1, table).unwrap();
//!
//! let src = NdArray::from_vec(&[2, 2], 1, vec![0u16, 13107, 52428, 65535]).unwrap();
//! let dst = lut_transform(&src, &table).unwrap();
//! assert_eq!(dst.as_slice::<f32>().unwrap()[3], 1.0);
//! ```
//!
//! # Concurrency
//!
//! A transform is synchronous and holds no global state. Concurrent calls
//! over disjoint arrays are safe; sharing a source or table across calls
//! is safe as long as nothing mutates them mid-read.
//!
//! # Dependencies
//!
//! - [`ndlut-core`](ndlut_core) - Array types, run iteration
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Operation-entry instrumentation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod byte;
mod error;
mod kernels;
mod transform;

pub use byte::byte_lut;
pub use error::{LutError, LutResult};
pub use transform::{lut_transform, lut_transform_with};
