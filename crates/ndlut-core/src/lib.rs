//! # ndlut-core
//!
//! Core array types for the ndlut lookup-transform crates.
//!
//! This crate provides the foundational pieces the transform engine in
//! `ndlut` operates on:
//!
//! - [`ElemDepth`] - Runtime tag for sample types (u8 .. f64, half floats)
//! - [`Element`] / [`LutIndex`] - Traits bridging Rust numeric types and
//!   runtime-typed storage, and the per-type table indexing rule
//! - [`NdArray`] - N-dimensional, multi-channel sample buffer with
//!   zero-copy narrowed views
//! - [`RunPairs`] - Lockstep iteration over two arrays as contiguous runs
//!
//! ## Design Philosophy
//!
//! Arrays are runtime-typed (the depth is data, not a type parameter)
//! because transforms pick their element types at dispatch time. The
//! [`Element`] trait recovers the static type at the kernel boundary, so
//! everything below dispatch is ordinary slices of concrete numeric types
//! with bounds-checked indexing.
//!
//! ## Crate Structure
//!
//! ```text
//! ndlut-core (this crate)
//!    ^
//!    |
//!    +-- ndlut (validation, dispatch, gather kernels)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod element;
pub mod error;
pub mod format;
pub mod runs;
pub mod storage;

// Re-exports for convenience
pub use array::NdArray;
pub use element::{Element, LutIndex};
pub use error::{Error, Result};
pub use format::ElemDepth;
pub use runs::{RunPairs, RunSpan};
pub use storage::ArrayData;
