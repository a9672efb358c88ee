//! Integration tests for the ndlut crates.
//!
//! These tests exercise the transform engine end-to-end through the
//! public API: the identity-table law over every registered depth pair,
//! the broadcast and per-channel table semantics, fast-path equivalence
//! for byte sources, and the error taxonomy.
