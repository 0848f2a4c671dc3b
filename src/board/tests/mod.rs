//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `flip_equiv.rs` - Flip-engine variant equivalence and flip edge cases
//! - `make_unmake.rs` - Apply/undo correctness, pass handling
//! - `movelist.rs` - Move list chain invariants and ordering operations
//! - `endgame.rs` - Last-flip counting and the one-empty solver
//! - `symmetry.rs` - Board isometries and canonical form
//! - `notation.rs` - Text parsing and formatting
//! - `proptest.rs` - Property-based tests

mod proptest;
