//! Matching logic
//!
//! Crossing predicates used by the match loop.

pub mod crossing;
