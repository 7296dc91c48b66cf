//! Fact extraction from classified-ad text.
//!
//! A fixed table of regex patterns is run over the whole text; every match
//! becomes a claim anchored to its character span, and overlapping facts are
//! then pruned so the longest one in each contested region wins.

pub mod engine;
pub mod patterns;
