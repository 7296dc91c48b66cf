#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod extraction;
mod offsets;
pub mod resolve;

pub use adfacts_core::{Ad, Claim, Domain, Fact, FactValue, Span};
pub use extraction::engine::{ExtractionConfig, ExtractionEngine, annotate_ad};
pub use extraction::patterns::{Constructor, PatternEntry, PatternError, default_patterns};
pub use resolve::ResolverKind;
