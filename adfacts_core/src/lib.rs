#![deny(
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

//! Data model shared by the ad annotation crates.

pub mod ad;
pub mod fact;
pub mod span;

pub use ad::Ad;
pub use fact::{Claim, Domain, Fact, FactValue};
pub use span::Span;
