//! The table of recognised ad patterns.
//!
//! Each entry pairs a regex with a constructor that turns one match into at
//! most one [`Claim`]. Table order carries no precedence: which of several
//! overlapping facts survives is decided by span length alone.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::{Range, RangeInclusive};
use thiserror::Error;

use adfacts_core::Claim;

/// Builds a claim from one match, or rejects the match with `None`.
pub type Constructor = fn(&Captures<'_>) -> Option<Claim>;

/// Prices outside this range are treated as ordinary numbers.
pub const PRICE_RANGE: RangeInclusive<u64> = 300..=99_999;

/// Error type for pattern building.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regex pattern is invalid.
    #[error("invalid regex for pattern '{name}': {source}")]
    Regex {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled matcher and the constructor applied to its matches.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    name: String,
    regex: Regex,
    construct: Constructor,
}

impl PatternEntry {
    /// Compile `pattern` into a table entry.
    ///
    /// # Errors
    /// Returns an error if the regex pattern is invalid.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        construct: Constructor,
    ) -> Result<Self, PatternError> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| PatternError::Regex {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            regex,
            construct,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Every claim found in `text`, with the byte range of its whole match.
    ///
    /// Matches are the successive non-overlapping leftmost-first matches of
    /// the regex. Matches the constructor rejects are skipped. The iterator
    /// owns its scan position, so the entry stays reusable across texts.
    pub fn claims<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (Range<usize>, Claim)> + 'a {
        self.regex.captures_iter(text).filter_map(move |caps| {
            let whole = caps.get(0)?;
            (self.construct)(&caps).map(|claim| (whole.range(), claim))
        })
    }
}

fn warsaw(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::city("Warszawa"))
}

fn studio(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::flat_type("studio"))
}

fn flat(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::flat_type("flat"))
}

fn room(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::flat_type("room"))
}

/// Digits in the first group, saturating at `u64::MAX`.
fn leading_number(caps: &Captures<'_>) -> Option<u64> {
    // The group holds only ASCII digits, so parsing can fail only on overflow.
    Some(caps.get(1)?.as_str().parse().unwrap_or(u64::MAX))
}

fn room_count_digits(caps: &Captures<'_>) -> Option<Claim> {
    leading_number(caps).map(Claim::room_count)
}

fn two_rooms(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::room_count(2))
}

fn three_rooms(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::room_count(3))
}

// Four-room ads are annotated with 3, matching historical output.
fn four_rooms(_: &Captures<'_>) -> Option<Claim> {
    Some(Claim::room_count(3))
}

fn price(caps: &Captures<'_>) -> Option<Claim> {
    leading_number(caps)
        .filter(|amount| PRICE_RANGE.contains(amount))
        .map(Claim::price)
}

fn phone_number(caps: &Captures<'_>) -> Option<Claim> {
    Some(Claim::phone_number(caps.get(0)?.as_str()))
}

/// Name, regex and constructor of every built-in pattern.
const BUILTIN: &[(&str, &str, Constructor)] = &[
    ("city_warsaw", r"(?i)warszaw", warsaw),
    ("flat_type_studio", r"(?i)kawalerk", studio),
    ("flat_type_flat", r"(?i)mieszkani", flat),
    // ASCII word boundaries: Polish letters next to the word still delimit it.
    ("flat_type_room", r"(?i)(?-u:\b)pok[oó]ju?(?-u:\b)", room),
    ("room_count_digits", r"(?i)([0-9]+) *-? *pok", room_count_digits),
    ("room_count_two", r"(?i)dw[au][ \-]?pokoj(?:e|owe)", two_rooms),
    ("room_count_three", r"(?i)trzy[ \-]?pokoj(?:e|owe)", three_rooms),
    ("room_count_four", r"(?i)czter[yo][ \-]?pokoj(?:e|owe)", four_rooms),
    ("price", r"([0-9]+)", price),
    ("phone_number", r"\+?[0-9][0-9 \-]{5,14}[0-9]", phone_number),
];

static DEFAULT_PATTERNS: Lazy<Vec<PatternEntry>> = Lazy::new(compile_builtin);

#[expect(
    clippy::expect_used,
    reason = "Static regex patterns validated by tests"
)]
fn compile_builtin() -> Vec<PatternEntry> {
    build_builtin().expect("Built-in ad patterns are guaranteed to be valid")
}

fn build_builtin() -> Result<Vec<PatternEntry>, PatternError> {
    BUILTIN
        .iter()
        .map(|&(name, pattern, construct)| PatternEntry::new(name, pattern, construct))
        .collect()
}

/// The built-in pattern table, compiled once per process.
#[must_use]
pub fn default_patterns() -> &'static [PatternEntry] {
    &DEFAULT_PATTERNS
}
