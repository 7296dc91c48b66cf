//! Extraction engine for ad facts.
//!
//! The engine runs every pattern over the ad body, anchors each accepted
//! match to its character span and resolves overlapping facts in favour of
//! the longest one.

use once_cell::sync::Lazy;
use tracing::{Level, debug, trace};

use adfacts_core::{Ad, Fact};

use crate::extraction::patterns::{PatternEntry, default_patterns};
use crate::offsets::CharIndex;
use crate::resolve::{self, ResolverKind};

/// Configuration for the extraction engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtractionConfig {
    /// How overlapping pairs are found during conflict resolution.
    #[serde(default)]
    pub resolver: ResolverKind,
}

/// Extraction engine turning ad text into resolved facts.
///
/// The engine holds no per-call state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    /// Compiled extraction patterns.
    patterns: Vec<PatternEntry>,
    /// Configuration.
    config: ExtractionConfig,
}

static DEFAULT_ENGINE: Lazy<ExtractionEngine> = Lazy::new(ExtractionEngine::with_defaults);

impl ExtractionEngine {
    #[must_use]
    pub const fn new(patterns: Vec<PatternEntry>, config: ExtractionConfig) -> Self {
        Self { patterns, config }
    }

    /// Create an extraction engine with the built-in patterns.
    #[must_use]
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self::new(default_patterns().to_vec(), config)
    }

    /// Create an extraction engine with the built-in patterns and default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    #[must_use]
    pub fn patterns(&self) -> &[PatternEntry] {
        &self.patterns
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Annotate an ad. Only the body is analysed.
    #[must_use]
    pub fn annotate(&self, ad: &Ad) -> Vec<Fact> {
        self.extract(&ad.body)
    }

    /// Extract the resolved facts of `body`, in the order they were found.
    #[must_use]
    pub fn extract(&self, body: &str) -> Vec<Fact> {
        let facts = self.raw_facts(body);

        let removed = resolve::removal_marks(&facts, self.config.resolver);
        if tracing::enabled!(Level::DEBUG) {
            let losers: Vec<&Fact> = facts
                .iter()
                .zip(&removed)
                .filter_map(|(fact, &gone)| gone.then_some(fact))
                .collect();
            if !losers.is_empty() {
                debug!(
                    "Conflict resolution removed {} of {} facts",
                    losers.len(),
                    facts.len()
                );
                for fact in losers {
                    trace!("Removed overlapped fact {}", fact);
                }
            }
        }

        resolve::retain_survivors(facts, &removed)
    }

    /// Every fact the patterns produce for `body`, before conflict resolution.
    ///
    /// Facts are grouped by pattern in table order, each group in match order.
    #[must_use]
    pub fn raw_facts(&self, body: &str) -> Vec<Fact> {
        let index = CharIndex::new(body);
        let mut facts = Vec::new();

        for pattern in &self.patterns {
            let before = facts.len();
            facts.extend(
                pattern
                    .claims(body)
                    .map(|(bytes, claim)| claim.at(index.span(bytes))),
            );

            let found = facts.len() - before;
            if found > 0 {
                debug!("Pattern '{}' produced {} facts", pattern.name(), found);
            }
        }

        for fact in &facts {
            trace!("Raw fact {}", fact);
        }

        facts
    }
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Annotate an ad with the shared built-in engine.
#[must_use]
pub fn annotate_ad(ad: &Ad) -> Vec<Fact> {
    DEFAULT_ENGINE.annotate(ad)
}
