//! Conflict resolution between overlapping facts.
//!
//! Whenever two facts overlap, the one with the shorter span is removed.
//! Equal-length facts never remove each other. Removals are collected over
//! all pairs first and applied once, so a fact that is itself removed can
//! still remove others.

use serde::{Deserialize, Serialize};

use adfacts_core::Fact;

/// Strategy used to find overlapping pairs.
///
/// Both strategies remove exactly the same facts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    /// Compare every pair of facts.
    #[default]
    Pairwise,
    /// Visit facts by start offset and compare only those that can overlap.
    Sweep,
}

impl ResolverKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Sweep => "sweep",
        }
    }
}

/// One flag per fact, set when the fact loses a conflict.
#[must_use]
pub fn removal_marks(facts: &[Fact], kind: ResolverKind) -> Vec<bool> {
    match kind {
        ResolverKind::Pairwise => mark_pairwise(facts),
        ResolverKind::Sweep => mark_sweep(facts),
    }
}

/// Positions in `facts` of every fact that loses a conflict, ascending.
#[must_use]
pub fn removed_indices(facts: &[Fact], kind: ResolverKind) -> Vec<usize> {
    removal_marks(facts, kind)
        .iter()
        .enumerate()
        .filter_map(|(index, &gone)| gone.then_some(index))
        .collect()
}

/// Drop the facts flagged in `removed`, keeping the rest in input order.
#[must_use]
pub fn retain_survivors(facts: Vec<Fact>, removed: &[bool]) -> Vec<Fact> {
    debug_assert_eq!(facts.len(), removed.len());

    facts
        .into_iter()
        .zip(removed)
        .filter_map(|(fact, &gone)| (!gone).then_some(fact))
        .collect()
}

/// Drop every fact that loses a conflict, keeping the rest in input order.
#[must_use]
pub fn resolve(facts: Vec<Fact>, kind: ResolverKind) -> Vec<Fact> {
    let removed = removal_marks(&facts, kind);
    retain_survivors(facts, &removed)
}

/// Mark the shorter of two overlapping facts.
fn elect(facts: &[Fact], a: usize, b: usize, removed: &mut [bool]) {
    let len_a = facts[a].origin().len();
    let len_b = facts[b].origin().len();
    if len_a > len_b {
        removed[b] = true;
    } else if len_b > len_a {
        removed[a] = true;
    }
}

fn mark_pairwise(facts: &[Fact]) -> Vec<bool> {
    let mut removed = vec![false; facts.len()];

    for a in 0..facts.len() {
        for b in a + 1..facts.len() {
            if facts[a].origin().overlaps(&facts[b].origin()) {
                elect(facts, a, b, &mut removed);
            }
        }
    }

    removed
}

fn mark_sweep(facts: &[Fact]) -> Vec<bool> {
    let mut removed = vec![false; facts.len()];

    let mut order: Vec<usize> = (0..facts.len()).collect();
    order.sort_by_key(|&index| (facts[index].origin().start, index));

    for (position, &a) in order.iter().enumerate() {
        let end = facts[a].origin().end;
        // Later entries start no earlier than `a`, so they overlap it exactly
        // when they start at or before its end.
        for &b in order[position + 1..]
            .iter()
            .take_while(|&&b| facts[b].origin().start <= end)
        {
            elect(facts, a, b, &mut removed);
        }
    }

    removed
}
