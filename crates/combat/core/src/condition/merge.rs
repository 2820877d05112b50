//! Merge rule for an incoming condition entry.
//!
//! # Binary kinds
//!
//! The stored list holds at most one entry. An incoming entry is discarded if
//! any stored entry lasts at least as long (indefinite counts as longest);
//! otherwise it replaces the whole list.
//!
//! # Magnitude kinds
//!
//! A zero amount is discarded. Otherwise only stored entries of the same sign
//! are considered. Entry `a` dominates entry `b` when
//!
//! ```text
//! (a.amount == b.amount && a.duration >= b.duration)
//!     || (a.duration == b.duration && |a.amount| >= |b.amount|)
//! ```
//!
//! If a stored entry dominates the incoming one, the incoming entry is dropped
//! and the list is left as is. Otherwise every same-sign entry the incoming one
//! dominates is evicted and the incoming entry is appended. Entries differing
//! in both amount and duration never dominate each other and always coexist,
//! so each pool is a frontier rather than a single best entry. Entries of the
//! opposite sign are never touched.

use super::{ConditionClass, ConditionEntry, ConditionKind};

/// Result of merging one incoming entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeOutcome {
    /// Replacement entry list for the kind.
    pub entries: Vec<ConditionEntry>,
    /// Whether the incoming entry made it into `entries`.
    pub added: bool,
}

impl MergeOutcome {
    fn unchanged(existing: &[ConditionEntry]) -> Self {
        Self {
            entries: existing.to_vec(),
            added: false,
        }
    }
}

/// Merges `incoming` into the `existing` entries of `kind`.
pub fn merge(
    kind: ConditionKind,
    incoming: ConditionEntry,
    existing: &[ConditionEntry],
) -> MergeOutcome {
    match kind.class() {
        ConditionClass::Binary => merge_binary(incoming, existing),
        ConditionClass::Magnitude => merge_magnitude(incoming, existing),
    }
}

fn merge_binary(incoming: ConditionEntry, existing: &[ConditionEntry]) -> MergeOutcome {
    if existing
        .iter()
        .any(|entry| lasts_at_least(entry.duration, incoming.duration))
    {
        return MergeOutcome::unchanged(existing);
    }

    MergeOutcome {
        entries: vec![incoming],
        added: true,
    }
}

fn merge_magnitude(incoming: ConditionEntry, existing: &[ConditionEntry]) -> MergeOutcome {
    let amount = incoming.amount_or_zero();
    if amount == 0 {
        return MergeOutcome::unchanged(existing);
    }

    let same_pool = |entry: &ConditionEntry| entry.amount_or_zero().signum() == amount.signum();

    if existing
        .iter()
        .filter(|entry| same_pool(*entry))
        .any(|entry| dominates(entry, &incoming))
    {
        return MergeOutcome::unchanged(existing);
    }

    let mut entries: Vec<ConditionEntry> = existing
        .iter()
        .filter(|entry| !(same_pool(*entry) && dominates(&incoming, *entry)))
        .copied()
        .collect();
    entries.push(incoming);

    MergeOutcome {
        entries,
        added: true,
    }
}

/// Returns true if `a` makes `b` redundant.
///
/// Both entries are assumed to sit in the same pool (same amount sign).
pub fn dominates(a: &ConditionEntry, b: &ConditionEntry) -> bool {
    let same_amount = a.amount == b.amount && lasts_at_least(a.duration, b.duration);
    let same_duration =
        a.duration == b.duration && at_least_as_extreme(a.amount_or_zero(), b.amount_or_zero());
    same_amount || same_duration
}

/// Duration ordering where `None` (indefinite) is the maximum.
fn lasts_at_least(a: Option<i32>, b: Option<i32>) -> bool {
    match (a, b) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => a >= b,
    }
}

/// "At least as large" in the buff pool, "at least as negative" in the debuff pool.
fn at_least_as_extreme(a: i32, b: i32) -> bool {
    if b >= 0 { a >= b } else { a <= b }
}
