//! Per-instance condition storage.

use std::collections::BTreeMap;

use super::{Condition, ConditionEntry, ConditionKind, merge};

/// Active conditions on a combat instance, grouped by kind.
///
/// # Invariants
///
/// - No stored entry has `amount == Some(0)`; such entries are pruned on write.
/// - No kind maps to an empty list.
/// - A binary kind holds at most one entry.
/// - Each magnitude pool holds only mutually non-dominated entries.
///
/// Ordered by kind so iteration is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditions {
    by_kind: BTreeMap<ConditionKind, Vec<ConditionEntry>>,
}

impl Conditions {
    /// Creates an empty condition set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries stored for `kind` (empty if none).
    pub fn get(&self, kind: ConditionKind) -> &[ConditionEntry] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks if any entry of `kind` is present.
    pub fn has(&self, kind: ConditionKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Sum of the amounts stored for `kind`. Binary entries count as zero.
    pub fn total(&self, kind: ConditionKind) -> i64 {
        self.get(kind)
            .iter()
            .map(|entry| i64::from(entry.amount_or_zero()))
            .sum()
    }

    /// Merges one condition, returning whether it was actually added.
    ///
    /// The caller is expected to have validated the condition's shape.
    pub fn add(&mut self, condition: Condition) -> bool {
        let outcome = merge(condition.kind, condition.entry, self.get(condition.kind));
        if outcome.added {
            self.replace(condition.kind, outcome.entries);
        }
        outcome.added
    }

    /// Overwrites the entries of `kind`, pruning spent entries and empty kinds.
    pub fn replace(&mut self, kind: ConditionKind, mut entries: Vec<ConditionEntry>) {
        entries.retain(|entry| !entry.is_spent());
        if entries.is_empty() {
            self.by_kind.remove(&kind);
        } else {
            self.by_kind.insert(kind, entries);
        }
    }

    /// Iterates `(kind, entries)` pairs in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (ConditionKind, &[ConditionEntry])> + '_ {
        self.by_kind
            .iter()
            .map(|(kind, entries)| (*kind, entries.as_slice()))
    }

    pub(crate) fn entries_mut(
        &mut self,
    ) -> impl Iterator<Item = (&ConditionKind, &mut Vec<ConditionEntry>)> + '_ {
        self.by_kind.iter_mut()
    }

    pub(crate) fn retain_kinds(
        &mut self,
        keep: impl FnMut(&ConditionKind, &mut Vec<ConditionEntry>) -> bool,
    ) {
        self.by_kind.retain(keep);
    }

    /// Returns true if no condition is active.
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }

    /// Number of kinds with at least one entry.
    pub fn len(&self) -> usize {
        self.by_kind.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_reports_only_new_entries() {
        let mut conditions = Conditions::new();

        assert!(conditions.add(Condition::flag(ConditionKind::Elusive, Some(2))));
        assert!(!conditions.add(Condition::flag(ConditionKind::Elusive, Some(1))));
        assert!(conditions.add(Condition::magnitude(ConditionKind::Absorb, 3, None)));
        assert!(!conditions.add(Condition::magnitude(ConditionKind::Absorb, 0, None)));

        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions.get(ConditionKind::Elusive), &[ConditionEntry::flag(Some(2))]);
    }

    #[test]
    fn replace_prunes_spent_entries() {
        let mut conditions = Conditions::new();
        conditions.replace(
            ConditionKind::Absorb,
            vec![
                ConditionEntry::magnitude(0, None),
                ConditionEntry::magnitude(2, Some(1)),
            ],
        );
        assert_eq!(conditions.get(ConditionKind::Absorb).len(), 1);

        conditions.replace(ConditionKind::Absorb, vec![ConditionEntry::magnitude(0, None)]);
        assert!(!conditions.has(ConditionKind::Absorb));
        assert!(conditions.is_empty());
    }

    #[test]
    fn total_sums_both_pools() {
        let mut conditions = Conditions::new();
        conditions.add(Condition::magnitude(ConditionKind::Armor, 4, Some(2)));
        conditions.add(Condition::magnitude(ConditionKind::Armor, 1, Some(6)));
        conditions.add(Condition::magnitude(ConditionKind::Armor, -3, None));

        assert_eq!(conditions.total(ConditionKind::Armor), 2);
        assert_eq!(conditions.total(ConditionKind::Absorb), 0);
        assert!(conditions.get(ConditionKind::Absorb).is_empty());
    }
}
