//! End-of-round condition decay.

use crate::condition::{ConditionEntry, ConditionKind, Conditions};
use crate::state::CombatInstance;

/// Ticks every timed condition down one round and evicts what expired.
///
/// Runs as two passes over the decremented state:
///
/// 1. Drop every kind whose entries have all expired.
/// 2. In the surviving kinds, drop the individual expired entries.
///
/// Indefinite entries are never decremented and never expire. Returns the new
/// condition set and the kinds that disappeared entirely, in kind order.
pub fn advance_round(conditions: &Conditions) -> (Conditions, Vec<ConditionKind>) {
    let mut next = conditions.clone();

    for (_, entries) in next.entries_mut() {
        entries.iter_mut().for_each(tick);
    }

    let mut expired_kinds = Vec::new();
    next.retain_kinds(|kind, entries| {
        let all_expired = entries.iter().all(ConditionEntry::is_expired);
        if all_expired {
            expired_kinds.push(*kind);
        }
        !all_expired
    });

    for (_, entries) in next.entries_mut() {
        entries.retain(|entry| !entry.is_expired());
    }

    (next, expired_kinds)
}

fn tick(entry: &mut ConditionEntry) {
    if let Some(remaining) = entry.duration.as_mut() {
        *remaining = remaining.saturating_sub(1);
    }
}

impl CombatInstance {
    /// Advances this instance's conditions by one round.
    ///
    /// Returns the condition kinds that expired entirely.
    pub fn advance_round(&mut self) -> Vec<ConditionKind> {
        let (next, expired) = advance_round(&self.conditions);
        self.conditions = next;
        expired
    }
}
