//! Batch application of conditions to an instance.

use crate::condition::{Condition, ConditionError};
use crate::state::CombatInstance;

/// Merges `batch` into a copy of `instance`, one condition at a time.
///
/// Each condition is merged against the state left by the ones before it.
/// Returns the new instance and the conditions that were actually added.
///
/// # Errors
///
/// Returns the first [`ConditionError`] in the batch. The whole batch is
/// validated before anything is merged, so an error never partially applies.
pub fn resolve_conditions(
    instance: &CombatInstance,
    batch: &[Condition],
) -> Result<(CombatInstance, Vec<Condition>), ConditionError> {
    batch.iter().try_for_each(Condition::validate)?;

    let mut next = instance.clone();
    let added = batch
        .iter()
        .filter(|condition| next.conditions.add(**condition))
        .copied()
        .collect();
    Ok((next, added))
}

impl CombatInstance {
    /// Reports which conditions of `batch` would be added, without adding them.
    pub fn preview_conditions(&self, batch: &[Condition]) -> Result<Vec<Condition>, ConditionError> {
        resolve_conditions(self, batch).map(|(_, added)| added)
    }

    /// Adds `batch`, returning the conditions that were actually added.
    pub fn add_conditions(&mut self, batch: &[Condition]) -> Result<Vec<Condition>, ConditionError> {
        let (next, added) = resolve_conditions(self, batch)?;
        *self = next;
        Ok(added)
    }
}
