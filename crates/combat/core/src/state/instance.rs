use super::{ActionId, ActionPoints, HitPoints};
use crate::condition::{ConditionKind, Conditions};
use crate::config::CombatConfig;
use crate::sheet::AttributeSheet;

/// Live battle state of one combatant.
///
/// # Design Principles
///
/// 1. **Snapshot on entry**: built once from an [`AttributeSheet`]; later
///    edits to the sheet never reach an instance already in battle
/// 2. **Copy-on-write**: every mutator computes a fresh instance from a
///    borrowed one, then replaces the stored value in a single assignment
/// 3. **Preview/commit**: forecasting and applying share one computation and
///    differ only in whether the result is kept
///
/// # Invariants
///
/// - `hit_points.current <= hit_points.max`
/// - see [`Conditions`] for the condition invariants
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatInstance {
    pub name: String,
    pub hit_points: HitPoints,
    pub conditions: Conditions,
    pub action_points: ActionPoints,
    /// Innate actions, copied verbatim from the combatant definition.
    pub natural_actions: Vec<ActionId>,
}

impl CombatInstance {
    /// Enters battle at full health with the configured action point allotment
    /// and no conditions.
    pub fn new(
        name: impl Into<String>,
        sheet: &AttributeSheet,
        natural_actions: &[ActionId],
        config: &CombatConfig,
    ) -> Self {
        Self {
            name: name.into(),
            hit_points: HitPoints::full(sheet.max_hit_points),
            conditions: Conditions::new(),
            action_points: ActionPoints::new(config.starting_action_points),
            natural_actions: natural_actions.to_vec(),
        }
    }

    /// Quick check if the instance has been knocked out.
    #[inline]
    pub fn is_knocked_out(&self) -> bool {
        self.hit_points.is_depleted()
    }

    /// Checks if any entry of `kind` is active.
    pub fn has_condition(&self, kind: ConditionKind) -> bool {
        self.conditions.has(kind)
    }

    /// Spends action points; overdrafts floor at zero.
    pub fn spend_action_points(&mut self, amount: u32) {
        self.action_points.spend(amount);
    }

    /// Restores the configured action point allotment.
    pub fn reset_action_points(&mut self, config: &CombatConfig) {
        self.action_points.reset(config.starting_action_points);
    }
}
