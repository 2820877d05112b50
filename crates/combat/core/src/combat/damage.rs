//! Damage calculation and application.

use crate::condition::ConditionKind;
use crate::state::CombatInstance;

/// Incoming damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Damage {
    pub amount: u32,
}

impl Damage {
    pub const fn new(amount: u32) -> Self {
        Self { amount }
    }
}

/// What a hit did (or would do) to an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Hit points actually lost.
    pub net: u32,
    /// Damage before absorption.
    pub raw: u32,
    /// Whether the instance ends at zero hit points.
    pub will_ko: bool,
}

/// Resolves `damage` against `instance`, returning the post-hit instance.
///
/// # Formula
///
/// ```text
/// reduction = Σ absorb.amount
/// each absorb.amount moves toward 0 by damage.amount (independently, no shared pool)
/// taken     = max(damage.amount - reduction, 0)
/// hp        = max(hp - taken, 0)
/// ```
///
/// Absorb entries drained to exactly zero are pruned from the returned instance.
pub fn resolve_damage(instance: &CombatInstance, damage: Damage) -> (CombatInstance, DamageOutcome) {
    let mut next = instance.clone();
    next.hit_points = next.hit_points.clamped();

    let reduction = next.conditions.total(ConditionKind::Absorb);
    let drained = next
        .conditions
        .get(ConditionKind::Absorb)
        .iter()
        .map(|entry| entry.drained_by(damage.amount))
        .collect::<Vec<_>>();
    if !drained.is_empty() {
        next.conditions.replace(ConditionKind::Absorb, drained);
    }

    let taken = (i64::from(damage.amount) - reduction).max(0);
    let taken = u32::try_from(taken).unwrap_or(u32::MAX);

    let before = next.hit_points.current;
    next.hit_points.current = before.saturating_sub(taken);
    let after = next.hit_points.current;

    let outcome = DamageOutcome {
        net: before - after,
        raw: damage.amount,
        will_ko: after == 0,
    };
    (next, outcome)
}

impl CombatInstance {
    /// Forecasts `damage` without touching this instance.
    pub fn preview_damage(&self, damage: Damage) -> DamageOutcome {
        resolve_damage(self, damage).1
    }

    /// Applies `damage`, consuming absorb charges.
    pub fn commit_damage(&mut self, damage: Damage) -> DamageOutcome {
        let (next, outcome) = resolve_damage(self, damage);
        *self = next;
        outcome
    }
}
