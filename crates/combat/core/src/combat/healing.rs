//! Healing calculation and application.

use crate::state::CombatInstance;

/// Incoming healing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Healing {
    pub amount: u32,
}

impl Healing {
    pub const fn new(amount: u32) -> Self {
        Self { amount }
    }
}

/// Hit points actually restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingOutcome {
    pub net: u32,
}

/// Resolves `healing` against `instance`, capped at maximum hit points.
///
/// An instance carrying more than its maximum is first pulled back to it, so
/// healing never reports a loss.
pub fn resolve_healing(
    instance: &CombatInstance,
    healing: Healing,
) -> (CombatInstance, HealingOutcome) {
    let mut next = instance.clone();
    next.hit_points = next.hit_points.clamped();

    let before = next.hit_points.current;
    next.hit_points.current = before
        .saturating_add(healing.amount)
        .min(next.hit_points.max);

    let outcome = HealingOutcome {
        net: next.hit_points.current.saturating_sub(before),
    };
    (next, outcome)
}

impl CombatInstance {
    /// Forecasts `healing` without touching this instance.
    pub fn preview_healing(&self, healing: Healing) -> HealingOutcome {
        resolve_healing(self, healing).1
    }

    /// Applies `healing`.
    pub fn commit_healing(&mut self, healing: Healing) -> HealingOutcome {
        let (next, outcome) = resolve_healing(self, healing);
        *self = next;
        outcome
    }
}
