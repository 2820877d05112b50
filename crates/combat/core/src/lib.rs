//! Deterministic combat state rules shared by every battle orchestrator.
//!
//! `combat-core` defines the live state of a combatant in battle (hit points,
//! stacked conditions, action points) and exposes pure APIs to damage, heal,
//! condition and age that state. Nothing here logs, allocates shared state, or
//! performs I/O; the `combat-runtime` crate owns the registry of instances and
//! wraps these rules with lookup and logging.
pub mod combat;
pub mod condition;
pub mod config;
pub mod env;
pub mod error;
pub mod sheet;
pub mod state;

pub use combat::{
    Damage, DamageOutcome, Healing, HealingOutcome, advance_round, resolve_conditions,
    resolve_damage, resolve_healing,
};
pub use condition::{
    Condition, ConditionClass, ConditionEntry, ConditionError, ConditionKind, Conditions,
    MergeOutcome, dominates, merge,
};
pub use config::CombatConfig;
pub use env::{CombatantProfile, ResolvedCombatant, RosterError, RosterOracle};
pub use error::{CombatError, ErrorSeverity};
pub use sheet::{
    AttributeScore, AttributeSheet, AttributeSheetBuilder, ProficiencyKind, ProficiencyLevel,
};
pub use state::{ActionId, ActionPoints, CombatInstance, HitPoints, IdentityId, InstanceKey};
