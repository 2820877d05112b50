//! Runtime state for the combat rules in `combat-core`.
//!
//! This crate owns every mutable piece of a battle: the append-only registry
//! of combat instances, an in-memory roster of combatant definitions, and the
//! [`CombatManager`] facade a battle orchestrator drives turn by turn.
//!
//! Modules are organized by responsibility:
//! - [`registry`] stores instances and applies copy-on-write updates
//! - [`roster`] provides an in-memory [`combat_core::RosterOracle`]
//! - [`manager`] exposes the keyed combat operations and logs them
pub mod manager;
pub mod registry;
pub mod roster;

mod error;

pub use error::{Result, RuntimeError};
pub use manager::{CombatManager, CombatantView};
pub use registry::CombatRegistry;
pub use roster::InMemoryRoster;
