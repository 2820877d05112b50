//! Combat state types.
//!
//! - [`CombatInstance`]: one combatant's mutable battle state
//! - [`HitPoints`] / [`ActionPoints`]: bounded counters
//! - [`IdentityId`] / [`InstanceKey`]: addressing

mod common;
mod instance;
mod resources;

pub use common::{ActionId, IdentityId, InstanceKey};
pub use instance::CombatInstance;
pub use resources::{ActionPoints, HitPoints};
