//! Combat rules applied to a single [`CombatInstance`](crate::state::CombatInstance).
//!
//! Every rule is a pure `resolve_*` function from a borrowed instance to a new
//! instance plus an outcome. The `preview_*` methods keep only the outcome; the
//! `commit_*` methods also store the new instance. Both paths share the same
//! arithmetic, so a preview always matches the commit that follows it.

mod conditions;
mod damage;
mod healing;
mod round;

pub use conditions::resolve_conditions;
pub use damage::{Damage, DamageOutcome, resolve_damage};
pub use healing::{Healing, HealingOutcome, resolve_healing};
pub use round::advance_round;
