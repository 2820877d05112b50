/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Action points granted when an instance enters battle and on every reset.
    pub starting_action_points: u32,
}

impl CombatConfig {
    // ===== fixed rules =====
    /// Action point allotment every combatant starts a round with.
    pub const STARTING_ACTION_POINTS: u32 = 3;

    // ===== attribute sheet defaults =====
    pub const DEFAULT_MAX_HIT_POINTS: u32 = 1;
    pub const DEFAULT_MOVEMENT_PER_ACTION: u32 = 1;
    pub const DEFAULT_RANK: u32 = 0;

    pub fn new() -> Self {
        Self {
            starting_action_points: Self::STARTING_ACTION_POINTS,
        }
    }

    pub fn with_starting_action_points(starting_action_points: u32) -> Self {
        Self {
            starting_action_points,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
