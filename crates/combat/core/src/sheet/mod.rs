//! Attribute sheets: the static numbers a combat instance is built from.
//!
//! Sheets belong to the roster, not to the combat engine. The engine only
//! reads them when an instance enters battle.

mod proficiency;

use std::collections::BTreeMap;

pub use proficiency::{AttributeScore, ProficiencyKind, ProficiencyLevel};

use crate::config::CombatConfig;

/// Static attribute sheet shared by every instance of a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSheet {
    pub id: String,
    pub max_hit_points: u32,
    pub movement_per_action: u32,
    pub proficiency_levels: BTreeMap<ProficiencyKind, ProficiencyLevel>,
    pub attribute_scores: BTreeMap<AttributeScore, i32>,
    pub rank: u32,
}

impl AttributeSheet {
    /// Create a builder for constructing attribute sheets
    pub fn builder(id: impl Into<String>) -> AttributeSheetBuilder {
        AttributeSheetBuilder::new(id)
    }

    /// Training tier in `kind`; untrained when the sheet does not list it.
    pub fn proficiency_level(&self, kind: ProficiencyKind) -> ProficiencyLevel {
        self.proficiency_levels
            .get(&kind)
            .copied()
            .unwrap_or_default()
    }

    /// Flat bonus for `kind`.
    pub fn proficiency_bonus(&self, kind: ProficiencyKind) -> i32 {
        self.proficiency_level(kind).bonus()
    }

    /// Score in `score`; zero when the sheet does not list it.
    pub fn attribute_score(&self, score: AttributeScore) -> i32 {
        self.attribute_scores.get(&score).copied().unwrap_or(0)
    }
}

/// Builder for constructing attribute sheets.
///
/// Unset fields fall back to the defaults in [`CombatConfig`].
#[derive(Clone, Debug)]
pub struct AttributeSheetBuilder {
    id: String,
    max_hit_points: Option<u32>,
    movement_per_action: Option<u32>,
    proficiency_levels: BTreeMap<ProficiencyKind, ProficiencyLevel>,
    attribute_scores: BTreeMap<AttributeScore, i32>,
    rank: Option<u32>,
}

impl AttributeSheetBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            max_hit_points: None,
            movement_per_action: None,
            proficiency_levels: BTreeMap::new(),
            attribute_scores: BTreeMap::new(),
            rank: None,
        }
    }

    /// Set maximum hit points
    pub fn max_hit_points(mut self, max_hit_points: u32) -> Self {
        self.max_hit_points = Some(max_hit_points);
        self
    }

    /// Set movement per action
    pub fn movement_per_action(mut self, movement_per_action: u32) -> Self {
        self.movement_per_action = Some(movement_per_action);
        self
    }

    /// Set a single proficiency level
    pub fn proficiency(mut self, kind: ProficiencyKind, level: ProficiencyLevel) -> Self {
        self.proficiency_levels.insert(kind, level);
        self
    }

    /// Set a single attribute score
    pub fn attribute_score(mut self, score: AttributeScore, value: i32) -> Self {
        self.attribute_scores.insert(score, value);
        self
    }

    /// Set rank
    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Build the attribute sheet
    pub fn build(self) -> AttributeSheet {
        AttributeSheet {
            id: self.id,
            max_hit_points: self
                .max_hit_points
                .unwrap_or(CombatConfig::DEFAULT_MAX_HIT_POINTS),
            movement_per_action: self
                .movement_per_action
                .unwrap_or(CombatConfig::DEFAULT_MOVEMENT_PER_ACTION),
            proficiency_levels: self.proficiency_levels,
            attribute_scores: self.attribute_scores,
            rank: self.rank.unwrap_or(CombatConfig::DEFAULT_RANK),
        }
    }
}
