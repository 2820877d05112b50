//! Proficiency and attribute score lookup tables.

/// Attribute scores a combatant is rated in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeScore {
    Body,
    Mind,
    Soul,
}

/// Training tier in a proficiency.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProficiencyLevel {
    #[default]
    Untrained,
    Novice,
    Expert,
    Master,
    Legendary,
}

impl ProficiencyLevel {
    /// Flat bonus granted by this tier (0 for untrained up to 4 for legendary).
    pub const fn bonus(self) -> i32 {
        match self {
            Self::Untrained => 0,
            Self::Novice => 1,
            Self::Expert => 2,
            Self::Master => 3,
            Self::Legendary => 4,
        }
    }
}

/// Things a combatant can be proficient in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProficiencyKind {
    Unknown,
    SkillBody,
    SkillMind,
    SkillSoul,
    DefendBody,
    DefendMind,
    DefendSoul,
    Armor,
    WeaponNatural,
    WeaponSimple,
    WeaponMartial,
}

impl ProficiencyKind {
    /// Attribute score that backs this proficiency, if any.
    ///
    /// Only skill and defense proficiencies are tied to a score.
    pub const fn governing_score(self) -> Option<AttributeScore> {
        match self {
            Self::SkillBody | Self::DefendBody => Some(AttributeScore::Body),
            Self::SkillMind | Self::DefendMind => Some(AttributeScore::Mind),
            Self::SkillSoul | Self::DefendSoul => Some(AttributeScore::Soul),
            Self::Unknown
            | Self::Armor
            | Self::WeaponNatural
            | Self::WeaponSimple
            | Self::WeaponMartial => None,
        }
    }
}
