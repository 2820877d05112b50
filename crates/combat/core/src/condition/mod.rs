//! Stacked temporary conditions (buffs and debuffs).
//!
//! Every [`ConditionKind`] is statically classified as either
//! [`ConditionClass::Binary`] (presence plus duration, e.g. the evasion flag)
//! or [`ConditionClass::Magnitude`] (signed amount plus duration). The
//! classification drives how [`merge`] combines an incoming entry with the
//! entries already stored for that kind.

mod merge;
mod set;

pub use merge::{MergeOutcome, dominates, merge};
pub use set::Conditions;

use crate::error::{CombatError, ErrorSeverity};

/// Closed set of condition kinds.
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
pub enum ConditionKind {
    /// Soaks incoming damage before it reaches hit points.
    Absorb,
    /// Flat defensive modifier; positive entries buff, negative entries debuff.
    Armor,
    /// Evasion flag. Presence only.
    Elusive,
}

impl ConditionKind {
    /// Static classification of this kind. Never changes at runtime.
    pub const fn class(self) -> ConditionClass {
        match self {
            Self::Elusive => ConditionClass::Binary,
            Self::Absorb | Self::Armor => ConditionClass::Magnitude,
        }
    }

    #[inline]
    pub const fn is_binary(self) -> bool {
        matches!(self.class(), ConditionClass::Binary)
    }
}

/// How entries of a condition kind stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionClass {
    /// At most one entry: the longest-lasting one.
    Binary,
    /// Positive and negative pools of mutually non-dominated entries.
    Magnitude,
}

/// One stored condition entry.
///
/// - `amount: None` marks a binary entry; `Some(n)` a magnitude entry whose
///   sign selects the buff (`n > 0`) or debuff (`n < 0`) pool.
/// - `duration: None` marks an indefinite effect; `Some(n)` counts remaining
///   rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionEntry {
    pub amount: Option<i32>,
    pub duration: Option<i32>,
}

impl ConditionEntry {
    /// Creates a binary (presence-only) entry.
    pub const fn flag(duration: Option<i32>) -> Self {
        Self {
            amount: None,
            duration,
        }
    }

    /// Creates a magnitude entry.
    pub const fn magnitude(amount: i32, duration: Option<i32>) -> Self {
        Self {
            amount: Some(amount),
            duration,
        }
    }

    /// Magnitude of the entry, treating binary entries as zero.
    #[inline]
    pub fn amount_or_zero(&self) -> i32 {
        self.amount.unwrap_or(0)
    }

    #[inline]
    pub const fn is_indefinite(&self) -> bool {
        self.duration.is_none()
    }

    /// A defined duration at or below zero. Indefinite entries never expire.
    #[inline]
    pub fn is_expired(&self) -> bool {
        matches!(self.duration, Some(remaining) if remaining <= 0)
    }

    /// True for magnitude entries that no longer contribute anything.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.amount == Some(0)
    }

    /// Moves the amount toward zero by the full `charge`, never crossing it.
    ///
    /// Binary entries are returned unchanged.
    pub fn drained_by(self, charge: u32) -> Self {
        let charge = i64::from(charge);
        let amount = self.amount.map(|amount| {
            let amount = i64::from(amount);
            let drained = if amount > 0 {
                (amount - charge).max(0)
            } else {
                (amount + charge).min(0)
            };
            // |drained| <= |amount|, so it always fits back into i32.
            i32::try_from(drained).unwrap_or(0)
        });
        Self { amount, ..self }
    }
}

/// A condition about to be applied: its kind plus the entry to merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub kind: ConditionKind,
    pub entry: ConditionEntry,
}

impl Condition {
    pub const fn new(kind: ConditionKind, entry: ConditionEntry) -> Self {
        Self { kind, entry }
    }

    /// Binary condition lasting `duration` rounds (`None` = indefinite).
    pub const fn flag(kind: ConditionKind, duration: Option<i32>) -> Self {
        Self::new(kind, ConditionEntry::flag(duration))
    }

    /// Magnitude condition of `amount` lasting `duration` rounds.
    pub const fn magnitude(kind: ConditionKind, amount: i32, duration: Option<i32>) -> Self {
        Self::new(kind, ConditionEntry::magnitude(amount, duration))
    }

    /// Checks that the entry shape matches the kind's classification.
    ///
    /// # Errors
    ///
    /// - [`ConditionError::AmountOnBinary`] if a binary kind carries an amount
    /// - [`ConditionError::MissingAmount`] if a magnitude kind carries none
    pub fn validate(&self) -> Result<(), ConditionError> {
        match (self.kind.class(), self.entry.amount) {
            (ConditionClass::Binary, Some(amount)) => Err(ConditionError::AmountOnBinary {
                kind: self.kind,
                amount,
            }),
            (ConditionClass::Magnitude, None) => {
                Err(ConditionError::MissingAmount { kind: self.kind })
            }
            _ => Ok(()),
        }
    }
}

/// Structurally invalid condition handed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionError {
    /// A binary kind was given an amount.
    #[error("binary condition {kind} cannot carry an amount (got {amount})")]
    AmountOnBinary { kind: ConditionKind, amount: i32 },

    /// A magnitude kind was given no amount.
    #[error("magnitude condition {kind} requires an amount")]
    MissingAmount { kind: ConditionKind },
}

impl CombatError for ConditionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AmountOnBinary { .. } => "CONDITION_AMOUNT_ON_BINARY",
            Self::MissingAmount { .. } => "CONDITION_MISSING_AMOUNT",
        }
    }
}
