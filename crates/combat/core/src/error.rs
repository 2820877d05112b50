//! Common error infrastructure for combat-core.
//!
//! Combat rules separate two failure classes:
//!
//! - **Lookup misses** (unknown identity, unknown instance index) are not
//!   errors at all. They surface as `Option::None` and callers re-check state.
//! - **Precondition violations** (a structurally invalid value was handed to
//!   the engine) are typed errors. They are defined next to the data they
//!   guard ([`ConditionError`](crate::condition::ConditionError),
//!   [`RosterError`](crate::env::RosterError)) and all implement
//!   [`CombatError`] for uniform classification.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: an amount attached to a binary condition
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a profile pointing at an attribute sheet that was never stored
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
