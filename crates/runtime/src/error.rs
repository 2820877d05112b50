//! Unified error type surfaced by the runtime API.
//!
//! Lookup misses are not errors here: every keyed operation returns `None`
//! for an unknown identity or index. Only precondition violations reach
//! [`RuntimeError`].
use combat_core::{CombatError, ConditionError, ErrorSeverity, RosterError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl CombatError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Condition(err) => err.severity(),
            Self::Roster(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Condition(err) => err.error_code(),
            Self::Roster(err) => err.error_code(),
        }
    }
}
