use crate::error::{CombatError, ErrorSeverity};
use crate::state::IdentityId;

/// Inconsistency inside the roster backing a [`RosterOracle`](super::RosterOracle).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    /// The profile references an attribute sheet that is not stored.
    #[error("profile {identity} references missing attribute sheet {sheet}")]
    SheetNotFound { identity: IdentityId, sheet: String },
}

impl CombatError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SheetNotFound { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SheetNotFound { .. } => "ROSTER_SHEET_NOT_FOUND",
        }
    }
}
