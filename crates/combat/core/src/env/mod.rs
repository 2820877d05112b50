//! Read-only view of the combatant roster.
//!
//! Profiles and attribute sheets live outside the combat engine. The engine
//! only needs to resolve an identity to its definition when a new instance
//! enters battle, so the roster is abstracted behind [`RosterOracle`].

mod error;

pub use error::RosterError;

use crate::sheet::AttributeSheet;
use crate::state::{ActionId, IdentityId};

/// Static definition of a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantProfile {
    pub id: IdentityId,
    pub name: String,
    /// Key of the [`AttributeSheet`] this combatant is built from.
    pub attribute_sheet_id: String,
    /// Actions every instance of this combatant knows innately.
    pub action_ids: Vec<ActionId>,
}

impl CombatantProfile {
    pub fn new(
        id: impl Into<IdentityId>,
        name: impl Into<String>,
        attribute_sheet_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attribute_sheet_id: attribute_sheet_id.into(),
            action_ids: Vec::new(),
        }
    }

    pub fn with_actions(mut self, action_ids: impl IntoIterator<Item = ActionId>) -> Self {
        self.action_ids = action_ids.into_iter().collect();
        self
    }
}

/// A profile together with the attribute sheet it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedCombatant {
    pub profile: CombatantProfile,
    pub sheet: AttributeSheet,
}

/// Source of combatant definitions.
pub trait RosterOracle {
    /// Looks up the profile and sheet for `identity`.
    ///
    /// Returns `Ok(None)` when the identity is unknown.
    ///
    /// # Errors
    ///
    /// [`RosterError::SheetNotFound`] if the profile exists but its sheet does not.
    fn resolve(&self, identity: &IdentityId) -> Result<Option<ResolvedCombatant>, RosterError>;
}

impl<T: RosterOracle + ?Sized> RosterOracle for &T {
    fn resolve(&self, identity: &IdentityId) -> Result<Option<ResolvedCombatant>, RosterError> {
        (**self).resolve(identity)
    }
}
