//! In-memory combatant roster implementing [`combat_core::RosterOracle`].

use std::collections::{BTreeSet, HashMap};

use combat_core::{
    AttributeSheet, CombatantProfile, IdentityId, ResolvedCombatant, RosterError, RosterOracle,
};

/// Profiles and attribute sheets held in memory.
///
/// Both stores are upsert-only: writing an existing key replaces the stored
/// value. Several profiles may share one attribute sheet.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRoster {
    profiles: HashMap<IdentityId, CombatantProfile>,
    sheets: HashMap<String, AttributeSheet>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `sheet` under its id, returning the sheet it replaced.
    pub fn upsert_sheet(&mut self, sheet: AttributeSheet) -> Option<AttributeSheet> {
        self.sheets.insert(sheet.id.clone(), sheet)
    }

    pub fn sheet(&self, id: &str) -> Option<&AttributeSheet> {
        self.sheets.get(id)
    }

    /// Stores `profile` under its identity, returning the profile it replaced.
    pub fn upsert_profile(&mut self, profile: CombatantProfile) -> Option<CombatantProfile> {
        self.profiles.insert(profile.id.clone(), profile)
    }

    pub fn profile(&self, identity: &IdentityId) -> Option<&CombatantProfile> {
        self.profiles.get(identity)
    }

    /// Removes a profile. Its attribute sheet stays until
    /// [`delete_orphaned_sheets`](Self::delete_orphaned_sheets) runs.
    pub fn delete_profile(&mut self, identity: &IdentityId) -> Option<CombatantProfile> {
        self.profiles.remove(identity)
    }

    /// Attribute sheet ids referenced by at least one profile.
    pub fn sheet_ids_in_use(&self) -> BTreeSet<&str> {
        self.profiles
            .values()
            .map(|profile| profile.attribute_sheet_id.as_str())
            .collect()
    }

    /// Drops every sheet no profile references, returning the dropped ids sorted.
    pub fn delete_orphaned_sheets(&mut self) -> Vec<String> {
        let in_use: BTreeSet<String> = self
            .sheet_ids_in_use()
            .into_iter()
            .map(str::to_owned)
            .collect();

        let mut orphaned: Vec<String> = self
            .sheets
            .keys()
            .filter(|id| !in_use.contains(*id))
            .cloned()
            .collect();
        orphaned.sort();

        for id in &orphaned {
            self.sheets.remove(id);
        }
        orphaned
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

impl RosterOracle for InMemoryRoster {
    fn resolve(&self, identity: &IdentityId) -> Result<Option<ResolvedCombatant>, RosterError> {
        let Some(profile) = self.profiles.get(identity) else {
            return Ok(None);
        };
        let sheet = self
            .sheets
            .get(&profile.attribute_sheet_id)
            .ok_or_else(|| RosterError::SheetNotFound {
                identity: identity.clone(),
                sheet: profile.attribute_sheet_id.clone(),
            })?;

        Ok(Some(ResolvedCombatant {
            profile: profile.clone(),
            sheet: sheet.clone(),
        }))
    }
}
