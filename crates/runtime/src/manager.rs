//! Battle-facing facade over the registry and the roster.
//!
//! A battle orchestrator drives every combat operation through
//! [`CombatManager`]. Each operation addresses its target by
//! [`InstanceKey`]; an unknown key is a lookup miss and yields `None` without
//! touching any state.

use combat_core::{
    ActionPoints, AttributeSheet, CombatConfig, CombatInstance, CombatantProfile, Condition,
    CombatError, ConditionKind, Conditions, Damage, DamageOutcome, Healing, HealingOutcome,
    HitPoints, IdentityId, InstanceKey, RosterOracle, resolve_conditions, resolve_damage,
    resolve_healing,
};

use crate::error::Result;
use crate::registry::CombatRegistry;

/// One combat instance joined with the definition it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantView<'a> {
    pub key: InstanceKey,
    pub instance: &'a CombatInstance,
    pub profile: CombatantProfile,
    pub sheet: AttributeSheet,
}

/// Owns the combat registry and resolves new instances through a roster.
pub struct CombatManager<R> {
    roster: R,
    registry: CombatRegistry,
}

impl<R: RosterOracle> CombatManager<R> {
    pub fn new(roster: R) -> Self {
        Self::with_config(roster, CombatConfig::default())
    }

    pub fn with_config(roster: R, config: CombatConfig) -> Self {
        Self {
            roster,
            registry: CombatRegistry::with_config(config),
        }
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    /// Mutable roster access. Edits never reach instances already in battle.
    pub fn roster_mut(&mut self) -> &mut R {
        &mut self.roster
    }

    pub fn registry(&self) -> &CombatRegistry {
        &self.registry
    }

    // ===== lifecycle =====

    /// Enters `identity` into battle as a new instance.
    ///
    /// Returns `Ok(None)` if the roster does not know the identity.
    ///
    /// # Errors
    ///
    /// Fails if the roster holds the profile but not its attribute sheet.
    pub fn create_instance(&mut self, identity: &IdentityId) -> Result<Option<InstanceKey>> {
        let resolved = self
            .roster
            .resolve(identity)
            .inspect_err(|err| log_rejection("create_instance", identity, err))?;
        let Some(resolved) = resolved else {
            tracing::debug!("Cannot create instance: unknown identity {}", identity);
            return Ok(None);
        };

        let key = self.registry.create_instance(
            identity.clone(),
            resolved.profile.name.as_str(),
            &resolved.sheet,
            &resolved.profile.action_ids,
        );
        tracing::info!(
            "Created combat instance {} ({}, {} HP)",
            key,
            resolved.profile.name,
            resolved.sheet.max_hit_points
        );
        Ok(Some(key))
    }

    /// Looks up an instance together with its current profile and sheet.
    ///
    /// Returns `Ok(None)` if the instance is unknown or its identity has left
    /// the roster since the instance was created.
    ///
    /// # Errors
    ///
    /// Fails if the profile now points at an attribute sheet the roster lacks.
    pub fn combatant(&self, key: &InstanceKey) -> Result<Option<CombatantView<'_>>> {
        let Some(instance) = self.lookup(key) else {
            return Ok(None);
        };
        let resolved = self
            .roster
            .resolve(&key.identity)
            .inspect_err(|err| log_rejection("combatant", key, err))?;
        let Some(resolved) = resolved else {
            tracing::debug!("Instance {} has no roster entry", key);
            return Ok(None);
        };

        Ok(Some(CombatantView {
            key: key.clone(),
            instance,
            profile: resolved.profile,
            sheet: resolved.sheet,
        }))
    }

    pub fn instance(&self, key: &InstanceKey) -> Option<&CombatInstance> {
        self.lookup(key)
    }

    pub fn instance_count(&self, identity: &IdentityId) -> usize {
        self.registry.instance_count(identity)
    }

    // ===== damage & healing =====

    pub fn preview_damage(&self, key: &InstanceKey, damage: Damage) -> Option<DamageOutcome> {
        self.lookup(key)
            .map(|instance| instance.preview_damage(damage))
    }

    pub fn deal_damage(&mut self, key: &InstanceKey, damage: Damage) -> Option<DamageOutcome> {
        let committed = self.registry.update(key, |instance| {
            let (next, outcome) = resolve_damage(instance, damage);
            let change = (instance.hit_points, next.hit_points);
            (next, (outcome, change))
        });
        let Some((outcome, (before, after))) = committed else {
            log_miss(key, "deal_damage");
            return None;
        };
        tracing::debug!(
            "Instance {} took {} of {} damage: HP {}/{} -> {}/{} (ko: {})",
            key,
            outcome.net,
            outcome.raw,
            before.current,
            before.max,
            after.current,
            after.max,
            outcome.will_ko
        );
        Some(outcome)
    }

    pub fn preview_healing(&self, key: &InstanceKey, healing: Healing) -> Option<HealingOutcome> {
        self.lookup(key)
            .map(|instance| instance.preview_healing(healing))
    }

    pub fn give_healing(&mut self, key: &InstanceKey, healing: Healing) -> Option<HealingOutcome> {
        let committed = self.registry.update(key, |instance| {
            let (next, outcome) = resolve_healing(instance, healing);
            let change = (instance.hit_points, next.hit_points);
            (next, (outcome, change))
        });
        let Some((outcome, (before, after))) = committed else {
            log_miss(key, "give_healing");
            return None;
        };
        tracing::debug!(
            "Instance {} healed {} of {}: HP {}/{} -> {}/{}",
            key,
            outcome.net,
            healing.amount,
            before.current,
            before.max,
            after.current,
            after.max
        );
        Some(outcome)
    }

    // ===== conditions =====

    /// Reports which conditions of `batch` would be added.
    ///
    /// Returns `Ok(None)` for an unknown key.
    ///
    /// # Errors
    ///
    /// Fails if any condition in the batch is malformed.
    pub fn preview_conditions(
        &self,
        key: &InstanceKey,
        batch: &[Condition],
    ) -> Result<Option<Vec<Condition>>> {
        let Some(instance) = self.lookup(key) else {
            return Ok(None);
        };
        let added = instance
            .preview_conditions(batch)
            .inspect_err(|err| log_rejection("preview_conditions", key, err))?;
        Ok(Some(added))
    }

    /// Merges `batch` into the instance, one condition at a time.
    ///
    /// Returns the conditions actually added, or `Ok(None)` for an unknown
    /// key. A malformed batch leaves the instance untouched.
    pub fn add_conditions(
        &mut self,
        key: &InstanceKey,
        batch: &[Condition],
    ) -> Result<Option<Vec<Condition>>> {
        let Some(result) = self.registry.try_update(key, |instance| {
            let before = instance.conditions.len();
            resolve_conditions(instance, batch).map(|(next, added)| {
                let after = next.conditions.len();
                (next, (added, before, after))
            })
        }) else {
            log_miss(key, "add_conditions");
            return Ok(None);
        };

        let (added, before, after) =
            result.inspect_err(|err| log_rejection("add_conditions", key, err))?;
        tracing::debug!(
            "Instance {} gained {} of {} conditions: kinds {} -> {}",
            key,
            added.len(),
            batch.len(),
            before,
            after
        );
        Ok(Some(added))
    }

    pub fn conditions(&self, key: &InstanceKey) -> Option<&Conditions> {
        self.lookup(key).map(|instance| &instance.conditions)
    }

    pub fn has_condition(&self, key: &InstanceKey, kind: ConditionKind) -> Option<bool> {
        self.lookup(key)
            .map(|instance| instance.has_condition(kind))
    }

    /// Sum of stored amounts for `kind` on the instance.
    pub fn condition_total(&self, key: &InstanceKey, kind: ConditionKind) -> Option<i64> {
        self.lookup(key)
            .map(|instance| instance.conditions.total(kind))
    }

    // ===== resources =====

    pub fn hit_points(&self, key: &InstanceKey) -> Option<HitPoints> {
        self.lookup(key).map(|instance| instance.hit_points)
    }

    pub fn is_knocked_out(&self, key: &InstanceKey) -> Option<bool> {
        self.lookup(key).map(CombatInstance::is_knocked_out)
    }

    pub fn action_points(&self, key: &InstanceKey) -> Option<ActionPoints> {
        self.lookup(key).map(|instance| instance.action_points)
    }

    /// Spends action points, flooring at zero. Returns the remaining points.
    pub fn spend_action_points(&mut self, key: &InstanceKey, amount: u32) -> Option<ActionPoints> {
        let committed = self.registry.update(key, |instance| {
            let mut next = instance.clone();
            next.spend_action_points(amount);
            let change = (instance.action_points, next.action_points);
            (next, change)
        });
        let Some((before, after)) = committed else {
            log_miss(key, "spend_action_points");
            return None;
        };
        tracing::debug!(
            "Instance {} spent {} action points: AP {} -> {}",
            key,
            amount,
            before.current,
            after.current
        );
        Some(after)
    }

    /// Restores the configured action point allotment.
    pub fn reset_action_points(&mut self, key: &InstanceKey) -> Option<ActionPoints> {
        let config = self.registry.config().clone();
        let committed = self.registry.update(key, |instance| {
            let mut next = instance.clone();
            next.reset_action_points(&config);
            let change = (instance.action_points, next.action_points);
            (next, change)
        });
        let Some((before, after)) = committed else {
            log_miss(key, "reset_action_points");
            return None;
        };
        tracing::debug!(
            "Instance {} reset action points: AP {} -> {}",
            key,
            before.current,
            after.current
        );
        Some(after)
    }

    // ===== rounds =====

    /// Ages the instance's conditions by one round.
    ///
    /// Returns the condition kinds that expired entirely.
    pub fn advance_round(&mut self, key: &InstanceKey) -> Option<Vec<ConditionKind>> {
        let expired = self.registry.update(key, |instance| {
            let mut next = instance.clone();
            let expired = next.advance_round();
            (next, expired)
        });
        match &expired {
            Some(expired) if !expired.is_empty() => {
                tracing::debug!("Instance {} lost conditions {:?}", key, expired)
            }
            Some(_) => {}
            None => log_miss(key, "advance_round"),
        }
        expired
    }

    /// Ages every instance by one round, in identity then index order.
    ///
    /// Returns the instances that lost at least one condition kind.
    pub fn advance_all_rounds(&mut self) -> Vec<(InstanceKey, Vec<ConditionKind>)> {
        let keys: Vec<InstanceKey> = self.registry.keys().collect();
        keys.into_iter()
            .filter_map(|key| {
                let expired = self.advance_round(&key)?;
                (!expired.is_empty()).then_some((key, expired))
            })
            .collect()
    }

    fn lookup(&self, key: &InstanceKey) -> Option<&CombatInstance> {
        let instance = self.registry.get(key);
        if instance.is_none() {
            tracing::debug!("No combat instance at {}", key);
        }
        instance
    }
}

fn log_miss(key: &InstanceKey, operation: &str) {
    tracing::debug!("{}: no combat instance at {}", operation, key);
}

/// Internal inconsistencies log at error level, bad input at warn.
fn log_rejection(operation: &str, target: &dyn core::fmt::Display, err: &impl CombatError) {
    let severity = err.severity();
    if severity.is_internal() {
        tracing::error!(
            "{} failed for {} [{} {}]: {}",
            operation,
            target,
            severity.as_str(),
            err.error_code(),
            err
        );
    } else {
        tracing::warn!(
            "{} rejected for {} [{} {}]: {}",
            operation,
            target,
            severity.as_str(),
            err.error_code(),
            err
        );
    }
}
