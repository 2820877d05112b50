//! Append-only store of combat instances keyed by owning identity.

use std::collections::BTreeMap;

use combat_core::{
    ActionId, AttributeSheet, CombatConfig, CombatInstance, IdentityId, InstanceKey,
};

/// Every live combat instance, grouped by the identity that fielded it.
///
/// An identity may field several instances at once. Each one is addressed by
/// its position in the identity's list, assigned sequentially on creation.
/// Instances are never removed or reindexed, so an [`InstanceKey`] stays valid
/// for the lifetime of the registry.
///
/// Mutation is copy-on-write: [`update`](Self::update) hands the closure a
/// borrowed instance, and the slot is overwritten with the returned value in
/// one assignment.
#[derive(Clone, Debug, Default)]
pub struct CombatRegistry {
    config: CombatConfig,
    instances: BTreeMap<IdentityId, Vec<CombatInstance>>,
}

impl CombatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CombatConfig) -> Self {
        Self {
            config,
            instances: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Builds a fresh instance from `sheet` and appends it for `identity`.
    pub fn create_instance(
        &mut self,
        identity: IdentityId,
        name: impl Into<String>,
        sheet: &AttributeSheet,
        natural_actions: &[ActionId],
    ) -> InstanceKey {
        let instance = CombatInstance::new(name, sheet, natural_actions, &self.config);
        self.insert(identity, instance)
    }

    /// Appends an already built instance. The new index is the previous list length.
    pub fn insert(&mut self, identity: IdentityId, instance: CombatInstance) -> InstanceKey {
        let slots = self.instances.entry(identity.clone()).or_default();
        let index = slots.len();
        slots.push(instance);
        InstanceKey { identity, index }
    }

    pub fn get(&self, key: &InstanceKey) -> Option<&CombatInstance> {
        self.instances.get(&key.identity)?.get(key.index)
    }

    /// Instances fielded by `identity`, in creation order.
    pub fn instances(&self, identity: &IdentityId) -> &[CombatInstance] {
        self.instances
            .get(identity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn instance_count(&self, identity: &IdentityId) -> usize {
        self.instances(identity).len()
    }

    /// Computes a replacement for the instance at `key` and stores it.
    ///
    /// Returns `None` without calling `f` when the key is unknown.
    pub fn update<T>(
        &mut self,
        key: &InstanceKey,
        f: impl FnOnce(&CombatInstance) -> (CombatInstance, T),
    ) -> Option<T> {
        let slot = self
            .instances
            .get_mut(&key.identity)?
            .get_mut(key.index)?;
        let (next, output) = f(slot);
        *slot = next;
        Some(output)
    }

    /// Like [`update`](Self::update), but leaves the slot untouched when `f` fails.
    pub fn try_update<T, E>(
        &mut self,
        key: &InstanceKey,
        f: impl FnOnce(&CombatInstance) -> Result<(CombatInstance, T), E>,
    ) -> Option<Result<T, E>> {
        let slot = self
            .instances
            .get_mut(&key.identity)?
            .get_mut(key.index)?;
        Some(f(slot).map(|(next, output)| {
            *slot = next;
            output
        }))
    }

    /// Every key in identity order, then index order.
    pub fn keys(&self) -> impl Iterator<Item = InstanceKey> + '_ {
        self.instances.iter().flat_map(|(identity, slots)| {
            (0..slots.len()).map(move |index| InstanceKey::new(identity.clone(), index))
        })
    }

    /// Every `(key, instance)` pair in identity order, then index order.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceKey, &CombatInstance)> + '_ {
        self.instances.iter().flat_map(|(identity, slots)| {
            slots
                .iter()
                .enumerate()
                .map(move |(index, instance)| (InstanceKey::new(identity.clone(), index), instance))
        })
    }

    /// Total number of instances across all identities.
    pub fn len(&self) -> usize {
        self.instances.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
