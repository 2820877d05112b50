use combat_core::{
    ActionId, AttributeSheet, CombatError, CombatantProfile, Condition, ConditionEntry,
    ConditionKind, Damage, DamageOutcome, ErrorSeverity, Healing, HitPoints, IdentityId,
    InstanceKey,
};
use combat_runtime::{CombatManager, InMemoryRoster, RuntimeError};

fn roster() -> InMemoryRoster {
    let mut roster = InMemoryRoster::new();
    roster.upsert_sheet(AttributeSheet::builder("soldier").max_hit_points(5).build());
    roster.upsert_sheet(AttributeSheet::builder("brute").max_hit_points(12).rank(2).build());
    roster.upsert_profile(
        CombatantProfile::new("squaddie", "Squaddie", "soldier")
            .with_actions([ActionId(0), ActionId(2), ActionId(3)]),
    );
    roster.upsert_profile(CombatantProfile::new("ogre", "Ogre", "brute"));
    roster
}

fn squaddie() -> IdentityId {
    IdentityId::new("squaddie")
}

/// One identity fielding two instances at once
///
/// 1. Two instances of the same identity get indices 0 and 1
/// 2. Damage, conditions and action points on one never leak into the other
/// 3. Editing the roster sheet afterwards does not reach either instance
#[test]
fn test_twin_instances_are_independent() {
    let mut manager = CombatManager::new(roster());

    let first = manager.create_instance(&squaddie()).unwrap().unwrap();
    let second = manager.create_instance(&squaddie()).unwrap().unwrap();
    assert_eq!(first, InstanceKey::new("squaddie", 0));
    assert_eq!(second, InstanceKey::new("squaddie", 1));
    assert_eq!(manager.instance_count(&squaddie()), 2);

    // ================================================================
    // Mutate only the second instance
    // ================================================================
    manager
        .add_conditions(
            &second,
            &[Condition::flag(ConditionKind::Elusive, Some(2))],
        )
        .unwrap()
        .unwrap();
    manager.deal_damage(&second, Damage::new(4)).unwrap();
    manager.spend_action_points(&second, 2).unwrap();

    assert_eq!(manager.hit_points(&first), Some(HitPoints::full(5)));
    assert_eq!(
        manager.hit_points(&second),
        Some(HitPoints { current: 1, max: 5 })
    );
    assert_eq!(manager.has_condition(&first, ConditionKind::Elusive), Some(false));
    assert_eq!(manager.has_condition(&second, ConditionKind::Elusive), Some(true));
    assert_eq!(manager.action_points(&first).map(|ap| ap.current), Some(3));
    assert_eq!(manager.action_points(&second).map(|ap| ap.current), Some(1));

    // ================================================================
    // Roster edits stay out of battle
    // ================================================================
    manager
        .roster_mut()
        .upsert_sheet(AttributeSheet::builder("soldier").max_hit_points(40).build());
    assert_eq!(manager.hit_points(&first).map(|hp| hp.max), Some(5));

    // A third instance picks up the new sheet.
    let third = manager.create_instance(&squaddie()).unwrap().unwrap();
    assert_eq!(third.index, 2);
    assert_eq!(manager.hit_points(&third), Some(HitPoints::full(40)));
}

/// Absorb shield soaks a hit
///
/// Absorb 5 against 3 damage: the preview shows no HP loss, the commit
/// matches it and leaves 2 points of shield behind.
#[test]
fn test_absorb_preview_then_commit() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();

    let added = manager
        .add_conditions(&key, &[Condition::magnitude(ConditionKind::Absorb, 5, None)])
        .unwrap()
        .unwrap();
    assert_eq!(added.len(), 1);

    let preview = manager.preview_damage(&key, Damage::new(3)).unwrap();
    assert_eq!(
        preview,
        DamageOutcome {
            net: 0,
            raw: 3,
            will_ko: false
        }
    );
    assert_eq!(manager.condition_total(&key, ConditionKind::Absorb), Some(5));

    let committed = manager.deal_damage(&key, Damage::new(3)).unwrap();
    assert_eq!(committed, preview);
    assert_eq!(
        manager.conditions(&key).unwrap().get(ConditionKind::Absorb),
        &[ConditionEntry::magnitude(2, None)]
    );
    assert_eq!(manager.hit_points(&key), Some(HitPoints::full(5)));
}

/// Knock out and revive
#[test]
fn test_knockout_and_revive() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&IdentityId::new("ogre")).unwrap().unwrap();

    let heal_preview = manager.preview_healing(&key, Healing::new(5)).unwrap();
    assert_eq!(heal_preview.net, 0);

    let outcome = manager.deal_damage(&key, Damage::new(30)).unwrap();
    assert_eq!(outcome.net, 12);
    assert!(outcome.will_ko);
    assert_eq!(manager.is_knocked_out(&key), Some(true));

    let healed = manager.give_healing(&key, Healing::new(5)).unwrap();
    assert_eq!(healed.net, 5);
    assert_eq!(manager.is_knocked_out(&key), Some(false));
    assert_eq!(manager.hit_points(&key).map(|hp| hp.current), Some(5));
}

/// Round advance over a mixed condition set
///
/// Elusive 2, Armor -2/1 and -3/1, Absorb 4/indefinite and 7/1. After one
/// round only Elusive (1 round left) and the indefinite Absorb remain.
#[test]
fn test_round_advance_expires_conditions() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();

    manager
        .add_conditions(
            &key,
            &[
                Condition::flag(ConditionKind::Elusive, Some(2)),
                Condition::magnitude(ConditionKind::Armor, -2, Some(1)),
                Condition::magnitude(ConditionKind::Armor, -3, Some(1)),
                Condition::magnitude(ConditionKind::Absorb, 4, None),
                Condition::magnitude(ConditionKind::Absorb, 7, Some(1)),
            ],
        )
        .unwrap()
        .unwrap();

    let expired = manager.advance_round(&key).unwrap();
    assert_eq!(expired, vec![ConditionKind::Armor]);

    let conditions = manager.conditions(&key).unwrap();
    assert_eq!(conditions.len(), 2);
    assert_eq!(
        conditions.get(ConditionKind::Elusive),
        &[ConditionEntry::flag(Some(1))]
    );
    assert_eq!(
        conditions.get(ConditionKind::Absorb),
        &[ConditionEntry::magnitude(4, None)]
    );

    // Second round drops Elusive; the indefinite Absorb then stays put.
    assert_eq!(manager.advance_round(&key), Some(vec![ConditionKind::Elusive]));
    let settled = manager.conditions(&key).cloned();
    assert_eq!(manager.advance_round(&key), Some(vec![]));
    assert_eq!(manager.conditions(&key).cloned(), settled);
}

#[test]
fn test_advance_all_rounds_reports_expirations() {
    let mut manager = CombatManager::new(roster());
    let ogre = manager.create_instance(&IdentityId::new("ogre")).unwrap().unwrap();
    let first = manager.create_instance(&squaddie()).unwrap().unwrap();
    let second = manager.create_instance(&squaddie()).unwrap().unwrap();

    manager
        .add_conditions(&ogre, &[Condition::magnitude(ConditionKind::Armor, 2, Some(1))])
        .unwrap();
    manager
        .add_conditions(&second, &[Condition::flag(ConditionKind::Elusive, Some(1))])
        .unwrap();
    manager
        .add_conditions(&first, &[Condition::flag(ConditionKind::Elusive, None)])
        .unwrap();

    let expired = manager.advance_all_rounds();
    assert_eq!(
        expired,
        vec![
            (ogre, vec![ConditionKind::Armor]),
            (second, vec![ConditionKind::Elusive]),
        ]
    );
    assert_eq!(manager.has_condition(&first, ConditionKind::Elusive), Some(true));
}

/// Armor batch keeps a frontier of buffs and debuffs
#[test]
fn test_armor_batch_reports_new_conditions() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();

    let batch = [
        Condition::magnitude(ConditionKind::Armor, -2, Some(1)),
        Condition::magnitude(ConditionKind::Armor, -2, Some(2)),
        Condition::magnitude(ConditionKind::Armor, 1, Some(1)),
        Condition::magnitude(ConditionKind::Armor, 1, Some(10)),
    ];
    let previewed = manager.preview_conditions(&key, &batch).unwrap().unwrap();
    assert!(manager.conditions(&key).unwrap().is_empty());

    let added = manager.add_conditions(&key, &batch).unwrap().unwrap();
    assert_eq!(added, previewed);
    assert_eq!(
        manager.conditions(&key).unwrap().get(ConditionKind::Armor),
        &[
            ConditionEntry::magnitude(-2, Some(2)),
            ConditionEntry::magnitude(1, Some(10)),
        ]
    );
    assert_eq!(manager.condition_total(&key, ConditionKind::Armor), Some(-1));

    // Re-applying a dominated entry adds nothing.
    let again = manager
        .add_conditions(&key, &[Condition::magnitude(ConditionKind::Armor, 1, Some(3))])
        .unwrap()
        .unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_malformed_batch_is_rejected_whole() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();

    let batch = [
        Condition::magnitude(ConditionKind::Absorb, 3, None),
        Condition::new(ConditionKind::Elusive, ConditionEntry::magnitude(1, Some(2))),
    ];
    let err = manager.add_conditions(&key, &batch).unwrap_err();

    assert!(matches!(err, RuntimeError::Condition(_)));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.error_code(), "CONDITION_AMOUNT_ON_BINARY");
    assert!(manager.conditions(&key).unwrap().is_empty());
    assert!(manager.preview_conditions(&key, &batch).is_err());
}

#[test]
fn test_orphaned_profile_hides_view() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();

    manager.roster_mut().delete_profile(&squaddie());
    assert_eq!(manager.roster_mut().delete_orphaned_sheets(), vec!["soldier"]);

    // The instance survives; only the joined view disappears.
    assert!(manager.combatant(&key).unwrap().is_none());
    assert_eq!(manager.hit_points(&key), Some(HitPoints::full(5)));
    assert_eq!(manager.create_instance(&squaddie()), Ok(None));
}

#[test]
fn test_instance_snapshot_serializes() {
    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();
    manager
        .add_conditions(
            &key,
            &[
                Condition::magnitude(ConditionKind::Absorb, 2, Some(3)),
                Condition::flag(ConditionKind::Elusive, None),
            ],
        )
        .unwrap();
    manager.deal_damage(&key, Damage::new(4)).unwrap();

    let instance = manager.instance(&key).unwrap();
    let json = serde_json::to_string(instance).unwrap();
    let restored: combat_core::CombatInstance = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, instance);
}

/// Overfull snapshot is clamped on load
///
/// A stored meter with `current > max` comes back clamped to `max`, so a
/// later heal neither underflows nor reports a gain.
#[test]
fn test_overfull_snapshot_is_clamped_on_load() {
    let hit_points: HitPoints = serde_json::from_str(r#"{"current":9,"max":5}"#).unwrap();
    assert_eq!(hit_points, HitPoints::full(5));

    let mut manager = CombatManager::new(roster());
    let key = manager.create_instance(&squaddie()).unwrap().unwrap();
    let json = serde_json::to_string(manager.instance(&key).unwrap()).unwrap();
    let tampered = json.replace(r#""current":5,"max":5"#, r#""current":9,"max":5"#);
    assert_ne!(tampered, json);

    let mut restored: combat_core::CombatInstance = serde_json::from_str(&tampered).unwrap();
    assert_eq!(restored.hit_points, HitPoints::full(5));
    assert_eq!(restored.preview_healing(Healing::new(3)).net, 0);
    assert_eq!(restored.commit_healing(Healing::new(3)).net, 0);
    assert_eq!(restored.hit_points, HitPoints::full(5));
}
