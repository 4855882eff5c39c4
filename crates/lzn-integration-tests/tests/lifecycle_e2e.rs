//! End-to-end journey: identity verification, role upgrade, license
//! activation, compliance, rewards, and wind-down.

mod common;

use common::{ctx, proof_with_nullifier, seed_default_provider, verify_identity};
use lzn_core::{LznAmount, Params, Role};
use lzn_identity::msg::{handle_change_role, MsgChangeRole};
use lzn_identity::{query as identity_query, IdentityRegistry};
use lzn_license::custody::RecordingCustody;
use lzn_license::msg::{
    handle_activate_lzn, handle_deactivate_lzn, MsgActivateLzn, MsgDeactivateLzn,
};
use lzn_license::{query as license_query, rewards, LicenseLifecycle, MoaComplianceEngine};
use lzn_store::{MemStore, Store};
use lzn_zkp::SchnorrMockVerifier;

#[test]
fn citizen_to_validator_license_journey() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    let params = Params::default();
    seed_default_provider(&mut store);
    let registry = IdentityRegistry::new(SchnorrMockVerifier::new());
    let mut lifecycle = LicenseLifecycle::new(RecordingCustody::default());

    // Block 1: verify as citizen.
    let mut b1 = ctx(1, 100);
    verify_identity(&mut store, &mut b1, "validator1", "hash1", 0x11, "citizen").unwrap();
    let account = identity_query::verified_account(&store, "validator1")
        .unwrap()
        .unwrap();
    assert_eq!(account.role, Role::Citizen);

    // Block 2: upgrade to validator, re-proving over the same nullifier.
    let mut b2 = ctx(2, 200);
    handle_change_role(
        &registry,
        &mut store,
        &mut b2,
        &MsgChangeRole {
            address: "validator1".to_string(),
            new_role: "validator".to_string(),
            proof: proof_with_nullifier(0x11),
            fee: None,
        },
    )
    .unwrap();

    // Block 3: activate a license.
    let mut b3 = ctx(3, 300);
    handle_activate_lzn(
        &mut lifecycle,
        &mut store,
        &mut b3,
        &MsgActivateLzn {
            validator: "validator1".to_string(),
            amount: "5000000".to_string(),
            identity_hash: "hash1".to_string(),
        },
    )
    .unwrap();
    let lizenz = license_query::activated_lizenz(&store, "validator1")
        .unwrap()
        .unwrap();
    assert_eq!(lizenz.amount, LznAmount::from_units(5_000_000));
    assert!(lizenz.is_eligible_for_rewards);

    // Block 4: compliant sweep, then a reward.
    let mut b4 = ctx(4, 400);
    let sweep =
        MoaComplianceEngine::begin_block(&mut store, &mut b4, &params, &mut lifecycle).unwrap();
    assert_eq!(sweep.checked, 1);
    assert_eq!(sweep.expired, 0);
    assert!(license_query::moa_status(&store, "validator1")
        .unwrap()
        .unwrap()
        .is_compliant);

    let record = rewards::update_reward_stats(
        &mut store,
        &mut b4,
        &params,
        &lzn_core::Address::new("validator1").unwrap(),
        LznAmount::from_units(250),
    )
    .unwrap();
    assert!(!record.penalty_applied);
    let stats = license_query::reward_stats(&store, "validator1").unwrap();
    assert_eq!(stats.total_rewards_earned, LznAmount::from_units(250));
    assert_eq!(stats.last_reward_block, 4);

    // Block 5: manual deactivation enters the queue.
    let mut b5 = ctx(5, 500);
    handle_deactivate_lzn(
        &mut lifecycle,
        &mut store,
        &mut b5,
        &MsgDeactivateLzn {
            validator: "validator1".to_string(),
        },
    )
    .unwrap();
    assert!(license_query::activated_lizenz(&store, "validator1")
        .unwrap()
        .is_none());
    let queued = license_query::deactivating_lizenzes(&store, Default::default()).unwrap();
    assert_eq!(queued.total, 1);
    assert_eq!(queued.items[0].reason, "manual");

    // Once block time passes the deactivation end the sweep releases the
    // tokens.
    let release_at = 500 + params.deactivation_period_secs as i64 + 1;
    let mut b6 = ctx(6, release_at);
    let sweep =
        MoaComplianceEngine::begin_block(&mut store, &mut b6, &params, &mut lifecycle).unwrap();
    assert_eq!(sweep.released, 1);
    assert!(license_query::deactivating_lizenzes(&store, Default::default())
        .unwrap()
        .items
        .is_empty());

    // Custody saw exactly one lock and one unlock for this license.
    let ops: Vec<&str> = lifecycle.custody().calls.iter().map(|c| c.0).collect();
    assert_eq!(ops, vec!["lock", "unlock"]);
}

#[test]
fn guest_cannot_hold_a_license() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    seed_default_provider(&mut store);
    let mut lifecycle = LicenseLifecycle::new(RecordingCustody::default());

    let mut b1 = ctx(1, 100);
    verify_identity(&mut store, &mut b1, "citizen1", "hash1", 0x22, "citizen").unwrap();

    let err = handle_activate_lzn(
        &mut lifecycle,
        &mut store,
        &mut b1,
        &MsgActivateLzn {
            validator: "citizen1".to_string(),
            amount: "5000000".to_string(),
            identity_hash: "hash1".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, lzn_license::LicenseError::NotValidator(_)));
    assert!(lifecycle.custody().calls.is_empty());
}

#[test]
fn activation_bounds_are_enforced_at_the_message_layer() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    seed_default_provider(&mut store);
    let registry = IdentityRegistry::new(SchnorrMockVerifier::new());
    let mut lifecycle = LicenseLifecycle::new(RecordingCustody::default());

    let mut b1 = ctx(1, 100);
    verify_identity(&mut store, &mut b1, "validator1", "hash1", 0x33, "citizen").unwrap();
    handle_change_role(
        &registry,
        &mut store,
        &mut b1,
        &MsgChangeRole {
            address: "validator1".to_string(),
            new_role: "validator".to_string(),
            proof: proof_with_nullifier(0x33),
            fee: None,
        },
    )
    .unwrap();

    // Below the default 1_000_000 minimum.
    let err = handle_activate_lzn(
        &mut lifecycle,
        &mut store,
        &mut b1,
        &MsgActivateLzn {
            validator: "validator1".to_string(),
            amount: "999999".to_string(),
            identity_hash: "hash1".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, lzn_license::LicenseError::BelowMinimum { .. }));
    assert!(!store
        .has("activatedLizenz/validator1")
        .unwrap(), "failed activation leaves no record");
}
