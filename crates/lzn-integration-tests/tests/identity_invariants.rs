//! Cross-crate identity invariants: one identity per hash, one address
//! per nullifier, and migration semantics.

mod common;

use common::{ctx, proof_with_nullifier, seed_default_provider, verify_identity};
use lzn_core::{Address, Role};
use lzn_identity::migration::MIGRATION_COOLDOWN_SECS;
use lzn_identity::msg::{handle_migrate_role, MsgMigrateRole};
use lzn_identity::{query as identity_query, IdentityError, RoleMigrationEngine};
use lzn_store::MemStore;
use lzn_zkp::{ProofError, SchnorrMockVerifier};

#[test]
fn one_active_account_per_identity_hash() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    seed_default_provider(&mut store);

    let mut b1 = ctx(1, 100);
    verify_identity(&mut store, &mut b1, "addr1aaa", "hash1", 0x01, "citizen").unwrap();

    // Same document set, different address, fresh nullifier: rejected.
    let err = verify_identity(&mut store, &mut b1, "addr2bbb", "hash1", 0x02, "citizen")
        .unwrap_err();
    assert!(matches!(err, IdentityError::DuplicateIdentityHash { .. }));
    assert!(identity_query::verified_account(&store, "addr2bbb")
        .unwrap()
        .is_none());
}

#[test]
fn nullifier_binds_to_the_first_address_forever() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    seed_default_provider(&mut store);

    let mut b1 = ctx(1, 100);
    verify_identity(&mut store, &mut b1, "addr1aaa", "hash1", 0x07, "citizen").unwrap();

    // Same nullifier presented by a different address.
    let err = verify_identity(&mut store, &mut b1, "addr2bbb", "hash2", 0x07, "citizen")
        .unwrap_err();
    assert!(matches!(
        err,
        IdentityError::Proof(ProofError::NullifierReused { .. })
    ));
}

#[test]
fn identical_proof_cannot_be_replayed_by_another_address() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    seed_default_provider(&mut store);
    let registry = lzn_identity::IdentityRegistry::new(SchnorrMockVerifier::new());

    let mut b1 = ctx(1, 100);
    let msg = lzn_identity::MsgVerifyIdentity {
        address: "addr1aaa".to_string(),
        identity_hash: "hash1".to_string(),
        proof: proof_with_nullifier(0x09),
        verification_provider: String::new(),
        desired_role: "citizen".to_string(),
        cost: None,
    };
    lzn_identity::msg::handle_verify_identity(&registry, &mut store, &mut b1, &msg).unwrap();

    let replay = lzn_identity::MsgVerifyIdentity {
        address: "addr2bbb".to_string(),
        identity_hash: "hash2".to_string(),
        ..msg
    };
    let err = lzn_identity::msg::handle_verify_identity(&registry, &mut store, &mut b1, &replay)
        .unwrap_err();
    assert!(matches!(
        err,
        IdentityError::Proof(ProofError::ProofReplayed { .. })
    ));
}

#[test]
fn migration_transfers_identity_and_respects_cooldown() {
    lzn_integration_tests::init_tracing();
    let mut store = MemStore::new();
    seed_default_provider(&mut store);
    let engine = RoleMigrationEngine::new(SchnorrMockVerifier::new());

    let mut b1 = ctx(1, 0);
    verify_identity(&mut store, &mut b1, "addr1old", "hash1", 0x10, "citizen").unwrap();

    let from = Address::new("addr1old").unwrap();
    let to = Address::new("addr2new").unwrap();
    let migrate = MsgMigrateRole {
        from_address: "addr1old".to_string(),
        to_address: "addr2new".to_string(),
        proof: SchnorrMockVerifier::prove_migration(common::SECRET, 77, vec![0x20; 32], &from, &to)
            .unwrap(),
        fee: None,
    };

    // Too early.
    let mut b2 = ctx(2, 100);
    let err = handle_migrate_role(&engine, &mut store, &mut b2, &migrate).unwrap_err();
    assert!(matches!(err, IdentityError::MigrationCooldown { .. }));

    // Past the cooldown.
    let mut b3 = ctx(3, MIGRATION_COOLDOWN_SECS + 1);
    handle_migrate_role(&engine, &mut store, &mut b3, &migrate).unwrap();

    let old = identity_query::verified_account(&store, "addr1old")
        .unwrap()
        .unwrap();
    assert!(!old.is_active, "source survives, deactivated");

    let new = identity_query::verified_account(&store, "addr2new")
        .unwrap()
        .unwrap();
    assert!(new.is_active);
    assert_eq!(new.role, Role::Citizen);
    assert_eq!(new.identity_hash, old.identity_hash);

    // The freed hash still cannot be claimed by a third address while the
    // migrated account holds it.
    let err = verify_identity(&mut store, &mut b3, "addr3mal", "hash1", 0x30, "citizen")
        .unwrap_err();
    assert!(matches!(err, IdentityError::DuplicateIdentityHash { .. }));
}
