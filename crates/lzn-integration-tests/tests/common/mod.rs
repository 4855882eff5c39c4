//! Shared scenario plumbing: provider seeding and message-level helpers.
#![allow(dead_code)]

use lzn_core::Timestamp;
use lzn_identity::msg::{handle_verify_identity, MsgVerifyIdentity};
use lzn_identity::IdentityRegistry;
use lzn_store::{BlockCtx, MemStore};
use lzn_zkp::provider::{register_provider, set_accreditation};
use lzn_zkp::{Accreditation, IdentityProof, SchnorrMockVerifier, VerificationProvider};

/// Fixed prover secret shared by all scenario identities; the provider is
/// registered with the matching public key.
pub const SECRET: u64 = 4_242;

pub fn ts(secs: i64) -> Timestamp {
    Timestamp::from_epoch_seconds(secs).unwrap()
}

pub fn ctx(height: u64, secs: i64) -> BlockCtx {
    BlockCtx::new(height, ts(secs))
}

/// A valid proof over a 32-byte nullifier filled with `tag`.
pub fn proof_with_nullifier(tag: u8) -> IdentityProof {
    SchnorrMockVerifier::prove(SECRET, 1_000 + u64::from(tag), vec![tag; 32], Vec::new()).unwrap()
}

/// Register `provider0` (the parameterized default) with the shared key.
pub fn seed_default_provider(store: &mut MemStore) {
    let key = proof_with_nullifier(1).public_key;
    register_provider(
        store,
        &VerificationProvider {
            provider_id: "provider0".to_string(),
            public_key: key,
            accreditation_hash: "acc01".to_string(),
            is_active: true,
            registration_time: ts(0),
            expiration_time: None,
        },
    )
    .unwrap();
    set_accreditation(
        store,
        &Accreditation {
            hash: "acc01".to_string(),
            valid: true,
            issued_at: ts(0),
        },
    )
    .unwrap();
}

/// Run the verification message for `address` with a fresh nullifier.
pub fn verify_identity(
    store: &mut MemStore,
    ctx: &mut BlockCtx,
    address: &str,
    identity_hash: &str,
    nullifier_tag: u8,
    role: &str,
) -> Result<(), lzn_identity::IdentityError> {
    let registry = IdentityRegistry::new(SchnorrMockVerifier::new());
    handle_verify_identity(
        &registry,
        store,
        ctx,
        &MsgVerifyIdentity {
            address: address.to_string(),
            identity_hash: identity_hash.to_string(),
            proof: proof_with_nullifier(nullifier_tag),
            verification_provider: String::new(),
            desired_role: role.to_string(),
            cost: None,
        },
    )
}
