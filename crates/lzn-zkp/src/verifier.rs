//! # Proof Verifier (Sealed)
//!
//! The verification interface consumed by the identity registry, and the
//! shipped Schnorr-style backend.
//!
//! ## Sealed Trait
//!
//! [`ProofVerifier`] is **sealed**: only implementations defined within
//! `lzn-zkp` can exist. External crates cannot implement it, which prevents
//! an unauthorized verifier from being injected into the identity state
//! machine. Substituting a real zero-knowledge backend means adding it
//! here, behind the same seal.

use lzn_core::{Address, Nullifier};
use lzn_store::{BlockCtx, Store};

use crate::error::ProofError;
use crate::group;
use crate::merkle;
use crate::nullifier;
use crate::proof::{IdentityProof, MembershipProof, MIN_PROOF_MATERIAL_LEN};
use crate::provider;
use crate::replay;

/// Private module that seals the [`ProofVerifier`] trait.
mod private {
    /// Sealing marker trait. Not accessible outside `lzn-zkp`.
    pub trait Sealed {}
}

/// Sealed trait defining identity proof verification.
///
/// All three operations are gate checks for identity-affecting state
/// transitions; on success they persist the consumed nullifier or proof
/// hash, so a passing verification is itself a state mutation.
pub trait ProofVerifier: private::Sealed {
    /// Verify an identity proof for `claimed` and consume its nullifier.
    ///
    /// Verification order (each step fails with its own
    /// [`ProofError`] kind):
    ///
    /// 1. structural validation (`MalformedProof`);
    /// 2. nullifier-uniqueness precheck (`NullifierReused`);
    /// 3. challenge recomputation and the proof equation
    ///    `g^response ≡ commitment · publicKey^challenge` (`InvalidProof`);
    /// 4. Merkle membership of `SHA-256(nullifier)` (`MembershipNotProven`);
    /// 5. nullifier consumption, invariant re-checked atomically with the
    ///    write.
    fn verify_identity_proof<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        proof: &IdentityProof,
        claimed: &Address,
    ) -> Result<(), ProofError>;

    /// Integrity pass for provider-mediated verification: minimum proof
    /// material size, provider key cross-check, and replay registration
    /// keyed by the proof hash.
    fn verify_proof_integrity<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        proof: &IdentityProof,
        provider_id: &str,
        address: &Address,
    ) -> Result<(), ProofError>;

    /// Verify a migration proof: a full identity verification for `from`
    /// plus an authorization binding of the proof to the `(from, to)` pair.
    ///
    /// Account-level migration rules (target absence, cooldown, role
    /// eligibility) live with the account state in the identity registry.
    fn verify_role_migration<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        proof: &IdentityProof,
        from: &Address,
        to: &Address,
    ) -> Result<(), ProofError>;
}

/// The shipped Schnorr-style verifier over the fixed 64-bit prime group.
///
/// Deliberately not a production zero-knowledge scheme (see the crate
/// docs); the registries around it are the production surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchnorrMockVerifier;

impl SchnorrMockVerifier {
    /// Create a verifier.
    pub fn new() -> Self {
        Self
    }

    /// The byte material a migration proof must be bound to.
    fn migration_binding(from: &Address, to: &Address) -> Vec<u8> {
        let mut material = Vec::with_capacity(from.as_str().len() + to.as_str().len() + 1);
        material.extend_from_slice(from.as_str().as_bytes());
        material.push(b'|');
        material.extend_from_slice(to.as_str().as_bytes());
        material
    }

    /// Cryptographic core: challenge recomputation plus the proof equation.
    fn verify_equation(&self, proof: &IdentityProof) -> Result<(), ProofError> {
        let commitment = group::decode_element("commitment", &proof.commitment)?;
        let public_key = group::decode_element("public_key", &proof.public_key)?;
        let supplied = group::decode_exponent("challenge", &proof.challenge)?;
        let response = group::decode_exponent("response", &proof.response)?;

        if supplied == 0 {
            return Err(ProofError::InvalidProof("zero challenge".to_string()));
        }
        let expected = group::challenge(&proof.commitment, &proof.public_key);
        if supplied != expected {
            return Err(ProofError::InvalidProof(
                "challenge does not match commitment and public key".to_string(),
            ));
        }

        let lhs = group::modpow(group::GENERATOR, response);
        let rhs = group::mulmod(commitment, group::modpow(public_key, supplied));
        if lhs != rhs {
            return Err(ProofError::InvalidProof(
                "proof equation does not hold".to_string(),
            ));
        }
        Ok(())
    }

    /// Construct a valid proof from a secret and nonce.
    ///
    /// `extra_leaves` lets migration callers add their binding leaf. This
    /// is provider-side tooling: on-chain code only ever verifies.
    pub fn prove(
        secret: u64,
        nonce: u64,
        nullifier_bytes: Vec<u8>,
        extra_leaves: Vec<[u8; 32]>,
    ) -> Result<IdentityProof, ProofError> {
        let secret = secret % (group::MODULUS - 1);
        let nonce = nonce % (group::MODULUS - 1);

        let public_key = group::modpow(group::GENERATOR, secret);
        let commitment = group::modpow(group::GENERATOR, nonce);
        let commitment_bytes = group::encode(commitment);
        let public_key_bytes = group::encode(public_key);

        let c = group::challenge(&commitment_bytes, &public_key_bytes);
        // response = nonce + c * secret, in the exponent group of order p-1.
        let order = u128::from(group::MODULUS - 1);
        let response =
            ((u128::from(nonce) + u128::from(c) * u128::from(secret) % order) % order) as u64;

        let nullifier = Nullifier::new(nullifier_bytes.clone())?;
        let mut leaves = vec![group::nullifier_leaf(&nullifier)];
        leaves.extend(extra_leaves);
        let membership = MembershipProof {
            root: [0; 32],
            leaves,
        };

        Ok(IdentityProof {
            commitment: commitment_bytes,
            challenge: group::encode(c),
            response: group::encode(response),
            public_key: public_key_bytes,
            nullifier: nullifier_bytes,
            membership,
        })
    }

    /// [`Self::prove`] plus the migration binding leaf for `(from, to)`.
    pub fn prove_migration(
        secret: u64,
        nonce: u64,
        nullifier_bytes: Vec<u8>,
        from: &Address,
        to: &Address,
    ) -> Result<IdentityProof, ProofError> {
        use sha2::{Digest, Sha256};
        let binding: [u8; 32] = Sha256::digest(Self::migration_binding(from, to)).into();
        Self::prove(secret, nonce, nullifier_bytes, vec![binding])
    }
}

impl private::Sealed for SchnorrMockVerifier {}

impl ProofVerifier for SchnorrMockVerifier {
    fn verify_identity_proof<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        proof: &IdentityProof,
        claimed: &Address,
    ) -> Result<(), ProofError> {
        let nullifier = proof.validate_structure()?;
        nullifier::check(store, &nullifier, claimed)?;
        self.verify_equation(proof)?;
        merkle::verify_membership(&proof.membership, &nullifier)?;
        // The write path re-checks the binding against anything consumed
        // earlier in this block-execution pass.
        nullifier::consume(store, ctx, &nullifier, claimed)?;

        tracing::debug!(
            address = %claimed,
            nullifier = %nullifier.to_hex(),
            height = ctx.height,
            "identity proof verified"
        );
        Ok(())
    }

    fn verify_proof_integrity<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        proof: &IdentityProof,
        provider_id: &str,
        address: &Address,
    ) -> Result<(), ProofError> {
        proof.validate_structure()?;
        if proof.material_len() < MIN_PROOF_MATERIAL_LEN {
            return Err(ProofError::MalformedProof(format!(
                "proof material too short: {} < {MIN_PROOF_MATERIAL_LEN} bytes",
                proof.material_len()
            )));
        }

        // Illustrative key cross-check, not a signature scheme: when the
        // provider's key is on record, the proof must carry it.
        let provider = provider::verify_provider(store, ctx, provider_id)?;
        if !provider.public_key.is_empty() && provider.public_key != proof.public_key {
            return Err(ProofError::InvalidProof(
                "proof public key does not match provider key".to_string(),
            ));
        }

        let proof_hash = proof.proof_hash_hex()?;
        replay::register(store, ctx, &proof_hash, address, provider_id)
    }

    fn verify_role_migration<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        proof: &IdentityProof,
        from: &Address,
        to: &Address,
    ) -> Result<(), ProofError> {
        self.verify_identity_proof(store, ctx, proof, from)?;
        merkle::verify_binding(&proof.membership, &Self::migration_binding(from, to))
    }
}
