//! # Identity Registry
//!
//! The service owning [`VerifiedAccount`] state. Two invariants live here
//! and nowhere else:
//!
//! - **one identity hash per active account** — the registry-layer Sybil
//!   check, enforced independently of the nullifier layer;
//! - **monotonic role upgrades** — decided by [`Role::can_transition_to`].
//!
//! The registry is constructed with its proof verifier and passed by
//! reference through call chains; there is no module-global keeper.

use lzn_core::{Address, Event, Params, Role, Timestamp};
use lzn_store::{codec, keys, BlockCtx, Store};
use lzn_zkp::{IdentityProof, ProofVerifier};

use crate::account::{VerificationRecord, VerifiedAccount};
use crate::error::IdentityError;

/// The identity-verification and account-state service.
#[derive(Debug, Clone)]
pub struct IdentityRegistry<V: ProofVerifier> {
    verifier: V,
}

impl<V: ProofVerifier> IdentityRegistry<V> {
    /// Construct a registry around a proof verifier.
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// The registry's proof verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Load the account at `address`, if present.
    pub fn get_account<S: Store>(
        store: &S,
        address: &Address,
    ) -> Result<Option<VerifiedAccount>, IdentityError> {
        Ok(codec::get_record(store, &keys::account(address))?)
    }

    /// Store a verified account, enforcing the registry invariants.
    ///
    /// # Errors
    ///
    /// - [`IdentityError::InvalidRole`] — role is `Unspecified` or `Guest`.
    /// - [`IdentityError::DuplicateIdentityHash`] — the identity hash is
    ///   already bound to a *different* active account. Overwriting the
    ///   same address (activity refresh, role change) is permitted.
    pub fn set_verified_account<S: Store>(
        store: &mut S,
        account: &VerifiedAccount,
    ) -> Result<(), IdentityError> {
        if !account.role.is_verified_role() {
            return Err(IdentityError::InvalidRole(account.role));
        }

        // Registry-layer Sybil check: scan active accounts for the hash.
        let all: Vec<(String, VerifiedAccount)> =
            codec::scan_records(store, keys::ACCOUNT_PREFIX)?;
        for (_, existing) in all {
            if existing.is_active
                && existing.identity_hash == account.identity_hash
                && existing.address != account.address
            {
                return Err(IdentityError::DuplicateIdentityHash {
                    identity_hash: account.identity_hash.clone(),
                    held_by: existing.address,
                });
            }
        }

        codec::set_record(store, &keys::account(&account.address), account)?;
        Ok(())
    }

    /// Upgrade an account's role.
    ///
    /// # Errors
    ///
    /// - [`IdentityError::AccountNotFound`] — no account at the address.
    /// - [`IdentityError::AccountInactive`] — account is deactivated.
    /// - [`IdentityError::RoleChangeNotAllowed`] — transition outside the
    ///   upgrade lattice (downgrades, re-assignment).
    pub fn change_account_role<S: Store>(
        &self,
        store: &mut S,
        ctx: &mut BlockCtx,
        address: &Address,
        new_role: Role,
    ) -> Result<(), IdentityError> {
        let mut account = Self::get_account(store, address)?
            .ok_or_else(|| IdentityError::AccountNotFound(address.clone()))?;
        if !account.is_active {
            return Err(IdentityError::AccountInactive(address.clone()));
        }
        if !account.role.can_transition_to(new_role) {
            return Err(IdentityError::RoleChangeNotAllowed {
                from: account.role,
                to: new_role,
            });
        }

        let from = account.role;
        account.role = new_role;
        account.last_active = ctx.time;
        codec::set_record(store, &keys::account(address), &account)?;

        ctx.emit(Event::RoleChanged {
            address: address.clone(),
            from,
            to: new_role,
        });
        tracing::info!(address = %address, from = %from, to = %new_role, "account role changed");
        Ok(())
    }

    /// Validate an identity-verification request end to end, without
    /// creating state beyond the replay registration.
    ///
    /// Composes: role-choice validity, provider validity (active,
    /// unexpired, accredited), and the proof-integrity pass.
    pub fn validate_verification_request<S: Store>(
        &self,
        store: &mut S,
        ctx: &BlockCtx,
        address: &Address,
        proof: &IdentityProof,
        provider_id: &str,
        desired_role: Role,
    ) -> Result<(), IdentityError> {
        if !desired_role.is_verified_role() {
            return Err(IdentityError::InvalidRoleChoice(desired_role));
        }
        self.verifier
            .verify_proof_integrity(store, ctx, proof, provider_id, address)?;
        Ok(())
    }

    /// The full identity-verification flow: validation, proof
    /// verification, account creation, audit record, event.
    ///
    /// # Errors
    ///
    /// Fails closed before any account write; see the per-step methods for
    /// the error kinds.
    pub fn verify_identity<S: Store>(
        &self,
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &Params,
        address: &Address,
        identity_hash: lzn_core::IdentityHash,
        proof: &IdentityProof,
        provider_id: &str,
        desired_role: Role,
    ) -> Result<(), IdentityError> {
        params.validate()?;

        if Self::get_account(store, address)?.is_some() {
            return Err(IdentityError::AccountAlreadyExists(address.clone()));
        }

        self.validate_verification_request(store, ctx, address, proof, provider_id, desired_role)?;
        self.verifier
            .verify_identity_proof(store, ctx, proof, address)?;

        let account = VerifiedAccount {
            address: address.clone(),
            role: desired_role,
            identity_hash: identity_hash.clone(),
            is_active: true,
            last_active: ctx.time,
            verification_provider: provider_id.to_string(),
            verification_date: ctx.time,
        };
        Self::set_verified_account(store, &account)?;

        let record = VerificationRecord {
            address: address.clone(),
            provider_id: provider_id.to_string(),
            identity_hash,
            proof_hash: proof.proof_hash_hex()?,
            verified_at: ctx.time,
        };
        codec::set_record(store, &keys::verification_record(address), &record)?;

        ctx.emit(Event::IdentityVerified {
            address: address.clone(),
            role: desired_role,
            provider_id: provider_id.to_string(),
        });
        tracing::info!(
            address = %address,
            role = %desired_role,
            provider = provider_id,
            "identity verified"
        );
        Ok(())
    }
}

/// Refresh `last_active` on the account at `address`.
///
/// No-op if the address holds no account — activity refresh is a side
/// effect of unrelated messages and must not fail them. Free-standing
/// because it needs no verifier.
pub fn touch_account<S: Store>(
    store: &mut S,
    now: Timestamp,
    address: &Address,
) -> Result<(), IdentityError> {
    if let Some(mut account) =
        codec::get_record::<S, VerifiedAccount>(store, &keys::account(address))?
    {
        account.last_active = now;
        codec::set_record(store, &keys::account(address), &account)?;
    }
    Ok(())
}
