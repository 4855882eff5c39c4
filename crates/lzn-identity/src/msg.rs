//! # Message Surface
//!
//! Transaction-shaped entry points. Messages carry the caller's raw
//! strings; the handlers parse them into domain types at this boundary, so
//! every input-validation error surfaces here and the layers beneath only
//! ever see validated values.
//!
//! Each handler loads and validates [`Params`] from the store before
//! touching any other state.

use std::str::FromStr;

use lzn_core::{Address, Fee, IdentityHash, LznAmount, Role};
use lzn_store::{params, BlockCtx, Store};
use lzn_zkp::{IdentityProof, ProofVerifier};

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;
use crate::migration::{RoleMigration, RoleMigrationEngine};
use crate::registry::IdentityRegistry;

/// Request to verify an identity and create a verified account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgVerifyIdentity {
    /// Address to verify.
    pub address: String,
    /// Hash of the off-chain identity document set.
    pub identity_hash: String,
    /// The identity proof.
    pub proof: IdentityProof,
    /// Provider id; empty selects the parameterized default provider.
    pub verification_provider: String,
    /// Requested role, `"citizen"` or `"validator"`.
    pub desired_role: String,
    /// Offered verification fee; must cover the parameterized cost when
    /// one is configured. The host collects it, the core only checks it.
    pub cost: Option<Fee>,
}

/// Request to upgrade an account's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgChangeRole {
    /// Address whose role changes.
    pub address: String,
    /// Requested role.
    pub new_role: String,
    /// Fresh identity proof, verified for the address before the role
    /// change. The holder may reuse their original nullifier, which the
    /// registry treats as idempotent.
    pub proof: IdentityProof,
    /// Offered role-change fee.
    pub fee: Option<Fee>,
}

/// Request to migrate an identity between addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMigrateRole {
    /// Address giving up the identity.
    pub from_address: String,
    /// Address receiving the identity.
    pub to_address: String,
    /// Proof bound to the `(from, to)` pair.
    pub proof: IdentityProof,
    /// Offered migration fee.
    pub fee: Option<Fee>,
}

/// Require `provided` to cover the parameterized `required` fee.
///
/// A zero required fee waives the check entirely.
fn check_fee(required: &Fee, provided: Option<&Fee>) -> Result<(), IdentityError> {
    if required.amount.is_zero() {
        return Ok(());
    }
    match provided {
        Some(fee) if fee.denom == required.denom && fee.amount >= required.amount => Ok(()),
        _ => Err(IdentityError::InsufficientFee {
            required: required.clone(),
            provided: provided.cloned().unwrap_or(Fee {
                amount: LznAmount::ZERO,
                denom: required.denom.clone(),
            }),
        }),
    }
}

/// Handle [`MsgVerifyIdentity`].
pub fn handle_verify_identity<V: ProofVerifier, S: Store>(
    registry: &IdentityRegistry<V>,
    store: &mut S,
    ctx: &mut BlockCtx,
    msg: &MsgVerifyIdentity,
) -> Result<(), IdentityError> {
    let address = Address::new(&msg.address)?;
    let identity_hash = IdentityHash::new(&msg.identity_hash)?;
    let desired_role = Role::from_str(&msg.desired_role)?;

    let params = params::get_params(store)?;
    check_fee(&params.verification_cost, msg.cost.as_ref())?;
    let provider_id = if msg.verification_provider.is_empty() {
        params.default_verification_provider.clone()
    } else {
        msg.verification_provider.clone()
    };

    registry.verify_identity(
        store,
        ctx,
        &params,
        &address,
        identity_hash,
        &msg.proof,
        &provider_id,
        desired_role,
    )
}

/// Handle [`MsgChangeRole`].
pub fn handle_change_role<V: ProofVerifier, S: Store>(
    registry: &IdentityRegistry<V>,
    store: &mut S,
    ctx: &mut BlockCtx,
    msg: &MsgChangeRole,
) -> Result<(), IdentityError> {
    let address = Address::new(&msg.address)?;
    let new_role = Role::from_str(&msg.new_role)?;

    let params = params::get_params(store)?;
    params.validate()?;
    check_fee(&params.role_change_fee, msg.fee.as_ref())?;

    registry
        .verifier()
        .verify_identity_proof(store, ctx, &msg.proof, &address)?;

    registry.change_account_role(store, ctx, &address, new_role)
}

/// Handle [`MsgMigrateRole`].
pub fn handle_migrate_role<V: ProofVerifier, S: Store>(
    engine: &RoleMigrationEngine<V>,
    store: &mut S,
    ctx: &mut BlockCtx,
    msg: &MsgMigrateRole,
) -> Result<(), IdentityError> {
    let migration = RoleMigration {
        from_address: Address::new(&msg.from_address)?,
        to_address: Address::new(&msg.to_address)?,
        proof: msg.proof.clone(),
    };

    let params = params::get_params(store)?;
    params.validate()?;
    check_fee(&params.migration_fee, msg.fee.as_ref())?;

    engine.execute(store, ctx, &params, &migration).map(|_| ())
}
