//! # Role Migration
//!
//! Moving a verified identity from one address to another. The proof layer
//! establishes that the caller controls the original identity and has
//! authorized the exact `(from, to)` pair; this module enforces the
//! account-level rules around that proof.
//!
//! ## Design
//!
//! A migration never deletes the source account. The source is marked
//! inactive and keeps its record, so the audit trail of which address held
//! which identity remains queryable forever. The identity hash moves with
//! the migration, which is only possible because the duplicate-hash check
//! ignores inactive accounts.

use lzn_core::{Address, Event, IdentityHash, Role, Timestamp};
use lzn_store::{codec, keys, BlockCtx, Store};
use lzn_zkp::{IdentityProof, ProofVerifier};

use crate::account::VerifiedAccount;
use crate::error::IdentityError;
use crate::registry::IdentityRegistry;

use serde::{Deserialize, Serialize};

/// Minimum age of the source account's verification before it may migrate.
///
/// Prevents verify-then-immediately-migrate churn; the clock restarts on
/// the target, which receives a fresh `verification_date`.
pub const MIGRATION_COOLDOWN_SECS: i64 = 7 * 24 * 60 * 60;

/// A migration request, built by the message layer and consumed once by
/// [`RoleMigrationEngine::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMigration {
    /// Address giving up the identity.
    pub from_address: Address,
    /// Address receiving the identity.
    pub to_address: Address,
    /// Proof authorizing this exact pair.
    pub proof: IdentityProof,
}

/// Outcome of a completed migration, returned to the message layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// The migrated role.
    pub role: Role,
    /// The identity hash that moved.
    pub identity_hash: IdentityHash,
    /// When the migration completed.
    pub completed_at: Timestamp,
}

/// Executes role migrations against the account store.
#[derive(Debug, Clone)]
pub struct RoleMigrationEngine<V: ProofVerifier> {
    verifier: V,
}

impl<V: ProofVerifier> RoleMigrationEngine<V> {
    /// Construct an engine around a proof verifier.
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// Execute a migration.
    ///
    /// Checks, in order:
    ///
    /// 1. source account exists ([`IdentityError::AccountNotFound`]);
    /// 2. source is active and within its activity window
    ///    ([`IdentityError::AccountInactive`]);
    /// 3. the cooldown since the source's verification has elapsed
    ///    ([`IdentityError::MigrationCooldown`]);
    /// 4. the target address holds no account
    ///    ([`IdentityError::AccountAlreadyExists`]);
    /// 5. the migration proof verifies and is bound to `(from, to)`
    ///    (proof-layer errors, transparent).
    ///
    /// On success the target account is created with the source's role and
    /// identity hash, the source is deactivated, and a
    /// [`Event::RoleMigrated`] is emitted.
    pub fn execute<S: Store>(
        &self,
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &lzn_core::Params,
        migration: &RoleMigration,
    ) -> Result<MigrationOutcome, IdentityError> {
        let from = &migration.from_address;
        let to = &migration.to_address;

        let mut source = IdentityRegistry::<V>::get_account(store, from)?
            .ok_or_else(|| IdentityError::AccountNotFound(from.clone()))?;
        if !source.is_active || !source.is_within_activity_window(params, ctx.time) {
            return Err(IdentityError::AccountInactive(from.clone()));
        }

        let age = ctx.time.seconds_since(source.verification_date);
        if age < MIGRATION_COOLDOWN_SECS {
            return Err(IdentityError::MigrationCooldown {
                address: from.clone(),
                remaining_secs: MIGRATION_COOLDOWN_SECS - age,
            });
        }

        if IdentityRegistry::<V>::get_account(store, to)?.is_some() {
            return Err(IdentityError::AccountAlreadyExists(to.clone()));
        }

        self.verifier
            .verify_role_migration(store, ctx, &migration.proof, from, to)?;

        // Deactivate the source first so the duplicate-hash check on the
        // target write sees it as released.
        source.is_active = false;
        codec::set_record(store, &keys::account(from), &source)?;

        let target = VerifiedAccount {
            address: to.clone(),
            role: source.role,
            identity_hash: source.identity_hash.clone(),
            is_active: true,
            last_active: ctx.time,
            verification_provider: source.verification_provider.clone(),
            verification_date: ctx.time,
        };
        IdentityRegistry::<V>::set_verified_account(store, &target)?;

        ctx.emit(Event::RoleMigrated {
            from: from.clone(),
            to: to.clone(),
            role: source.role,
        });
        tracing::info!(
            from = %from,
            to = %to,
            role = %source.role,
            "identity migrated"
        );

        Ok(MigrationOutcome {
            role: source.role,
            identity_hash: source.identity_hash,
            completed_at: ctx.time,
        })
    }
}
