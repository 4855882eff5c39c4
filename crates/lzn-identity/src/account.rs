//! # Verified Account Record
//!
//! The persistent record of a verified on-chain identity: address, role,
//! identity commitment, activity tracking, and verification provenance.

use serde::{Deserialize, Serialize};

use lzn_core::{Address, IdentityHash, Params, Role, Timestamp};

/// A verified on-chain account.
///
/// Invariants enforced by the registry, not by this struct:
/// the role is never `Unspecified` once stored, the identity hash is unique
/// among active accounts, and `last_active` only moves backward on explicit
/// deactivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedAccount {
    /// The account address (unique key).
    pub address: Address,
    /// The account's role.
    pub role: Role,
    /// The identity commitment bound to this account.
    pub identity_hash: IdentityHash,
    /// Whether the account is active. Migration sources become inactive.
    pub is_active: bool,
    /// Block time of the last successful operation by this account.
    pub last_active: Timestamp,
    /// The provider that verified this identity.
    pub verification_provider: String,
    /// Block time of verification.
    pub verification_date: Timestamp,
}

impl VerifiedAccount {
    /// Whether the account has been active within its role's activity
    /// window, as of `now`.
    pub fn is_within_activity_window(&self, params: &Params, now: Timestamp) -> bool {
        let window = params.activity_period_secs(self.role) as i64;
        now.seconds_since(self.last_active) <= window
    }
}

/// An identity-verification audit row, written once per successful
/// verification and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// The verified address.
    pub address: Address,
    /// The provider that performed verification.
    pub provider_id: String,
    /// The identity hash bound at verification time.
    pub identity_hash: IdentityHash,
    /// Hex SHA-256 of the submitted proof.
    pub proof_hash: String,
    /// Block time of verification.
    pub verified_at: Timestamp,
}
