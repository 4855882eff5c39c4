//! # Verification Provider Registry
//!
//! The accredited directory of off-chain identity verification providers.
//! A provider is usable only while active, unexpired, and holding an
//! accreditation record flagged valid — all three are re-checked on every
//! proof, so revoking an accreditation takes effect at the next block.

use serde::{Deserialize, Serialize};

use lzn_store::{codec, keys, BlockCtx, Store};
use lzn_core::Timestamp;

use crate::error::ProofError;

/// An accredited identity verification provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProvider {
    /// Unique provider id.
    pub provider_id: String,
    /// The provider's public key (8 big-endian bytes, a group element).
    pub public_key: Vec<u8>,
    /// Hex hash naming the provider's accreditation record.
    pub accreditation_hash: String,
    /// Whether the provider is currently active.
    pub is_active: bool,
    /// When the provider was registered.
    pub registration_time: Timestamp,
    /// Optional expiry of the registration.
    pub expiration_time: Option<Timestamp>,
}

/// An accreditation record resolved via
/// [`VerificationProvider::accreditation_hash`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accreditation {
    /// Hex hash identifying this accreditation.
    pub hash: String,
    /// Whether the accreditation currently stands.
    pub valid: bool,
    /// When the accreditation was issued.
    pub issued_at: Timestamp,
}

/// Store or replace a provider record.
pub fn register_provider<S: Store>(
    store: &mut S,
    provider: &VerificationProvider,
) -> Result<(), ProofError> {
    codec::set_record(store, &keys::provider(&provider.provider_id), provider)?;
    Ok(())
}

/// Store or replace an accreditation record.
pub fn set_accreditation<S: Store>(
    store: &mut S,
    accreditation: &Accreditation,
) -> Result<(), ProofError> {
    codec::set_record(store, &keys::accreditation(&accreditation.hash), accreditation)?;
    Ok(())
}

/// Mark an existing provider inactive.
///
/// # Errors
///
/// Returns [`ProofError::ProviderNotFound`] if no record exists.
pub fn deactivate_provider<S: Store>(store: &mut S, provider_id: &str) -> Result<(), ProofError> {
    let mut provider = get_provider(store, provider_id)?
        .ok_or_else(|| ProofError::ProviderNotFound(provider_id.to_string()))?;
    provider.is_active = false;
    register_provider(store, &provider)
}

/// Look up a provider record, if present.
pub fn get_provider<S: Store>(
    store: &S,
    provider_id: &str,
) -> Result<Option<VerificationProvider>, ProofError> {
    Ok(codec::get_record(store, &keys::provider(provider_id))?)
}

/// Verify that a provider is currently usable and return its record.
///
/// # Errors
///
/// - [`ProofError::ProviderNotFound`] — no record under the id.
/// - [`ProofError::ProviderInactive`] — record exists but deactivated.
/// - [`ProofError::ProviderExpired`] — registration expired at or before
///   `ctx.time`.
/// - [`ProofError::AccreditationInvalid`] — accreditation missing or
///   flagged invalid.
pub fn verify_provider<S: Store>(
    store: &S,
    ctx: &BlockCtx,
    provider_id: &str,
) -> Result<VerificationProvider, ProofError> {
    let provider = get_provider(store, provider_id)?
        .ok_or_else(|| ProofError::ProviderNotFound(provider_id.to_string()))?;

    if !provider.is_active {
        return Err(ProofError::ProviderInactive(provider_id.to_string()));
    }
    // Usable strictly before the expiry instant.
    if let Some(expiry) = provider.expiration_time {
        if expiry <= ctx.time {
            return Err(ProofError::ProviderExpired {
                provider_id: provider_id.to_string(),
                expired_at: expiry,
            });
        }
    }

    let accreditation: Option<Accreditation> =
        codec::get_record(store, &keys::accreditation(&provider.accreditation_hash))?;
    match accreditation {
        Some(acc) if acc.valid => Ok(provider),
        _ => Err(ProofError::AccreditationInvalid(provider_id.to_string())),
    }
}
