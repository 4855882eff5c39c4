//! # Module Key Layout
//!
//! Every persisted record lives in a single flat key space under the host's
//! module namespace. One function per record family — no call site ever
//! concatenates key fragments by hand, so the layout cannot drift between
//! writer and reader.
//!
//! Layout:
//!
//! ```text
//! account/{address}
//! nullifier/{nullifierHex}
//! proof/{proofHashHex}
//! provider/{providerId}
//! accreditation/{hashHex}
//! verificationRecord/{address}
//! activatedLizenz/{validator}
//! deactivatingLizenz/{validator}
//! moaStatus/{validator}
//! rewardHistory/{validator}
//! params
//! ```

use lzn_core::{Address, Nullifier};

/// Prefix of all verified-account records.
pub const ACCOUNT_PREFIX: &str = "account/";
/// Prefix of all nullifier records.
pub const NULLIFIER_PREFIX: &str = "nullifier/";
/// Prefix of all proof-replay records.
pub const PROOF_PREFIX: &str = "proof/";
/// Prefix of all provider records.
pub const PROVIDER_PREFIX: &str = "provider/";
/// Prefix of all accreditation records.
pub const ACCREDITATION_PREFIX: &str = "accreditation/";
/// Prefix of all verification audit records.
pub const VERIFICATION_RECORD_PREFIX: &str = "verificationRecord/";
/// Prefix of all activated license records.
pub const ACTIVATED_LIZENZ_PREFIX: &str = "activatedLizenz/";
/// Prefix of all deactivating license records.
pub const DEACTIVATING_LIZENZ_PREFIX: &str = "deactivatingLizenz/";
/// Prefix of all MOA status records.
pub const MOA_STATUS_PREFIX: &str = "moaStatus/";
/// Prefix of all reward history records.
pub const REWARD_HISTORY_PREFIX: &str = "rewardHistory/";
/// Key of the module parameter record.
pub const PARAMS_KEY: &str = "params";

/// Key of a verified-account record.
pub fn account(address: &Address) -> String {
    format!("{ACCOUNT_PREFIX}{address}")
}

/// Key of a nullifier record.
pub fn nullifier(n: &Nullifier) -> String {
    format!("{NULLIFIER_PREFIX}{}", n.to_hex())
}

/// Key of a proof-replay record, from the hex SHA-256 of the proof.
pub fn proof(proof_hash_hex: &str) -> String {
    format!("{PROOF_PREFIX}{proof_hash_hex}")
}

/// Key of a provider record.
pub fn provider(provider_id: &str) -> String {
    format!("{PROVIDER_PREFIX}{provider_id}")
}

/// Key of an accreditation record, from its hex hash.
pub fn accreditation(hash_hex: &str) -> String {
    format!("{ACCREDITATION_PREFIX}{hash_hex}")
}

/// Key of a verification audit record.
pub fn verification_record(address: &Address) -> String {
    format!("{VERIFICATION_RECORD_PREFIX}{address}")
}

/// Key of an activated license record.
pub fn activated_lizenz(validator: &Address) -> String {
    format!("{ACTIVATED_LIZENZ_PREFIX}{validator}")
}

/// Key of a deactivating license record.
pub fn deactivating_lizenz(validator: &Address) -> String {
    format!("{DEACTIVATING_LIZENZ_PREFIX}{validator}")
}

/// Key of a MOA status record.
pub fn moa_status(validator: &Address) -> String {
    format!("{MOA_STATUS_PREFIX}{validator}")
}

/// Key of a reward history record.
pub fn reward_history(validator: &Address) -> String {
    format!("{REWARD_HISTORY_PREFIX}{validator}")
}
