//! # Proof Replay Cache
//!
//! Replay protection keyed by the hash of the whole proof, evaluated
//! independently of nullifier semantics: two distinct proofs can share a
//! nullifier (same owner), but one byte-identical proof can only ever be
//! presented by the address that used it first.

use serde::{Deserialize, Serialize};

use lzn_core::{Address, Timestamp};
use lzn_store::{codec, keys, BlockCtx, Store};

use crate::error::ProofError;

/// A consumed proof: who presented it, via which provider, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofReplayRecord {
    /// The address that presented the proof.
    pub address: Address,
    /// The provider named at presentation time.
    pub provider_id: String,
    /// Block time of first presentation.
    pub used_at: Timestamp,
    /// Block height of first presentation.
    pub height: u64,
}

/// Look up the replay record for a proof hash, if present.
pub fn lookup<S: Store>(
    store: &S,
    proof_hash_hex: &str,
) -> Result<Option<ProofReplayRecord>, ProofError> {
    Ok(codec::get_record(store, &keys::proof(proof_hash_hex))?)
}

/// Register a proof hash for `address`, with the same same-address-
/// idempotent / cross-address-reject semantics as the nullifier registry.
///
/// # Errors
///
/// Returns [`ProofError::ProofReplayed`] if the hash is bound to a
/// different address.
pub fn register<S: Store>(
    store: &mut S,
    ctx: &BlockCtx,
    proof_hash_hex: &str,
    address: &Address,
    provider_id: &str,
) -> Result<(), ProofError> {
    match lookup(store, proof_hash_hex)? {
        Some(record) if record.address != *address => Err(ProofError::ProofReplayed {
            proof_hash_hex: proof_hash_hex.to_string(),
            bound_to: record.address,
        }),
        Some(_) => Ok(()), // same address, keep the original record
        None => {
            let record = ProofReplayRecord {
                address: address.clone(),
                provider_id: provider_id.to_string(),
                used_at: ctx.time,
                height: ctx.height,
            };
            codec::set_record(store, &keys::proof(proof_hash_hex), &record)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzn_store::MemStore;

    const HASH: &str = "ab12cd34";

    fn ctx() -> BlockCtx {
        BlockCtx::new(1, Timestamp::from_epoch_seconds(50).unwrap())
    }

    #[test]
    fn register_then_lookup() {
        let mut store = MemStore::new();
        let addr = Address::new("addr1one").unwrap();
        register(&mut store, &ctx(), HASH, &addr, "provider0").unwrap();

        let record = lookup(&store, HASH).unwrap().unwrap();
        assert_eq!(record.address, addr);
        assert_eq!(record.provider_id, "provider0");
    }

    #[test]
    fn same_address_replay_is_idempotent() {
        let mut store = MemStore::new();
        let addr = Address::new("addr1one").unwrap();
        register(&mut store, &ctx(), HASH, &addr, "provider0").unwrap();
        register(&mut store, &ctx(), HASH, &addr, "provider1").unwrap();

        // Original provider binding survives.
        let record = lookup(&store, HASH).unwrap().unwrap();
        assert_eq!(record.provider_id, "provider0");
    }

    #[test]
    fn cross_address_replay_rejected() {
        let mut store = MemStore::new();
        let a = Address::new("addr1one").unwrap();
        let b = Address::new("addr2two").unwrap();
        register(&mut store, &ctx(), HASH, &a, "provider0").unwrap();

        let err = register(&mut store, &ctx(), HASH, &b, "provider0").unwrap_err();
        assert!(matches!(err, ProofError::ProofReplayed { .. }));
    }
}
