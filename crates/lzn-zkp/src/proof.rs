//! # Proof Structures
//!
//! The wire form of an identity proof and its Merkle membership companion.
//! Fields are raw bytes on the wire; structural validation promotes them to
//! typed values before any cryptographic work happens.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use lzn_core::Nullifier;

use crate::error::ProofError;

/// Minimum total size of the proof material (commitment + challenge +
/// response + public key + nullifier), enforced by the integrity check.
/// With 8-byte group elements this requires a 32-byte nullifier.
pub const MIN_PROOF_MATERIAL_LEN: usize = 64;

/// A Merkle membership proof for the identity set.
///
/// The verifier requires that the leaf `SHA-256(nullifier)` appears among
/// the supplied leaves. Binding leaves (e.g. for migration authorization)
/// are carried in the same vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipProof {
    /// Declared Merkle root of the identity set.
    pub root: [u8; 32],
    /// The leaves disclosed by the prover.
    pub leaves: Vec<[u8; 32]>,
}

impl MembershipProof {
    /// Whether the proof discloses the given leaf.
    pub fn contains_leaf(&self, leaf: &[u8; 32]) -> bool {
        self.leaves.iter().any(|l| l == leaf)
    }
}

/// A zero-knowledge-style identity proof.
///
/// Produced off-chain by a verification provider, consumed exactly once per
/// address by [`ProofVerifier`][crate::ProofVerifier].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProof {
    /// Commitment group element (8 big-endian bytes).
    #[serde(with = "hex_bytes")]
    pub commitment: Vec<u8>,
    /// Challenge exponent (8 big-endian bytes).
    #[serde(with = "hex_bytes")]
    pub challenge: Vec<u8>,
    /// Response exponent (8 big-endian bytes).
    #[serde(with = "hex_bytes")]
    pub response: Vec<u8>,
    /// The prover's public key group element (8 big-endian bytes).
    #[serde(with = "hex_bytes")]
    pub public_key: Vec<u8>,
    /// The one-way nullifier bytes.
    #[serde(with = "hex_bytes")]
    pub nullifier: Vec<u8>,
    /// Merkle membership proof for the identity set.
    pub membership: MembershipProof,
}

impl IdentityProof {
    /// Structural validation: every component present and non-empty.
    ///
    /// Returns the typed [`Nullifier`] on success so callers never touch
    /// the raw bytes again.
    ///
    /// # Errors
    ///
    /// Returns [`ProofError::MalformedProof`] naming the first missing
    /// component.
    pub fn validate_structure(&self) -> Result<Nullifier, ProofError> {
        if self.commitment.is_empty() {
            return Err(ProofError::MalformedProof("empty commitment".to_string()));
        }
        if self.challenge.is_empty() {
            return Err(ProofError::MalformedProof("empty challenge".to_string()));
        }
        if self.response.is_empty() {
            return Err(ProofError::MalformedProof("empty response".to_string()));
        }
        if self.public_key.is_empty() {
            return Err(ProofError::MalformedProof("empty public key".to_string()));
        }
        if self.membership.leaves.is_empty() {
            return Err(ProofError::MalformedProof(
                "empty membership proof".to_string(),
            ));
        }
        Nullifier::new(self.nullifier.clone())
            .map_err(|_| ProofError::MalformedProof("empty nullifier".to_string()))
    }

    /// Total proof material length, checked by the integrity pass.
    pub fn material_len(&self) -> usize {
        self.commitment.len()
            + self.challenge.len()
            + self.response.len()
            + self.public_key.len()
            + self.nullifier.len()
    }

    /// Hex SHA-256 over the canonical encoding of the whole proof — the
    /// replay-cache key.
    pub fn proof_hash_hex(&self) -> Result<String, ProofError> {
        let bytes = serde_json::to_vec(self).map_err(|e| {
            ProofError::MalformedProof(format!("proof not encodable: {e}"))
        })?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

/// Hex serde adapter for byte fields, matching the canonical record
/// encoding used everywhere else in the module key space.
mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(de::Error::custom)
    }
}
