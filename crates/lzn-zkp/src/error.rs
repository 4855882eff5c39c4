//! # Proof-Side Error Kinds
//!
//! The error taxonomy of proof verification and its registries. Every
//! variant is a distinct, caller-visible failure reason — message handlers
//! surface these directly, so the variant names are part of the protocol's
//! user-visible behavior.

use thiserror::Error;

use lzn_core::{Address, ValidationError};
use lzn_store::StoreError;

/// Errors from proof verification and the proof-side registries.
#[derive(Error, Debug)]
pub enum ProofError {
    /// The proof or one of its required components is missing or empty.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The nullifier is already bound to a different address.
    #[error("nullifier already consumed by {bound_to} (hex {nullifier_hex})")]
    NullifierReused {
        /// Hex encoding of the reused nullifier.
        nullifier_hex: String,
        /// The address the nullifier is bound to.
        bound_to: Address,
    },

    /// The proof hash is already bound to a different address.
    #[error("proof already used by {bound_to} (hash {proof_hash_hex})")]
    ProofReplayed {
        /// Hex SHA-256 of the replayed proof.
        proof_hash_hex: String,
        /// The address the proof is bound to.
        bound_to: Address,
    },

    /// The proof equation or challenge check failed.
    #[error("invalid proof: {0}")]
    InvalidProof(String),

    /// The membership proof does not establish set membership for the
    /// nullifier.
    #[error("membership not proven for nullifier {nullifier_hex}")]
    MembershipNotProven {
        /// Hex encoding of the nullifier whose membership failed.
        nullifier_hex: String,
    },

    /// No provider record exists under the given id.
    #[error("verification provider \"{0}\" not found")]
    ProviderNotFound(String),

    /// The provider exists but is deactivated.
    #[error("verification provider \"{0}\" is inactive")]
    ProviderInactive(String),

    /// The provider's registration has expired.
    #[error("verification provider \"{provider_id}\" expired at {expired_at}")]
    ProviderExpired {
        /// The provider id.
        provider_id: String,
        /// When the registration expired.
        expired_at: lzn_core::Timestamp,
    },

    /// The provider's accreditation record is missing or flagged invalid.
    #[error("accreditation invalid for provider \"{0}\"")]
    AccreditationInvalid(String),

    /// Domain primitive validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistent store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
