//! # Merkle Membership Check
//!
//! Step 4 of identity proof verification: the supplied membership proof
//! must disclose the leaf `SHA-256(nullifier)`. Root attestation against
//! the provider's published identity-set root is the host's concern; this
//! module only establishes that the proof speaks about *this* nullifier.

use lzn_core::Nullifier;

use crate::error::ProofError;
use crate::group::nullifier_leaf;
use crate::proof::MembershipProof;

/// Require that `proof` discloses the leaf for `nullifier`.
///
/// # Errors
///
/// Returns [`ProofError::MembershipNotProven`] if the leaf is absent.
pub fn verify_membership(
    proof: &MembershipProof,
    nullifier: &Nullifier,
) -> Result<(), ProofError> {
    let leaf = nullifier_leaf(nullifier);
    if !proof.contains_leaf(&leaf) {
        return Err(ProofError::MembershipNotProven {
            nullifier_hex: nullifier.to_hex(),
        });
    }
    Ok(())
}

/// Require that `proof` discloses a binding leaf over arbitrary bytes
/// (used to bind a migration proof to its address pair).
///
/// # Errors
///
/// Returns [`ProofError::InvalidProof`] if the binding leaf is absent.
pub fn verify_binding(proof: &MembershipProof, material: &[u8]) -> Result<(), ProofError> {
    use sha2::{Digest, Sha256};
    let leaf: [u8; 32] = Sha256::digest(material).into();
    if !proof.contains_leaf(&leaf) {
        return Err(ProofError::InvalidProof(
            "proof is not bound to the expected addresses".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn membership_passes_when_leaf_present() {
        let nullifier = Nullifier::new(vec![9; 32]).unwrap();
        let proof = MembershipProof {
            root: [0; 32],
            leaves: vec![[0xaa; 32], nullifier_leaf(&nullifier)],
        };
        verify_membership(&proof, &nullifier).unwrap();
    }

    #[test]
    fn membership_fails_when_leaf_absent() {
        let nullifier = Nullifier::new(vec![9; 32]).unwrap();
        let proof = MembershipProof {
            root: [0; 32],
            leaves: vec![[0xaa; 32]],
        };
        let err = verify_membership(&proof, &nullifier).unwrap_err();
        assert!(matches!(err, ProofError::MembershipNotProven { .. }));
    }

    #[test]
    fn binding_leaf_over_address_pair() {
        let material = b"addrfrom|addrto";
        let leaf: [u8; 32] = Sha256::digest(material).into();
        let proof = MembershipProof {
            root: [0; 32],
            leaves: vec![leaf],
        };
        verify_binding(&proof, material).unwrap();
        assert!(verify_binding(&proof, b"other|pair").is_err());
    }
}
