//! # Fixed Prime Group
//!
//! The algebraic setting of the mock proof equation: the multiplicative
//! group modulo a fixed 64-bit prime. Small enough to compute with plain
//! integer arithmetic, large enough that test vectors are not trivially
//! degenerate. Not a cryptographic group — see the crate-level notes.
//!
//! Group elements travel on the wire as exactly 8 big-endian bytes and must
//! decode to a value in `[1, p)`. Exponents are taken modulo `p - 1`
//! (Fermat), which is what the prover helper in
//! [`SchnorrMockVerifier`][crate::SchnorrMockVerifier] relies on.

use lzn_core::Nullifier;
use sha2::{Digest, Sha256};

use crate::error::ProofError;

/// The group modulus: the largest 64-bit prime.
pub const MODULUS: u64 = 0xFFFF_FFFF_FFFF_FFC5;

/// The fixed generator used by every proof.
pub const GENERATOR: u64 = 5;

/// Wire size of a group element, in bytes.
pub const ELEMENT_LEN: usize = 8;

/// `(a * b) mod MODULUS` without overflow.
pub fn mulmod(a: u64, b: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(MODULUS)) as u64
}

/// `base^exp mod MODULUS` by square-and-multiply.
pub fn modpow(base: u64, mut exp: u64) -> u64 {
    let mut acc: u64 = 1;
    let mut base = base % MODULUS;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mulmod(acc, base);
        }
        base = mulmod(base, base);
        exp >>= 1;
    }
    acc
}

/// Decode a wire field into a group element in `[1, p)`.
///
/// # Errors
///
/// Returns [`ProofError::InvalidProof`] if the field is not exactly
/// [`ELEMENT_LEN`] bytes, decodes to zero, or is `>= MODULUS`.
pub fn decode_element(field: &str, bytes: &[u8]) -> Result<u64, ProofError> {
    let arr: [u8; ELEMENT_LEN] = bytes
        .try_into()
        .map_err(|_| ProofError::InvalidProof(format!("{field}: expected 8 bytes, got {}", bytes.len())))?;
    let value = u64::from_be_bytes(arr);
    if value == 0 {
        return Err(ProofError::InvalidProof(format!("{field}: zero is not a group element")));
    }
    if value >= MODULUS {
        return Err(ProofError::InvalidProof(format!("{field}: {value} out of range")));
    }
    Ok(value)
}

/// Decode a wire field into an exponent in `[0, p - 1)`.
///
/// # Errors
///
/// Returns [`ProofError::InvalidProof`] on wrong length or out-of-range
/// values.
pub fn decode_exponent(field: &str, bytes: &[u8]) -> Result<u64, ProofError> {
    let arr: [u8; ELEMENT_LEN] = bytes
        .try_into()
        .map_err(|_| ProofError::InvalidProof(format!("{field}: expected 8 bytes, got {}", bytes.len())))?;
    let value = u64::from_be_bytes(arr);
    if value >= MODULUS - 1 {
        return Err(ProofError::InvalidProof(format!("{field}: {value} out of exponent range")));
    }
    Ok(value)
}

/// Encode a group element or exponent for the wire.
pub fn encode(value: u64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Recompute the Fiat-Shamir-style challenge over (commitment, public key).
///
/// The challenge is the first 8 bytes (big-endian) of
/// `SHA-256(commitment_bytes || public_key_bytes)`, reduced into the
/// exponent range `[1, p - 1)`. The reduction never returns zero; a supplied
/// zero challenge therefore always mismatches and is rejected.
pub fn challenge(commitment_bytes: &[u8], public_key_bytes: &[u8]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(commitment_bytes);
    hasher.update(public_key_bytes);
    let digest = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let raw = u64::from_be_bytes(head);
    // Reduce into [1, p - 1): the exponent group has order p - 1 and
    // a zero challenge would collapse the equation to g^r = C.
    1 + raw % (MODULUS - 2)
}

/// SHA-256 of a nullifier's raw bytes — the Merkle leaf the membership
/// proof must contain.
pub fn nullifier_leaf(nullifier: &Nullifier) -> [u8; 32] {
    let digest = Sha256::digest(nullifier.as_bytes());
    digest.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modpow_small_cases() {
        assert_eq!(modpow(2, 10), 1024);
        assert_eq!(modpow(GENERATOR, 0), 1);
        assert_eq!(modpow(GENERATOR, 1), GENERATOR);
    }

    #[test]
    fn fermat_little_theorem_holds() {
        // g^(p-1) = 1 for the prime modulus.
        assert_eq!(modpow(GENERATOR, MODULUS - 1), 1);
        assert_eq!(modpow(123_456_789, MODULUS - 1), 1);
    }

    #[test]
    fn decode_element_rejects_bad_input() {
        assert!(decode_element("c", &[1, 2, 3]).is_err()); // wrong length
        assert!(decode_element("c", &[0; 8]).is_err()); // zero
        assert!(decode_element("c", &u64::MAX.to_be_bytes()).is_err()); // >= p
    }

    #[test]
    fn decode_element_roundtrip() {
        let value = 42_u64;
        assert_eq!(decode_element("c", &encode(value)).unwrap(), value);
    }

    #[test]
    fn challenge_is_nonzero_and_deterministic() {
        let c1 = challenge(b"commitment", b"pubkey");
        let c2 = challenge(b"commitment", b"pubkey");
        assert_eq!(c1, c2);
        assert_ne!(c1, 0);
        assert_ne!(challenge(b"other", b"pubkey"), c1);
    }

    #[test]
    fn nullifier_leaf_matches_sha256() {
        let n = Nullifier::new(vec![1, 2, 3]).unwrap();
        let expected = Sha256::digest([1u8, 2, 3]);
        assert_eq!(nullifier_leaf(&n), <[u8; 32]>::from(expected));
    }

    proptest! {
        #[test]
        fn modpow_agrees_with_iterated_mulmod(base in 1u64..1_000_000, exp in 0u64..64) {
            let mut expected = 1u64;
            for _ in 0..exp {
                expected = mulmod(expected, base);
            }
            prop_assert_eq!(modpow(base, exp), expected);
        }

        #[test]
        fn challenge_stays_in_exponent_range(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
            let c = challenge(&a, &b);
            prop_assert!(c >= 1);
            prop_assert!(c < MODULUS - 1);
        }
    }
}
