//! # Address and Identity Newtypes
//!
//! Domain-primitive newtypes for the identifiers that flow through the
//! identity and license subsystems. Each identifier is a distinct type —
//! you cannot pass an [`IdentityHash`] where an [`Address`] is expected.
//!
//! ## Validation
//!
//! [`Address`] and [`IdentityHash`] validate format at construction time.
//! [`Nullifier`] is opaque bytes; it only enforces non-emptiness, since the
//! proof layer treats it as a one-way value it never interprets.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An on-chain account address.
///
/// The protocol uses lowercase bech32-style addresses. This type does not
/// perform checksum verification (that is the wallet's job); it enforces
/// the structural constraints every valid address satisfies so that empty
/// or garbage strings cannot reach the persistent key space.
///
/// # Validation
///
/// - 3 to 90 characters
/// - lowercase ASCII alphanumeric only
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create an address from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] if the string is empty,
    /// out of length bounds, or contains non-lowercase-alphanumeric
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.len() < 3 || s.len() > 90 {
            return Err(ValidationError::InvalidAddress(s));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::InvalidAddress(s));
        }
        Ok(Self(s))
    }

    /// Access the address string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque identity commitment.
///
/// Produced off-chain by the verification provider from the participant's
/// real-world identity documents. The protocol never interprets it; it only
/// enforces uniqueness across active accounts (the registry-layer Sybil
/// invariant).
///
/// # Validation
///
/// - non-empty, at most 128 characters
/// - printable ASCII without whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityHash(String);

impl IdentityHash {
    /// Create an identity hash from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentityHash`] for an empty string,
    /// [`ValidationError::InvalidIdentityHash`] for malformed input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() {
            return Err(ValidationError::EmptyIdentityHash);
        }
        if s.len() > 128 || !s.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ValidationError::InvalidIdentityHash(s));
        }
        Ok(Self(s))
    }

    /// Access the identity hash string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-way proof nullifier.
///
/// Consumed at most once per address, forever. The registry stores the raw
/// bytes hex-encoded in its key space; this type keeps them opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nullifier(Vec<u8>);

impl Nullifier {
    /// Create a nullifier from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyNullifier`] if the byte slice is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        let b = bytes.into();
        if b.is_empty() {
            return Err(ValidationError::EmptyNullifier);
        }
        Ok(Self(b))
    }

    /// Access the raw nullifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex encoding used in the persistent key space.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl std::fmt::Display for Nullifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
