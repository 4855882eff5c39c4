//! # Error Hierarchy
//!
//! Structured error types shared across the Lizenz Protocol core, built
//! with `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Subsystem crates (`lzn-zkp`, `lzn-identity`, `lzn-license`) define their
//! own error enums; the typed subsystem error is the message-handler
//! boundary. This crate contributes only the validation errors of the
//! domain primitives it defines.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
///
/// Each newtype enforces format constraints at construction time. These
/// errors carry the invalid input and the expected format so that operators
/// can diagnose misconfiguration without guesswork.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Account address is empty or malformed.
    #[error("invalid address: \"{0}\" (expected non-empty lowercase bech32-style string, 3-90 chars)")]
    InvalidAddress(String),

    /// Identity hash is empty.
    #[error("identity hash must be non-empty")]
    EmptyIdentityHash,

    /// Identity hash contains non-printable or whitespace characters.
    #[error("invalid identity hash: \"{0}\" (expected printable ASCII without whitespace)")]
    InvalidIdentityHash(String),

    /// Nullifier bytes are empty.
    #[error("nullifier must be non-empty")]
    EmptyNullifier,

    /// Amount string failed decimal parsing.
    #[error("invalid amount: \"{value}\" ({reason})")]
    InvalidAmount {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Arithmetic on amounts exceeded the u128 range.
    #[error("amount arithmetic overflow: {0}")]
    AmountOverflow(String),

    /// Role string did not name a known role.
    #[error("unknown role: \"{0}\"")]
    UnknownRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_invalid_amount_carries_reason() {
        let err = ValidationError::InvalidAmount {
            value: "12a4".to_string(),
            reason: "non-digit character".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("12a4"));
        assert!(msg.contains("non-digit"));
    }

    #[test]
    fn validation_error_overflow_display() {
        let err = ValidationError::AmountOverflow("adding rewards".to_string());
        assert!(format!("{err}").contains("overflow"));
    }

    #[test]
    fn validation_errors_are_debug() {
        let err = ValidationError::EmptyIdentityHash;
        assert!(!format!("{err:?}").is_empty());
    }
}
