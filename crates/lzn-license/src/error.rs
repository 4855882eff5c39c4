//! License-side error kinds.

use thiserror::Error;

use lzn_core::{Address, LznAmount, ParamsError, ValidationError};
use lzn_identity::IdentityError;
use lzn_store::StoreError;

/// Errors from the license lifecycle, compliance sweep, and rewards.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// Activation amount below the parameterized minimum.
    #[error("amount {amount} below minimum activatable amount {min}")]
    BelowMinimum {
        /// Requested amount.
        amount: LznAmount,
        /// Parameterized floor (inclusive).
        min: LznAmount,
    },

    /// Activation amount above the parameterized maximum.
    #[error("amount {amount} above maximum activatable amount {max}")]
    AboveMaximum {
        /// Requested amount.
        amount: LznAmount,
        /// Parameterized ceiling (inclusive).
        max: LznAmount,
    },

    /// Activation would give one validator too large a share of the total
    /// activated amount.
    #[error("amount {amount} for {validator} exceeds {cap_pct}% of total activated amount")]
    ConcentrationExceeded {
        /// The validator requesting activation.
        validator: Address,
        /// Requested amount.
        amount: LznAmount,
        /// Parameterized share cap, in percent.
        cap_pct: u8,
    },

    /// The validator already holds an activated license.
    #[error("validator {0} already holds an activated license")]
    AlreadyActivated(Address),

    /// No activated license exists for the validator.
    #[error("no activated license for validator {0}")]
    NoActivatedLizenz(Address),

    /// The address is not an active validator account.
    #[error("address {0} is not an active validator")]
    NotValidator(Address),

    /// The identity hash in the request does not match the account's.
    #[error("identity hash does not match the verified account of {0}")]
    IdentityMismatch(Address),

    /// Identity-layer failure during role gating.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Domain primitive validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Parameter validation failure.
    #[error(transparent)]
    Params(#[from] ParamsError),

    /// Persistent store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
