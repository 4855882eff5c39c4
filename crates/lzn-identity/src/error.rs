//! Identity-side error kinds. Message handlers surface these directly.

use thiserror::Error;

use lzn_core::{Address, Fee, IdentityHash, ParamsError, Role, ValidationError};
use lzn_store::StoreError;
use lzn_zkp::ProofError;

/// Errors from the identity registry and migration engine.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The role cannot be stored on a verified account.
    #[error("role {0} is not a valid verified-account role")]
    InvalidRole(Role),

    /// The requested verification target role is not allowed.
    #[error("role {0} cannot be requested at verification (choose citizen or validator)")]
    InvalidRoleChoice(Role),

    /// The identity hash is already bound to a different active account.
    #[error("identity hash {identity_hash} already bound to active account {held_by}")]
    DuplicateIdentityHash {
        /// The duplicate hash.
        identity_hash: IdentityHash,
        /// The active account holding it.
        held_by: Address,
    },

    /// A verified account already exists at the address.
    #[error("account {0} already exists")]
    AccountAlreadyExists(Address),

    /// No verified account exists at the address.
    #[error("account {0} not found")]
    AccountNotFound(Address),

    /// The requested role transition is not permitted.
    #[error("role change from {from} to {to} is not allowed")]
    RoleChangeNotAllowed {
        /// Current role.
        from: Role,
        /// Requested role.
        to: Role,
    },

    /// The account is inactive and cannot perform this operation.
    #[error("account {0} is inactive")]
    AccountInactive(Address),

    /// The migration cooldown since verification has not elapsed.
    #[error("migration cooldown not satisfied for {address}: {remaining_secs}s remaining")]
    MigrationCooldown {
        /// The source address.
        address: Address,
        /// Seconds until the cooldown elapses.
        remaining_secs: i64,
    },

    /// The supplied fee does not cover the parameterized charge.
    #[error("supplied fee {provided} does not cover required {required}")]
    InsufficientFee {
        /// The parameterized charge.
        required: Fee,
        /// What the message supplied; zero in the required denom when
        /// absent.
        provided: Fee,
    },

    /// Proof verification failure.
    #[error(transparent)]
    Proof(#[from] ProofError),

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
