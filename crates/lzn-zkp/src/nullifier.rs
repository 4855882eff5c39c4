//! # Nullifier Registry
//!
//! The persistent one-way set at the bottom of Sybil resistance. A
//! nullifier bound to address A can never be consumed by address B ≠ A;
//! re-consumption by A itself succeeds without mutating the stored record,
//! which is what lets an identity owner run the migration flow with the
//! same proof material.
//!
//! By protocol design this set grows forever — a consumed nullifier stays
//! consumed.

use serde::{Deserialize, Serialize};

use lzn_core::{Address, Nullifier, Timestamp};
use lzn_store::{codec, keys, BlockCtx, Store};

use crate::error::ProofError;

/// A consumed nullifier: who consumed it and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullifierRecord {
    /// The owning address.
    pub owner: Address,
    /// Block time of first consumption.
    pub consumed_at: Timestamp,
    /// Block height of first consumption.
    pub height: u64,
}

/// Look up the record for a nullifier, if consumed.
pub fn lookup<S: Store>(
    store: &S,
    nullifier: &Nullifier,
) -> Result<Option<NullifierRecord>, ProofError> {
    Ok(codec::get_record(store, &keys::nullifier(nullifier))?)
}

/// Check the cross-address invariant without consuming.
///
/// # Errors
///
/// Returns [`ProofError::NullifierReused`] if the nullifier is bound to an
/// address other than `claimed`.
pub fn check<S: Store>(
    store: &S,
    nullifier: &Nullifier,
    claimed: &Address,
) -> Result<(), ProofError> {
    match lookup(store, nullifier)? {
        Some(record) if record.owner != *claimed => Err(ProofError::NullifierReused {
            nullifier_hex: nullifier.to_hex(),
            bound_to: record.owner,
        }),
        _ => Ok(()),
    }
}

/// Consume a nullifier for `owner`, re-checking the invariant atomically
/// with the write.
///
/// Idempotent for the same owner: an existing record is left untouched, so
/// `consumed_at`/`height` always reflect first consumption.
///
/// # Errors
///
/// Returns [`ProofError::NullifierReused`] on a cross-address attempt.
pub fn consume<S: Store>(
    store: &mut S,
    ctx: &BlockCtx,
    nullifier: &Nullifier,
    owner: &Address,
) -> Result<(), ProofError> {
    match lookup(store, nullifier)? {
        Some(record) if record.owner != *owner => Err(ProofError::NullifierReused {
            nullifier_hex: nullifier.to_hex(),
            bound_to: record.owner,
        }),
        Some(_) => Ok(()), // same owner, keep the original record
        None => {
            let record = NullifierRecord {
                owner: owner.clone(),
                consumed_at: ctx.time,
                height: ctx.height,
            };
            codec::set_record(store, &keys::nullifier(nullifier), &record)?;
            Ok(())
        }
    }
}
