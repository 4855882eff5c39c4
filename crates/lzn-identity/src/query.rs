//! # Identity Queries
//!
//! Read-only views over account state. Point lookups return `Option`
//! rather than an error when the record is absent; list queries paginate
//! in key (address) order.

use std::str::FromStr;

use lzn_core::{Address, Params, Role};
use lzn_store::{codec, keys, params, PageRequest, PageResponse, Store, StoreError};

use crate::account::{VerificationRecord, VerifiedAccount};
use crate::error::IdentityError;

/// Current module parameters (stored, or defaults when never set).
pub fn query_params<S: Store>(store: &S) -> Result<Params, StoreError> {
    params::get_params(store)
}

/// The account at `address`, if any.
pub fn verified_account<S: Store>(
    store: &S,
    address: &str,
) -> Result<Option<VerifiedAccount>, IdentityError> {
    let address = Address::new(address)?;
    Ok(codec::get_record(store, &keys::account(&address))?)
}

/// All accounts, in address order.
pub fn verified_accounts<S: Store>(
    store: &S,
    page: PageRequest,
) -> Result<PageResponse<VerifiedAccount>, IdentityError> {
    let all: Vec<(String, VerifiedAccount)> = codec::scan_records(store, keys::ACCOUNT_PREFIX)?;
    let accounts = all.into_iter().map(|(_, a)| a).collect();
    Ok(PageResponse::paginate(accounts, page))
}

/// Accounts holding `role`, in address order. The role filter applies
/// before pagination, so `total` counts matching accounts only.
pub fn verified_accounts_by_role<S: Store>(
    store: &S,
    role: &str,
    page: PageRequest,
) -> Result<PageResponse<VerifiedAccount>, IdentityError> {
    let role = Role::from_str(role)?;
    let all: Vec<(String, VerifiedAccount)> = codec::scan_records(store, keys::ACCOUNT_PREFIX)?;
    let accounts = all
        .into_iter()
        .map(|(_, a)| a)
        .filter(|a| a.role == role)
        .collect();
    Ok(PageResponse::paginate(accounts, page))
}

/// The verification audit record for `address`, if any.
pub fn verification_record<S: Store>(
    store: &S,
    address: &str,
) -> Result<Option<VerificationRecord>, IdentityError> {
    let address = Address::new(address)?;
    Ok(codec::get_record(store, &keys::verification_record(&address))?)
}
