//! # License Queries
//!
//! Read-only views over license state. Point lookups return `Option` when
//! the record is absent; reward history reads as empty rather than
//! erroring, so indexers can poll it unconditionally.

use lzn_core::Address;
use lzn_store::{codec, keys, PageRequest, PageResponse, Store};

use crate::error::LicenseError;
use crate::lizenz::{ActivatedLizenz, DeactivatingLizenz, MoaStatus};
use crate::rewards::{self, RewardRecord, RewardStats};

/// The activated license of `validator`, if any.
pub fn activated_lizenz<S: Store>(
    store: &S,
    validator: &str,
) -> Result<Option<ActivatedLizenz>, LicenseError> {
    let validator = Address::new(validator)?;
    Ok(codec::get_record(store, &keys::activated_lizenz(&validator))?)
}

/// All activated licenses, in validator-address order.
pub fn activated_lizenzes<S: Store>(
    store: &S,
    page: PageRequest,
) -> Result<PageResponse<ActivatedLizenz>, LicenseError> {
    let all: Vec<(String, ActivatedLizenz)> =
        codec::scan_records(store, keys::ACTIVATED_LIZENZ_PREFIX)?;
    Ok(PageResponse::paginate(
        all.into_iter().map(|(_, l)| l).collect(),
        page,
    ))
}

/// All licenses in the deactivation queue, in validator-address order.
pub fn deactivating_lizenzes<S: Store>(
    store: &S,
    page: PageRequest,
) -> Result<PageResponse<DeactivatingLizenz>, LicenseError> {
    let all: Vec<(String, DeactivatingLizenz)> =
        codec::scan_records(store, keys::DEACTIVATING_LIZENZ_PREFIX)?;
    Ok(PageResponse::paginate(
        all.into_iter().map(|(_, l)| l).collect(),
        page,
    ))
}

/// Latest MOA status for `validator`, if a sweep has examined it.
pub fn moa_status<S: Store>(
    store: &S,
    validator: &str,
) -> Result<Option<MoaStatus>, LicenseError> {
    let validator = Address::new(validator)?;
    Ok(codec::get_record(store, &keys::moa_status(&validator))?)
}

/// Retained reward history for `validator`, oldest first; empty when none.
pub fn reward_history<S: Store>(
    store: &S,
    validator: &str,
) -> Result<Vec<RewardRecord>, LicenseError> {
    let validator = Address::new(validator)?;
    rewards::reward_history(store, &validator)
}

/// Lifetime reward summary for `validator`'s activated license.
pub fn reward_stats<S: Store>(store: &S, validator: &str) -> Result<RewardStats, LicenseError> {
    let validator = Address::new(validator)?;
    rewards::reward_stats(store, &validator)
}
