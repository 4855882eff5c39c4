//! # Reward Tracking
//!
//! Per-block reward accounting for activated licenses. Each application
//! appends one [`RewardRecord`] to the validator's bounded history and
//! bumps the monotonic counters on the license itself. A validator without
//! an activated license earns nothing and the attempt is an error; the
//! host decides the base reward, this module decides what sticks.

use serde::{Deserialize, Serialize};

use lzn_core::{Address, LznAmount, Params, Timestamp};
use lzn_store::{codec, keys, BlockCtx, Store};

use crate::error::LicenseError;
use crate::lizenz::{ActivatedLizenz, MoaStatus};

/// Maximum reward records retained per validator; the oldest are evicted.
pub const REWARD_HISTORY_CAP: usize = 1_000;

/// One applied reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecord {
    /// Block at which the reward applied.
    pub block_height: u64,
    /// Amount credited after any penalty.
    pub reward_amount: LznAmount,
    /// Reward the host proposed before penalties.
    pub base_reward: LznAmount,
    /// When the reward applied.
    pub timestamp: Timestamp,
    /// Whether the license was MOA-compliant at application time.
    pub moa_compliance: bool,
    /// Whether the non-compliance penalty reduced the amount.
    pub penalty_applied: bool,
}

/// Lifetime reward summary derived from the license record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardStats {
    /// The validator.
    pub validator: Address,
    /// Lifetime rewards accrued. Monotonic.
    pub total_rewards_earned: LznAmount,
    /// Height of the last reward applied, 0 before the first.
    pub last_reward_block: u64,
    /// Time of the last reward applied, if any.
    pub last_reward_time: Option<Timestamp>,
    /// Records currently retained in the history.
    pub history_len: usize,
}

/// Apply a base reward to `validator`'s activated license.
///
/// A license whose last MOA check was non-compliant is penalized to
/// `base * activity_coefficient / 100`; absent any check it is treated as
/// compliant. Returns the record that was appended.
///
/// # Errors
///
/// - [`LicenseError::NoActivatedLizenz`] — nothing to reward.
/// - amount overflow surfaces as a transparent
///   [`ValidationError`][lzn_core::ValidationError].
pub fn update_reward_stats<S: Store>(
    store: &mut S,
    ctx: &mut BlockCtx,
    params: &Params,
    validator: &Address,
    base_reward: LznAmount,
) -> Result<RewardRecord, LicenseError> {
    let key = keys::activated_lizenz(validator);
    let mut lizenz: ActivatedLizenz = codec::get_record(store, &key)?
        .ok_or_else(|| LicenseError::NoActivatedLizenz(validator.clone()))?;

    let status: Option<MoaStatus> = codec::get_record(store, &keys::moa_status(validator))?;
    let compliant = status.map(|s| s.is_compliant).unwrap_or(true);
    let eligible = compliant && lizenz.is_eligible_for_rewards;

    let (reward, penalized) = if eligible {
        (base_reward, false)
    } else {
        (scale_pct(base_reward, params.activity_coefficient)?, true)
    };

    lizenz.total_rewards_earned = lizenz.total_rewards_earned.checked_add(reward)?;
    lizenz.last_reward_block = ctx.height;
    lizenz.last_reward_time = Some(ctx.time);
    codec::set_record(store, &key, &lizenz)?;

    let record = RewardRecord {
        block_height: ctx.height,
        reward_amount: reward,
        base_reward,
        timestamp: ctx.time,
        moa_compliance: compliant,
        penalty_applied: penalized,
    };
    append_history(store, validator, record.clone())?;

    tracing::debug!(
        validator = %validator,
        reward = %reward,
        height = ctx.height,
        penalized,
        "reward applied"
    );
    Ok(record)
}

/// The retained reward history, oldest first. Empty when none.
pub fn reward_history<S: Store>(
    store: &S,
    validator: &Address,
) -> Result<Vec<RewardRecord>, LicenseError> {
    let history: Option<Vec<RewardRecord>> =
        codec::get_record(store, &keys::reward_history(validator))?;
    Ok(history.unwrap_or_default())
}

/// Lifetime reward summary for `validator`'s activated license.
pub fn reward_stats<S: Store>(
    store: &S,
    validator: &Address,
) -> Result<RewardStats, LicenseError> {
    let lizenz: ActivatedLizenz =
        codec::get_record(store, &keys::activated_lizenz(validator))?
            .ok_or_else(|| LicenseError::NoActivatedLizenz(validator.clone()))?;
    let history_len = reward_history(store, validator)?.len();
    Ok(RewardStats {
        validator: validator.clone(),
        total_rewards_earned: lizenz.total_rewards_earned,
        last_reward_block: lizenz.last_reward_block,
        last_reward_time: lizenz.last_reward_time,
        history_len,
    })
}

fn append_history<S: Store>(
    store: &mut S,
    validator: &Address,
    record: RewardRecord,
) -> Result<(), LicenseError> {
    let key = keys::reward_history(validator);
    let mut history: Vec<RewardRecord> =
        codec::get_record(store, &key)?.unwrap_or_default();
    history.push(record);
    if history.len() > REWARD_HISTORY_CAP {
        let excess = history.len() - REWARD_HISTORY_CAP;
        history.drain(..excess);
    }
    codec::set_record(store, &key, &history)?;
    Ok(())
}

fn scale_pct(amount: LznAmount, pct: u32) -> Result<LznAmount, LicenseError> {
    let scaled = amount
        .units()
        .checked_mul(u128::from(pct))
        .ok_or_else(|| {
            lzn_core::ValidationError::AmountOverflow(format!("{} * {}", amount, pct))
        })?
        / 100;
    Ok(LznAmount::from_units(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzn_core::IdentityHash;
    use lzn_store::MemStore;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_seconds(secs).unwrap()
    }

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn seed_lizenz(store: &mut MemStore, validator: &str) {
        let lizenz = ActivatedLizenz::new(
            addr(validator),
            LznAmount::from_units(5_000_000),
            IdentityHash::new("hash1").unwrap(),
            ts(0),
        );
        codec::set_record(store, &keys::activated_lizenz(&lizenz.validator), &lizenz).unwrap();
    }

    #[test]
    fn reward_accumulates_monotonically() {
        let mut store = MemStore::new();
        let params = Params::default();
        seed_lizenz(&mut store, "validator1");

        for height in 1..=3u64 {
            let mut ctx = BlockCtx::new(height, ts(height as i64 * 10));
            update_reward_stats(
                &mut store,
                &mut ctx,
                &params,
                &addr("validator1"),
                LznAmount::from_units(100),
            )
            .unwrap();
        }

        let stats = reward_stats(&store, &addr("validator1")).unwrap();
        assert_eq!(stats.total_rewards_earned, LznAmount::from_units(300));
        assert_eq!(stats.last_reward_block, 3);
        assert_eq!(stats.last_reward_time, Some(ts(30)));
        assert_eq!(stats.history_len, 3);
    }

    #[test]
    fn reward_without_license_is_an_error() {
        let mut store = MemStore::new();
        let mut ctx = BlockCtx::new(1, ts(10));
        let err = update_reward_stats(
            &mut store,
            &mut ctx,
            &Params::default(),
            &addr("validator1"),
            LznAmount::from_units(100),
        )
        .unwrap_err();
        assert!(matches!(err, LicenseError::NoActivatedLizenz(_)));
    }

    #[test]
    fn missing_history_reads_as_empty() {
        let store = MemStore::new();
        assert!(reward_history(&store, &addr("validator1")).unwrap().is_empty());
    }

    #[test]
    fn non_compliant_license_is_penalized() {
        let mut store = MemStore::new();
        let mut params = Params::default();
        params.activity_coefficient = 40;
        seed_lizenz(&mut store, "validator1");

        let status = MoaStatus {
            validator: addr("validator1"),
            current_inactivity_secs: 10_000,
            allowed_inactivity_secs: 100,
            last_activity: ts(0),
            checked_at: ts(10_000),
            is_compliant: false,
        };
        codec::set_record(&mut store, &keys::moa_status(&addr("validator1")), &status).unwrap();

        let mut ctx = BlockCtx::new(1, ts(10_001));
        let record = update_reward_stats(
            &mut store,
            &mut ctx,
            &params,
            &addr("validator1"),
            LznAmount::from_units(100),
        )
        .unwrap();

        assert!(record.penalty_applied);
        assert!(!record.moa_compliance);
        assert_eq!(record.reward_amount, LznAmount::from_units(40));
        assert_eq!(record.base_reward, LznAmount::from_units(100));
    }

    #[test]
    fn history_evicts_oldest_beyond_cap() {
        let mut store = MemStore::new();
        let params = Params::default();
        seed_lizenz(&mut store, "validator1");

        for height in 1..=(REWARD_HISTORY_CAP as u64 + 5) {
            let mut ctx = BlockCtx::new(height, ts(height as i64));
            update_reward_stats(
                &mut store,
                &mut ctx,
                &params,
                &addr("validator1"),
                LznAmount::from_units(1),
            )
            .unwrap();
        }

        let history = reward_history(&store, &addr("validator1")).unwrap();
        assert_eq!(history.len(), REWARD_HISTORY_CAP);
        // Oldest entries were evicted; the first retained is height 6.
        assert_eq!(history.first().unwrap().block_height, 6);
        assert_eq!(
            history.last().unwrap().block_height,
            REWARD_HISTORY_CAP as u64 + 5
        );

        // Totals are unaffected by eviction.
        let stats = reward_stats(&store, &addr("validator1")).unwrap();
        assert_eq!(
            stats.total_rewards_earned,
            LznAmount::from_units(REWARD_HISTORY_CAP as u128 + 5)
        );
    }
}
