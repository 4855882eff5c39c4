//! # License Records
//!
//! The three persisted record families of the license lifecycle. Each
//! validator holds at most one record per family, keyed by address; a
//! license is never in `activated` and `deactivating` at the same time.

use serde::{Deserialize, Serialize};

use lzn_core::{Address, IdentityHash, LznAmount, Timestamp};

/// An activated license backing a validator's participation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatedLizenz {
    /// The holding validator.
    pub validator: Address,
    /// The activated amount.
    pub amount: LznAmount,
    /// When the license was activated.
    pub activation_time: Timestamp,
    /// Last recorded license activity. Drives the MOA sweep.
    pub last_activity: Timestamp,
    /// Identity hash of the holder at activation time.
    pub identity_hash: IdentityHash,
    /// Whether the license currently accrues rewards.
    pub is_eligible_for_rewards: bool,
    /// Lifetime rewards accrued by this license. Monotonic.
    pub total_rewards_earned: LznAmount,
    /// Height of the last reward applied, 0 before the first.
    pub last_reward_block: u64,
    /// Time of the last reward applied, if any.
    pub last_reward_time: Option<Timestamp>,
}

impl ActivatedLizenz {
    /// A fresh license as written at activation time.
    pub fn new(
        validator: Address,
        amount: LznAmount,
        identity_hash: IdentityHash,
        now: Timestamp,
    ) -> Self {
        Self {
            validator,
            amount,
            activation_time: now,
            last_activity: now,
            identity_hash,
            is_eligible_for_rewards: true,
            total_rewards_earned: LznAmount::ZERO,
            last_reward_block: 0,
            last_reward_time: None,
        }
    }
}

/// A license waiting out the deactivation period before its tokens are
/// released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivatingLizenz {
    /// The validator whose license is deactivating.
    pub validator: Address,
    /// The amount held until release.
    pub amount: LznAmount,
    /// When deactivation began.
    pub deactivation_start: Timestamp,
    /// The instant after which the tokens become releasable (exclusive).
    pub deactivation_end: Timestamp,
    /// Why the license was deactivated (`"manual"` or `"inactivity"`).
    pub reason: String,
}

/// Per-validator result of the last MOA compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoaStatus {
    /// The examined validator.
    pub validator: Address,
    /// Seconds since the license's last activity at check time.
    pub current_inactivity_secs: i64,
    /// Parameterized inactivity ceiling at check time.
    pub allowed_inactivity_secs: u64,
    /// License activity timestamp the check was based on.
    pub last_activity: Timestamp,
    /// When the check ran.
    pub checked_at: Timestamp,
    /// Whether the license was compliant.
    pub is_compliant: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_license_starts_eligible_with_zero_rewards() {
        let now = Timestamp::from_epoch_seconds(100).unwrap();
        let lizenz = ActivatedLizenz::new(
            Address::new("validator1").unwrap(),
            LznAmount::from_units(5_000_000),
            IdentityHash::new("hash123").unwrap(),
            now,
        );
        assert!(lizenz.is_eligible_for_rewards);
        assert_eq!(lizenz.total_rewards_earned, LznAmount::ZERO);
        assert_eq!(lizenz.last_reward_block, 0);
        assert!(lizenz.last_reward_time.is_none());
        assert_eq!(lizenz.last_activity, now);
    }

    #[test]
    fn records_roundtrip_through_canonical_json() {
        let lizenz = ActivatedLizenz::new(
            Address::new("validator1").unwrap(),
            LznAmount::from_units(5_000_000),
            IdentityHash::new("hash123").unwrap(),
            Timestamp::from_epoch_seconds(100).unwrap(),
        );
        let json = serde_json::to_string(&lizenz).unwrap();
        let back: ActivatedLizenz = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lizenz);
    }
}
