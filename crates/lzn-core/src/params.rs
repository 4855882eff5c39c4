//! # Module Parameters
//!
//! The configuration surface of the identity and license subsystems.
//! Parameters are persisted as a single record and validated both at load
//! and before every mutation that reads one of them — a misconfigured chain
//! halts at the first write, not after state has drifted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::amount::LznAmount;

/// Errors from parameter validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParamsError {
    /// A duration parameter is zero.
    #[error("{name} must be a positive number of seconds")]
    ZeroPeriod {
        /// The offending parameter name.
        name: &'static str,
    },

    /// The amount bounds are inverted.
    #[error("min_lzn_amount ({min}) exceeds max_lzn_amount ({max})")]
    InvertedAmountBounds {
        /// Configured minimum.
        min: LznAmount,
        /// Configured maximum.
        max: LznAmount,
    },

    /// The concentration cap is outside (0, 100].
    #[error("max_activated_per_validator_pct must be in 1..=100, got {0}")]
    InvalidConcentrationPct(u8),

    /// The per-address identity cap is zero.
    #[error("max_identities_per_address must be at least 1")]
    ZeroIdentityCap,

    /// The license denom is empty.
    #[error("lzn_denom must be non-empty")]
    EmptyDenom,
}

/// A fee charged by an outer message surface, expressed as amount + denom.
///
/// The core validates and reports fees; collection is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee amount in base units.
    pub amount: LznAmount,
    /// Fee denomination.
    pub denom: String,
}

impl std::fmt::Display for Fee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Module-level configuration for the identity and license subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Seconds of inactivity before a citizen account is considered stale.
    pub citizen_activity_period_secs: u64,
    /// Seconds of inactivity before a validator account is considered stale.
    pub validator_activity_period_secs: u64,
    /// Maximum verified identities one address may ever hold (protocol
    /// currently fixes this at 1; kept configurable for governance).
    pub max_identities_per_address: u32,
    /// Whether identity verification is required before role-gated
    /// operations. Disabled only on test networks.
    pub require_identity_verification: bool,
    /// Provider id used when a verification request names none.
    pub default_verification_provider: String,
    /// Fee charged for identity verification.
    pub verification_cost: Fee,
    /// Fee charged for role migration.
    pub migration_fee: Fee,
    /// Fee charged for a role change.
    pub role_change_fee: Fee,
    /// Minimum activatable license amount (inclusive).
    pub min_lzn_amount: LznAmount,
    /// Maximum activatable license amount (inclusive).
    pub max_lzn_amount: LznAmount,
    /// Per-validator share cap of the total activated amount, in percent.
    pub max_activated_per_validator_pct: u8,
    /// Multiplier applied by the host's reward distribution to the
    /// measure-of-activity score. Stored here so every node agrees on it.
    pub activity_coefficient: u32,
    /// Seconds a deactivating license lingers before permanent removal.
    pub deactivation_period_secs: u64,
    /// Seconds without activity before an activated license starts
    /// deactivating.
    pub inactivity_period_secs: u64,
    /// Denomination of the license token.
    pub lzn_denom: String,
}

impl Params {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamsError`] encountered. Callers run this at
    /// load and before any mutation that reads a parameter.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.citizen_activity_period_secs == 0 {
            return Err(ParamsError::ZeroPeriod {
                name: "citizen_activity_period_secs",
            });
        }
        if self.validator_activity_period_secs == 0 {
            return Err(ParamsError::ZeroPeriod {
                name: "validator_activity_period_secs",
            });
        }
        if self.deactivation_period_secs == 0 {
            return Err(ParamsError::ZeroPeriod {
                name: "deactivation_period_secs",
            });
        }
        if self.inactivity_period_secs == 0 {
            return Err(ParamsError::ZeroPeriod {
                name: "inactivity_period_secs",
            });
        }
        if self.max_identities_per_address == 0 {
            return Err(ParamsError::ZeroIdentityCap);
        }
        if self.min_lzn_amount > self.max_lzn_amount {
            return Err(ParamsError::InvertedAmountBounds {
                min: self.min_lzn_amount,
                max: self.max_lzn_amount,
            });
        }
        if self.max_activated_per_validator_pct == 0 || self.max_activated_per_validator_pct > 100
        {
            return Err(ParamsError::InvalidConcentrationPct(
                self.max_activated_per_validator_pct,
            ));
        }
        if self.lzn_denom.is_empty() {
            return Err(ParamsError::EmptyDenom);
        }
        Ok(())
    }

    /// The activity window, in seconds, for an account of the given role.
    pub fn activity_period_secs(&self, role: crate::Role) -> u64 {
        match role {
            crate::Role::Validator => self.validator_activity_period_secs,
            _ => self.citizen_activity_period_secs,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            citizen_activity_period_secs: 180 * 24 * 3600,
            validator_activity_period_secs: 30 * 24 * 3600,
            max_identities_per_address: 1,
            require_identity_verification: true,
            default_verification_provider: "provider0".to_string(),
            verification_cost: Fee {
                amount: LznAmount::from_units(0),
                denom: "ulzn".to_string(),
            },
            migration_fee: Fee {
                amount: LznAmount::from_units(0),
                denom: "ulzn".to_string(),
            },
            role_change_fee: Fee {
                amount: LznAmount::from_units(0),
                denom: "ulzn".to_string(),
            },
            min_lzn_amount: LznAmount::from_units(1_000_000),
            max_lzn_amount: LznAmount::from_units(100_000_000_000),
            max_activated_per_validator_pct: 33,
            activity_coefficient: 100,
            deactivation_period_secs: 21 * 24 * 3600,
            inactivity_period_secs: 30 * 24 * 3600,
            lzn_denom: "ulzn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        Params::default().validate().unwrap();
    }

    #[test]
    fn zero_period_rejected() {
        let mut p = Params::default();
        p.inactivity_period_secs = 0;
        assert_eq!(
            p.validate(),
            Err(ParamsError::ZeroPeriod {
                name: "inactivity_period_secs"
            })
        );
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut p = Params::default();
        p.min_lzn_amount = LznAmount::from_units(10);
        p.max_lzn_amount = LznAmount::from_units(5);
        assert!(matches!(
            p.validate(),
            Err(ParamsError::InvertedAmountBounds { .. })
        ));
    }

    #[test]
    fn concentration_pct_bounds() {
        let mut p = Params::default();
        p.max_activated_per_validator_pct = 0;
        assert!(p.validate().is_err());
        p.max_activated_per_validator_pct = 101;
        assert!(p.validate().is_err());
        p.max_activated_per_validator_pct = 100;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn activity_period_is_role_specific() {
        let p = Params::default();
        assert_eq!(
            p.activity_period_secs(crate::Role::Validator),
            p.validator_activity_period_secs
        );
        assert_eq!(
            p.activity_period_secs(crate::Role::Citizen),
            p.citizen_activity_period_secs
        );
    }

    #[test]
    fn params_serde_roundtrip() {
        let p = Params::default();
        let json = serde_json::to_string(&p).unwrap();
        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
