//! # Decimal-String Token Amounts
//!
//! The wire and storage representation of every LZN amount is a decimal
//! string of integer base units. Internally amounts are `u128` with checked
//! arithmetic: overflow and malformed input surface as errors, never as
//! silent truncation.
//!
//! ## Serde Form
//!
//! [`LznAmount`] serializes as its decimal string (`"1000000"`), matching
//! the persisted record encoding. Deserialization re-runs the same parser
//! used by [`LznAmount::parse`], so a record written by one node is readable
//! by every other.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// An LZN token amount in integer base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LznAmount(u128);

impl LznAmount {
    /// The zero amount.
    pub const ZERO: LznAmount = LznAmount(0);

    /// Construct from raw base units.
    pub const fn from_units(units: u128) -> Self {
        Self(units)
    }

    /// Parse a decimal string into an amount.
    ///
    /// Accepts ASCII digits only. Leading zeros are permitted (`"007"`
    /// parses to 7). The empty string, signs, separators, and fractional
    /// points are rejected — base units are indivisible.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] on malformed input or a
    /// value exceeding the `u128` range.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::InvalidAmount {
                value: s.to_string(),
                reason: "empty string".to_string(),
            });
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidAmount {
                value: s.to_string(),
                reason: "non-digit character".to_string(),
            });
        }
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidAmount {
                value: s.to_string(),
                reason: "exceeds u128 range".to_string(),
            })
    }

    /// Raw base units.
    pub fn units(self) -> u128 {
        self.0
    }

    /// Whether the amount is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountOverflow`] if the sum exceeds the
    /// `u128` range. Callers must propagate this — reward accounting is
    /// monotonic and must never wrap.
    pub fn checked_add(self, other: LznAmount) -> Result<LznAmount, ValidationError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| ValidationError::AmountOverflow(format!("{} + {}", self.0, other.0)))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountOverflow`] if `other` exceeds `self`.
    pub fn checked_sub(self, other: LznAmount) -> Result<LznAmount, ValidationError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| ValidationError::AmountOverflow(format!("{} - {}", self.0, other.0)))
    }

    /// Whether `self` exceeds `pct` percent of `total`.
    ///
    /// Used by the concentration cap. Computed as
    /// `self * 100 > total * pct` in `u128`; both products are checked so a
    /// pathological total cannot wrap the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountOverflow`] if either product
    /// exceeds the `u128` range.
    pub fn exceeds_percent_of(
        self,
        pct: u8,
        total: LznAmount,
    ) -> Result<bool, ValidationError> {
        let lhs = self
            .0
            .checked_mul(100)
            .ok_or_else(|| ValidationError::AmountOverflow(format!("{} * 100", self.0)))?;
        let rhs = total
            .0
            .checked_mul(u128::from(pct))
            .ok_or_else(|| ValidationError::AmountOverflow(format!("{} * {}", total.0, pct)))?;
        Ok(lhs > rhs)
    }
}

impl std::fmt::Display for LznAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for LznAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for LznAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LznAmount::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_valid() {
        assert_eq!(LznAmount::parse("1000000").unwrap().units(), 1_000_000);
        assert_eq!(LznAmount::parse("0").unwrap(), LznAmount::ZERO);
        assert_eq!(LznAmount::parse("007").unwrap().units(), 7);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(LznAmount::parse("").is_err());
        assert!(LznAmount::parse("-5").is_err());
        assert!(LznAmount::parse("1.5").is_err());
        assert!(LznAmount::parse("1_000").is_err());
        assert!(LznAmount::parse("1e6").is_err());
    }

    #[test]
    fn parse_rejects_beyond_u128() {
        // u128::MAX is 340282366920938463463374607431768211455 (39 digits).
        assert!(LznAmount::parse("340282366920938463463374607431768211456").is_err());
    }

    #[test]
    fn checked_add_overflow_is_error() {
        let max = LznAmount::from_units(u128::MAX);
        assert!(max.checked_add(LznAmount::from_units(1)).is_err());
    }

    #[test]
    fn checked_sub_underflow_is_error() {
        let one = LznAmount::from_units(1);
        assert!(one.checked_sub(LznAmount::from_units(2)).is_err());
    }

    #[test]
    fn percent_comparison() {
        let amount = LznAmount::from_units(400);
        let total = LznAmount::from_units(1000);
        // 400 is 40% of 1000.
        assert!(amount.exceeds_percent_of(33, total).unwrap());
        assert!(!amount.exceeds_percent_of(40, total).unwrap());
        assert!(!amount.exceeds_percent_of(50, total).unwrap());
    }

    #[test]
    fn serde_roundtrip_is_decimal_string() {
        let amount = LznAmount::from_units(1_000_000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1000000\"");
        let back: LznAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    proptest! {
        #[test]
        fn parse_display_roundtrip(units in any::<u128>()) {
            let amount = LznAmount::from_units(units);
            let parsed = LznAmount::parse(&amount.to_string()).unwrap();
            prop_assert_eq!(parsed, amount);
        }

        #[test]
        fn addition_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            // u64 inputs cannot overflow u128 addition.
            let sum = LznAmount::from_units(a as u128)
                .checked_add(LznAmount::from_units(b as u128))
                .unwrap();
            prop_assert_eq!(sum.units(), a as u128 + b as u128);
        }
    }
}
