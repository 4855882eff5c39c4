//! # Temporal Types
//!
//! UTC-only timestamp type for the Lizenz Protocol core. All timestamps are
//! block time supplied by the host pipeline — the core never reads a wall
//! clock during message handling, which keeps every node deterministic.
//!
//! Serialized form is ISO 8601 with a `Z` suffix at second precision, the
//! canonical record encoding shared by all persisted record types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp with second-level precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Create a timestamp from UTC epoch seconds.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn from_epoch_seconds(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The timestamp shifted forward by `secs` seconds.
    pub fn plus_seconds(&self, secs: i64) -> Timestamp {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Whole seconds elapsed from `earlier` to `self`.
    ///
    /// Negative if `self` precedes `earlier`.
    pub fn seconds_since(&self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).num_seconds()
    }

    /// ISO 8601 string with `Z` suffix, truncated to seconds.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
