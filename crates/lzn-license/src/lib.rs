#![deny(missing_docs)]

//! # lzn-license — Economic License Lifecycle
//!
//! The LZN license is the economic stake a validator activates to take
//! part in consensus. This crate owns every license state transition:
//!
//! - **activation** — amount bounds, the concentration cap, role gating
//!   against the identity registry, and token custody;
//! - **deactivation** — a timed queue between "activated" and "gone",
//!   entered manually or by the compliance sweep;
//! - **MOA compliance** — the per-block Minimum Operational Activity
//!   sweep that expires inactive licenses and drains the queue;
//! - **rewards** — per-block reward records with a bounded history and
//!   monotonic per-license totals.
//!
//! ## Structure
//!
//! - [`lizenz`] — the license record types.
//! - [`custody`] — the [`TokenCustody`] collaborator seam.
//! - [`lifecycle`] — [`LicenseLifecycle`]: activate, deactivate, transfer.
//! - [`moa`] — [`MoaComplianceEngine`]: the begin-block sweep.
//! - [`rewards`] — reward accounting and history eviction.
//! - [`msg`] / [`query`] — the message and read-only surfaces.

pub mod custody;
pub mod error;
pub mod lifecycle;
pub mod lizenz;
pub mod moa;
pub mod msg;
pub mod query;
pub mod rewards;

pub use custody::{NoopCustody, TokenCustody};
pub use error::LicenseError;
pub use lifecycle::{update_lizenz_activity, LicenseLifecycle};
pub use lizenz::{ActivatedLizenz, DeactivatingLizenz, MoaStatus};
pub use moa::MoaComplianceEngine;
pub use msg::{MsgActivateLzn, MsgDeactivateLzn, MsgTransferLzn};
pub use rewards::{RewardRecord, RewardStats};
