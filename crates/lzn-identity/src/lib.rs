#![deny(missing_docs)]

//! # lzn-identity — Verified Accounts and Role Migration
//!
//! Owns the [`VerifiedAccount`] records and every rule that governs them:
//! one active identity hash per participant, monotonic role upgrades, and
//! the proof-gated migration of an identity from one address to another.
//!
//! ## Structure
//!
//! - [`account`] — the account record and its activity-window logic.
//! - [`registry`] — [`IdentityRegistry`]: account CRUD with invariants,
//!   verification-request validation, and the identity-verification flow.
//! - [`migration`] — [`RoleMigrationEngine`]: digital inheritance of an
//!   identity between addresses.
//! - [`msg`] — the message surface (`VerifyIdentity`, `ChangeRole`,
//!   `MigrateRole`).
//! - [`query`] — read-only account queries with pagination.
//!
//! The registry is an explicitly constructed service parameterized over the
//! proof verifier; nothing in this crate reaches module-global state.

pub mod account;
pub mod error;
pub mod migration;
pub mod msg;
pub mod query;
pub mod registry;

pub use account::VerifiedAccount;
pub use error::IdentityError;
pub use migration::RoleMigrationEngine;
pub use msg::{MsgChangeRole, MsgMigrateRole, MsgVerifyIdentity};
pub use registry::{touch_account, IdentityRegistry};
