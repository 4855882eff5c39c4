#![deny(missing_docs)]

//! # lzn-core — Foundational Types for the Lizenz Protocol Core
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `thiserror`, `chrono`, and `hex` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass an [`IdentityHash`] where an
//!    [`Address`] is expected, and both validate their format at
//!    construction time.
//!
//! 2. **[`LznAmount`] is the sole path to token arithmetic.** Amounts enter
//!    and leave the system as decimal strings; internally they are `u128`
//!    with checked arithmetic. Overflow is surfaced as an error, never
//!    silently truncated.
//!
//! 3. **Single [`Role`] enum with an explicit upgrade lattice.** One
//!    definition, exhaustive `match` everywhere. Role transitions are
//!    decided by [`Role::can_transition_to`], nowhere else.
//!
//! 4. **Typed errors with `thiserror`.** Each subsystem crate carries its
//!    own error enum; this crate contributes [`ValidationError`] for the
//!    domain primitives. No `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod address;
pub mod amount;
pub mod error;
pub mod event;
pub mod params;
pub mod role;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use address::{Address, IdentityHash, Nullifier};
pub use amount::LznAmount;
pub use error::ValidationError;
pub use event::Event;
pub use params::{Fee, Params, ParamsError};
pub use role::Role;
pub use temporal::Timestamp;
