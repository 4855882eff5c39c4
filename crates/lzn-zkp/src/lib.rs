#![deny(missing_docs)]

//! # lzn-zkp — Identity Proof Verification
//!
//! The Sybil-resistance primitive of the Lizenz Protocol: every
//! identity-affecting operation is gated on a zero-knowledge-style proof
//! whose nullifier can be consumed by at most one address, forever.
//!
//! ## Architecture
//!
//! The [`ProofVerifier`] trait defines the verification interface. It is
//! **sealed** — only backends defined in this crate can implement it, so an
//! unauthorized verifier cannot be injected into the identity registry.
//!
//! The shipped backend, [`SchnorrMockVerifier`], checks a Schnorr-style
//! equation over a fixed 64-bit prime group. It is deliberately **not** a
//! production zero-knowledge scheme: the group is small, the challenge is a
//! plain hash, and nothing here hides the witness. The surrounding state
//! machine (nullifier uniqueness, replay cache, provider accreditation) is
//! the part this crate treats as production-grade; the algebra is a stand-in
//! a real backend can replace without touching any caller.
//!
//! ## Registries
//!
//! - [`nullifier`] — one-way nullifier set, same-address idempotent.
//! - [`replay`] — proof-hash replay cache, same semantics, independent key.
//! - [`provider`] — accredited verification-provider directory.

pub mod error;
pub mod group;
pub mod merkle;
pub mod nullifier;
pub mod proof;
pub mod provider;
pub mod replay;
pub mod verifier;

pub use error::ProofError;
pub use proof::{IdentityProof, MembershipProof};
pub use provider::{Accreditation, VerificationProvider};
pub use verifier::{ProofVerifier, SchnorrMockVerifier};
