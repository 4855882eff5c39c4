//! # Token Custody Seam
//!
//! Locking and releasing the tokens behind a license is the host's
//! business (its bank module, escrow account, or test double); the
//! lifecycle only decides *when*. Custody failures are logged and do not
//! abort the license transition — the license record is the source of
//! truth and the host reconciles custody from it.

use lzn_core::{Address, LznAmount};

/// Host collaborator holding the tokens behind activated licenses.
pub trait TokenCustody {
    /// Lock `amount` for `validator` at activation.
    fn lock(&mut self, validator: &Address, amount: LznAmount) -> Result<(), String>;

    /// Release `amount` back to `validator` once deactivation completes.
    fn unlock(&mut self, validator: &Address, amount: LznAmount) -> Result<(), String>;
}

/// Custody that does nothing, for hosts that reconcile externally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCustody;

impl TokenCustody for NoopCustody {
    fn lock(&mut self, _validator: &Address, _amount: LznAmount) -> Result<(), String> {
        Ok(())
    }

    fn unlock(&mut self, _validator: &Address, _amount: LznAmount) -> Result<(), String> {
        Ok(())
    }
}

/// Test double recording every custody call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCustody {
    /// `("lock" | "unlock", validator, amount)` per call.
    pub calls: Vec<(&'static str, Address, LznAmount)>,
}

impl TokenCustody for RecordingCustody {
    fn lock(&mut self, validator: &Address, amount: LznAmount) -> Result<(), String> {
        self.calls.push(("lock", validator.clone(), amount));
        Ok(())
    }

    fn unlock(&mut self, validator: &Address, amount: LznAmount) -> Result<(), String> {
        self.calls.push(("unlock", validator.clone(), amount));
        Ok(())
    }
}

/// Test double whose every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCustody;

impl TokenCustody for FailingCustody {
    fn lock(&mut self, _validator: &Address, _amount: LznAmount) -> Result<(), String> {
        Err("custody backend unavailable".to_string())
    }

    fn unlock(&mut self, _validator: &Address, _amount: LznAmount) -> Result<(), String> {
        Err("custody backend unavailable".to_string())
    }
}
