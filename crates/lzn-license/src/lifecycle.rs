//! # License Lifecycle
//!
//! Activation, manual deactivation, and transfer of LZN licenses.
//!
//! ## Design
//!
//! Unless the params disable identity verification, every entry point is
//! gated on the identity registry: only an active, in-window `Validator`
//! account may hold a license. Token custody is
//! best-effort — a custody failure is logged and the license transition
//! proceeds, because the license record is the source of truth the host
//! reconciles custody from. The concentration cap compares the requested
//! amount against the post-activation total and is skipped for the first
//! activation, which would otherwise always hold 100%.

use lzn_core::{Address, Event, IdentityHash, LznAmount, Params, Role, Timestamp};
use lzn_identity::VerifiedAccount;
use lzn_store::{codec, keys, BlockCtx, Store};

use crate::custody::TokenCustody;
use crate::error::LicenseError;
use crate::lizenz::{ActivatedLizenz, DeactivatingLizenz};

/// Deactivation reason for operator-requested deactivations.
pub const REASON_MANUAL: &str = "manual";
/// Deactivation reason applied by the compliance sweep.
pub const REASON_INACTIVITY: &str = "inactivity";

/// The license state machine, parameterized over token custody.
#[derive(Debug)]
pub struct LicenseLifecycle<C: TokenCustody> {
    custody: C,
}

impl<C: TokenCustody> LicenseLifecycle<C> {
    /// Construct a lifecycle around a custody collaborator.
    pub fn new(custody: C) -> Self {
        Self { custody }
    }

    /// The custody collaborator, for hosts that need to drain it.
    pub fn custody(&self) -> &C {
        &self.custody
    }

    /// Load the account at `validator` and require an active, in-window
    /// validator.
    fn require_validator<S: Store>(
        store: &S,
        params: &Params,
        now: Timestamp,
        validator: &Address,
    ) -> Result<VerifiedAccount, LicenseError> {
        let account: Option<VerifiedAccount> = codec::get_record(store, &keys::account(validator))?;
        match account {
            Some(acc)
                if acc.is_active
                    && acc.role == Role::Validator
                    && acc.is_within_activity_window(params, now) =>
            {
                Ok(acc)
            }
            _ => Err(LicenseError::NotValidator(validator.clone())),
        }
    }

    /// Sum of all activated amounts except `exclude`'s.
    fn total_activated_excluding<S: Store>(
        store: &S,
        exclude: &Address,
    ) -> Result<(LznAmount, usize), LicenseError> {
        let all: Vec<(String, ActivatedLizenz)> =
            codec::scan_records(store, keys::ACTIVATED_LIZENZ_PREFIX)?;
        let mut total = LznAmount::ZERO;
        let mut count = 0usize;
        for (_, lizenz) in all {
            if lizenz.validator != *exclude {
                total = total.checked_add(lizenz.amount)?;
                count += 1;
            }
        }
        Ok((total, count))
    }

    fn lock_best_effort(&mut self, ctx: &mut BlockCtx, validator: &Address, amount: LznAmount) {
        match self.custody.lock(validator, amount) {
            Ok(()) => ctx.emit(Event::LznLocked {
                validator: validator.clone(),
                amount,
            }),
            Err(reason) => {
                tracing::warn!(validator = %validator, %amount, reason, "token lock failed");
            }
        }
    }

    pub(crate) fn unlock_best_effort(
        &mut self,
        ctx: &mut BlockCtx,
        validator: &Address,
        amount: LznAmount,
    ) {
        match self.custody.unlock(validator, amount) {
            Ok(()) => ctx.emit(Event::LznUnlocked {
                validator: validator.clone(),
                amount,
            }),
            Err(reason) => {
                tracing::warn!(validator = %validator, %amount, reason, "token release failed");
            }
        }
    }

    /// Activate a license for `validator`.
    ///
    /// # Errors
    ///
    /// - [`LicenseError::NotValidator`] — no active, in-window validator
    ///   account at the address (only when the params require identity
    ///   verification).
    /// - [`LicenseError::IdentityMismatch`] — `identity_hash` differs from
    ///   the account's.
    /// - [`LicenseError::BelowMinimum`] / [`LicenseError::AboveMaximum`] —
    ///   amount outside the inclusive parameter bounds.
    /// - [`LicenseError::AlreadyActivated`] — the validator holds one.
    /// - [`LicenseError::ConcentrationExceeded`] — the amount would exceed
    ///   the per-validator share cap of the post-activation total.
    pub fn activate<S: Store>(
        &mut self,
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &Params,
        validator: &Address,
        amount: LznAmount,
        identity_hash: &IdentityHash,
    ) -> Result<(), LicenseError> {
        params.validate()?;
        if params.require_identity_verification {
            let account = Self::require_validator(store, params, ctx.time, validator)?;
            if account.identity_hash != *identity_hash {
                return Err(LicenseError::IdentityMismatch(validator.clone()));
            }
        }

        if amount < params.min_lzn_amount {
            return Err(LicenseError::BelowMinimum {
                amount,
                min: params.min_lzn_amount,
            });
        }
        if amount > params.max_lzn_amount {
            return Err(LicenseError::AboveMaximum {
                amount,
                max: params.max_lzn_amount,
            });
        }

        let key = keys::activated_lizenz(validator);
        if store.has(&key)? {
            return Err(LicenseError::AlreadyActivated(validator.clone()));
        }

        // First activation is exempt: against a total of itself the cap
        // check would read 100% and nothing could ever bootstrap the set.
        let (others_total, others) = Self::total_activated_excluding(store, validator)?;
        if others > 0 {
            let total = others_total.checked_add(amount)?;
            if amount.exceeds_percent_of(params.max_activated_per_validator_pct, total)? {
                return Err(LicenseError::ConcentrationExceeded {
                    validator: validator.clone(),
                    amount,
                    cap_pct: params.max_activated_per_validator_pct,
                });
            }
        }

        self.lock_best_effort(ctx, validator, amount);

        let lizenz = ActivatedLizenz::new(
            validator.clone(),
            amount,
            identity_hash.clone(),
            ctx.time,
        );
        codec::set_record(store, &key, &lizenz)?;

        ctx.emit(Event::LizenzActivated {
            validator: validator.clone(),
            amount,
        });
        tracing::info!(validator = %validator, %amount, "license activated");
        Ok(())
    }

    /// Move `validator`'s license into the deactivation queue.
    ///
    /// Tokens stay locked until the queue drains; see
    /// [`MoaComplianceEngine`][crate::MoaComplianceEngine].
    pub fn deactivate<S: Store>(
        &mut self,
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &Params,
        validator: &Address,
        reason: &str,
    ) -> Result<(), LicenseError> {
        params.validate()?;
        let key = keys::activated_lizenz(validator);
        let lizenz: ActivatedLizenz = codec::get_record(store, &key)?
            .ok_or_else(|| LicenseError::NoActivatedLizenz(validator.clone()))?;

        store.delete(&key)?;
        let deactivating = DeactivatingLizenz {
            validator: validator.clone(),
            amount: lizenz.amount,
            deactivation_start: ctx.time,
            deactivation_end: ctx.time.plus_seconds(params.deactivation_period_secs as i64),
            reason: reason.to_string(),
        };
        codec::set_record(store, &keys::deactivating_lizenz(validator), &deactivating)?;

        ctx.emit(Event::LizenzDeactivated {
            validator: validator.clone(),
            amount: lizenz.amount,
            reason: reason.to_string(),
        });
        tracing::info!(validator = %validator, amount = %lizenz.amount, reason, "license deactivating");
        Ok(())
    }

    /// Transfer `from`'s activated license to `to`.
    ///
    /// The license restarts at the target: fresh activation time, the
    /// target's identity hash, and zeroed reward counters. Reward history
    /// stays with the address that earned it.
    pub fn transfer<S: Store>(
        &mut self,
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &Params,
        from: &Address,
        to: &Address,
    ) -> Result<(), LicenseError> {
        params.validate()?;
        // When verification is required the license rebinds to the target's
        // verified identity; otherwise it keeps travelling with its own hash.
        let target_hash = if params.require_identity_verification {
            let to_account = Self::require_validator(store, params, ctx.time, to)?;
            Some(to_account.identity_hash)
        } else {
            None
        };

        let from_key = keys::activated_lizenz(from);
        let lizenz: ActivatedLizenz = codec::get_record(store, &from_key)?
            .ok_or_else(|| LicenseError::NoActivatedLizenz(from.clone()))?;
        let target_hash = target_hash.unwrap_or_else(|| lizenz.identity_hash.clone());
        if store.has(&keys::activated_lizenz(to))? {
            return Err(LicenseError::AlreadyActivated(to.clone()));
        }

        store.delete(&from_key)?;
        self.unlock_best_effort(ctx, from, lizenz.amount);
        self.lock_best_effort(ctx, to, lizenz.amount);

        let moved = ActivatedLizenz::new(to.clone(), lizenz.amount, target_hash, ctx.time);
        codec::set_record(store, &keys::activated_lizenz(to), &moved)?;

        ctx.emit(Event::LizenzTransferred {
            from: from.clone(),
            to: to.clone(),
            amount: lizenz.amount,
        });
        tracing::info!(from = %from, to = %to, amount = %lizenz.amount, "license transferred");
        Ok(())
    }

}

/// Refresh the license activity timestamp for `validator`.
///
/// No-op when the validator holds no activated license — activity is a
/// side effect of unrelated messages and must not fail them.
pub fn update_lizenz_activity<S: Store>(
    store: &mut S,
    now: Timestamp,
    validator: &Address,
) -> Result<(), LicenseError> {
    let key = keys::activated_lizenz(validator);
    if let Some(mut lizenz) = codec::get_record::<S, ActivatedLizenz>(store, &key)? {
        lizenz.last_activity = now;
        codec::set_record(store, &key, &lizenz)?;
    }
    Ok(())
}
