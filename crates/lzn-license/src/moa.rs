//! # MOA Compliance Sweep
//!
//! The per-block Minimum Operational Activity check. Runs at the start of
//! every block in two phases:
//!
//! 1. **expire** — every activated license is examined; one whose last
//!    activity is older than the parameterized inactivity period is moved
//!    into the deactivation queue with reason `"inactivity"`;
//! 2. **drain** — every queued deactivation whose period has elapsed is
//!    removed and its tokens released.
//!
//! The sweep is idempotent within a block: a license expired in phase one
//! is no longer in the activated set on a re-run, and a drained queue
//! entry is gone. Running the sweep twice at the same time produces the
//! same state (events are re-emitted for re-examined licenses only).

use lzn_core::{Address, Event, Params};
use lzn_store::{codec, keys, BlockCtx, Store};

use crate::custody::TokenCustody;
use crate::error::LicenseError;
use crate::lifecycle::{LicenseLifecycle, REASON_INACTIVITY};
use crate::lizenz::{ActivatedLizenz, DeactivatingLizenz, MoaStatus};

/// Summary of one sweep run, for the host's block logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    /// Activated licenses examined.
    pub checked: usize,
    /// Licenses moved to the deactivation queue this run.
    pub expired: usize,
    /// Queue entries completed and released this run.
    pub released: usize,
}

/// The begin-block compliance engine.
#[derive(Debug)]
pub struct MoaComplianceEngine;

impl MoaComplianceEngine {
    /// Run the two-phase sweep for the block in `ctx`.
    pub fn begin_block<S: Store, C: TokenCustody>(
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &Params,
        lifecycle: &mut LicenseLifecycle<C>,
    ) -> Result<SweepOutcome, LicenseError> {
        params.validate()?;
        let mut outcome = SweepOutcome::default();

        // Phase 1: examine every activated license.
        let activated: Vec<(String, ActivatedLizenz)> =
            codec::scan_records(store, keys::ACTIVATED_LIZENZ_PREFIX)?;
        for (key, lizenz) in activated {
            outcome.checked += 1;
            let inactive_secs = ctx.time.seconds_since(lizenz.last_activity);
            let compliant = inactive_secs <= params.inactivity_period_secs as i64;

            let status = MoaStatus {
                validator: lizenz.validator.clone(),
                current_inactivity_secs: inactive_secs,
                allowed_inactivity_secs: params.inactivity_period_secs,
                last_activity: lizenz.last_activity,
                checked_at: ctx.time,
                is_compliant: compliant,
            };
            codec::set_record(store, &keys::moa_status(&lizenz.validator), &status)?;
            ctx.emit(Event::MoaChecked {
                validator: lizenz.validator.clone(),
                compliant,
            });

            if !compliant {
                Self::expire(store, ctx, params, &key, &lizenz)?;
                outcome.expired += 1;
            }
        }

        // Phase 2: drain completed deactivations.
        let deactivating: Vec<(String, DeactivatingLizenz)> =
            codec::scan_records(store, keys::DEACTIVATING_LIZENZ_PREFIX)?;
        for (key, entry) in deactivating {
            // Strict: the queue entry survives the block whose time equals
            // its deactivation end and drains once block time passes it.
            if entry.deactivation_end < ctx.time {
                store.delete(&key)?;
                lifecycle.unlock_best_effort(ctx, &entry.validator, entry.amount);
                outcome.released += 1;
                tracing::info!(
                    validator = %entry.validator,
                    amount = %entry.amount,
                    reason = entry.reason,
                    "deactivation complete, tokens released"
                );
            }
        }

        tracing::debug!(
            height = ctx.height,
            checked = outcome.checked,
            expired = outcome.expired,
            released = outcome.released,
            "moa sweep complete"
        );
        Ok(outcome)
    }

    /// Move one non-compliant license into the deactivation queue.
    fn expire<S: Store>(
        store: &mut S,
        ctx: &mut BlockCtx,
        params: &Params,
        activated_key: &str,
        lizenz: &ActivatedLizenz,
    ) -> Result<(), LicenseError> {
        store.delete(activated_key)?;
        let deactivating = DeactivatingLizenz {
            validator: lizenz.validator.clone(),
            amount: lizenz.amount,
            deactivation_start: ctx.time,
            deactivation_end: ctx.time.plus_seconds(params.deactivation_period_secs as i64),
            reason: REASON_INACTIVITY.to_string(),
        };
        codec::set_record(
            store,
            &keys::deactivating_lizenz(&lizenz.validator),
            &deactivating,
        )?;

        ctx.emit(Event::LizenzDeactivated {
            validator: lizenz.validator.clone(),
            amount: lizenz.amount,
            reason: REASON_INACTIVITY.to_string(),
        });
        tracing::info!(
            validator = %lizenz.validator,
            amount = %lizenz.amount,
            "license expired for inactivity"
        );
        Ok(())
    }

    /// Latest MOA status for `validator`, if a sweep has examined it.
    pub fn status<S: Store>(
        store: &S,
        validator: &Address,
    ) -> Result<Option<MoaStatus>, LicenseError> {
        Ok(codec::get_record(store, &keys::moa_status(validator))?)
    }
}
