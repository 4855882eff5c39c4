//! # Message Surface
//!
//! Transaction-shaped entry points for the license lifecycle. As in the
//! identity module, messages carry raw strings parsed at this boundary,
//! and every handler refreshes the caller's account and license activity
//! on success.

use lzn_core::{Address, IdentityHash, LznAmount};
use lzn_store::{params, BlockCtx, Store};

use serde::{Deserialize, Serialize};

use crate::custody::TokenCustody;
use crate::error::LicenseError;
use crate::lifecycle::{LicenseLifecycle, REASON_MANUAL};

/// Request to activate a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgActivateLzn {
    /// The activating validator.
    pub validator: String,
    /// Amount to activate, as a decimal unit string.
    pub amount: String,
    /// The caller's identity hash; must match the verified account.
    pub identity_hash: String,
}

/// Request to deactivate the caller's license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeactivateLzn {
    /// The deactivating validator.
    pub validator: String,
}

/// Request to transfer an activated license between validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTransferLzn {
    /// Current holder.
    pub from: String,
    /// New holder.
    pub to: String,
}

fn touch<S: Store>(store: &mut S, ctx: &BlockCtx, address: &Address) -> Result<(), LicenseError> {
    lzn_identity::touch_account(store, ctx.time, address)?;
    crate::lifecycle::update_lizenz_activity(store, ctx.time, address)
}

/// Handle [`MsgActivateLzn`].
pub fn handle_activate_lzn<C: TokenCustody, S: Store>(
    lifecycle: &mut LicenseLifecycle<C>,
    store: &mut S,
    ctx: &mut BlockCtx,
    msg: &MsgActivateLzn,
) -> Result<(), LicenseError> {
    let validator = Address::new(&msg.validator)?;
    let amount = LznAmount::parse(&msg.amount)?;
    let identity_hash = IdentityHash::new(&msg.identity_hash)?;

    let params = params::get_params(store)?;
    lifecycle.activate(store, ctx, &params, &validator, amount, &identity_hash)?;
    touch(store, ctx, &validator)
}

/// Handle [`MsgDeactivateLzn`].
pub fn handle_deactivate_lzn<C: TokenCustody, S: Store>(
    lifecycle: &mut LicenseLifecycle<C>,
    store: &mut S,
    ctx: &mut BlockCtx,
    msg: &MsgDeactivateLzn,
) -> Result<(), LicenseError> {
    let validator = Address::new(&msg.validator)?;
    let params = params::get_params(store)?;
    lifecycle.deactivate(store, ctx, &params, &validator, REASON_MANUAL)?;
    touch(store, ctx, &validator)
}

/// Handle [`MsgTransferLzn`].
pub fn handle_transfer_lzn<C: TokenCustody, S: Store>(
    lifecycle: &mut LicenseLifecycle<C>,
    store: &mut S,
    ctx: &mut BlockCtx,
    msg: &MsgTransferLzn,
) -> Result<(), LicenseError> {
    let from = Address::new(&msg.from)?;
    let to = Address::new(&msg.to)?;
    let params = params::get_params(store)?;
    lifecycle.transfer(store, ctx, &params, &from, &to)?;
    touch(store, ctx, &from)?;
    touch(store, ctx, &to)
}
