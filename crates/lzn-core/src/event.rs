//! # Event Taxonomy
//!
//! Every state-changing operation emits a typed event carrying the affected
//! address or validator and the relevant amounts. Events are collected by
//! the block-execution context and drained by the host after each handler
//! completes; the core never writes them anywhere itself.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::amount::LznAmount;
use crate::role::Role;

/// A typed observability event emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A new verified account was created.
    IdentityVerified {
        /// The verified address.
        address: Address,
        /// The granted role.
        role: Role,
        /// The provider that performed verification.
        provider_id: String,
    },
    /// An account's role was upgraded.
    RoleChanged {
        /// The affected address.
        address: Address,
        /// Role before the change.
        from: Role,
        /// Role after the change.
        to: Role,
    },
    /// An identity was migrated from one address to another.
    RoleMigrated {
        /// The source address (deactivated).
        from: Address,
        /// The target address (newly verified).
        to: Address,
        /// The migrated role.
        role: Role,
    },
    /// A license was activated.
    LizenzActivated {
        /// The validator holding the license.
        validator: Address,
        /// The activated amount.
        amount: LznAmount,
    },
    /// A license left the activated set.
    LizenzDeactivated {
        /// The validator whose license was deactivated.
        validator: Address,
        /// The deactivated amount.
        amount: LznAmount,
        /// Why the license was deactivated (e.g. "inactivity", "manual").
        reason: String,
    },
    /// A license moved between validators.
    LizenzTransferred {
        /// Previous holder.
        from: Address,
        /// New holder.
        to: Address,
        /// The transferred amount.
        amount: LznAmount,
    },
    /// The per-block activity compliance sweep examined a validator.
    MoaChecked {
        /// The examined validator.
        validator: Address,
        /// Whether the validator was compliant.
        compliant: bool,
    },
    /// The custody collaborator locked license tokens.
    LznLocked {
        /// The validator whose tokens were locked.
        validator: Address,
        /// The locked amount.
        amount: LznAmount,
    },
    /// The custody collaborator released license tokens.
    LznUnlocked {
        /// The validator whose tokens were released.
        validator: Address,
        /// The released amount.
        amount: LznAmount,
    },
}

impl Event {
    /// Stable event-type name used by the host's indexing layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::IdentityVerified { .. } => "identity_verified",
            Event::RoleChanged { .. } => "role_changed",
            Event::RoleMigrated { .. } => "role_migrated",
            Event::LizenzActivated { .. } => "lizenz_activated",
            Event::LizenzDeactivated { .. } => "lizenz_deactivated",
            Event::LizenzTransferred { .. } => "lizenz_transferred",
            Event::MoaChecked { .. } => "moa_checked",
            Event::LznLocked { .. } => "lzn_locked",
            Event::LznUnlocked { .. } => "lzn_unlocked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn event_kind_names_are_stable() {
        let e = Event::LizenzActivated {
            validator: addr("validator1"),
            amount: LznAmount::from_units(5),
        };
        assert_eq!(e.kind(), "lizenz_activated");
    }

    #[test]
    fn event_serde_is_tagged() {
        let e = Event::RoleChanged {
            address: addr("addr1lzn"),
            from: Role::Citizen,
            to: Role::Validator,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "role_changed");
        assert_eq!(json["from"], "Citizen");
    }
}
