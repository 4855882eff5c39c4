//! # Account Roles
//!
//! The role lattice of the permissioned protocol. A verified account holds
//! exactly one role; transitions are monotonic upgrades decided by
//! [`Role::can_transition_to`] and nowhere else.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The role of a verified account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// No role assigned. Never stored — rejected at account creation.
    Unspecified,
    /// Unverified visitor. Not eligible for identity verification targets.
    Guest,
    /// Verified citizen. May hold identity, migrate, and upgrade to validator.
    Citizen,
    /// Verified validator. May activate an economic license (LZN).
    Validator,
}

impl Role {
    /// Whether this role may be assigned when a verified account is created.
    ///
    /// Only `Citizen` and `Validator` are valid verification targets:
    /// `Unspecified` is a sentinel and `Guest` is by definition unverified.
    pub fn is_verified_role(self) -> bool {
        matches!(self, Role::Citizen | Role::Validator)
    }

    /// Whether a stored account may transition from `self` to `to`.
    ///
    /// The lattice is upgrade-only: `Citizen -> Validator` is the sole
    /// permitted transition. Downgrades (e.g. `Validator -> Guest`) and
    /// re-assignment of the same role are rejected.
    pub fn can_transition_to(self, to: Role) -> bool {
        matches!((self, to), (Role::Citizen, Role::Validator))
    }

    /// Stable wire name used in events and the by-role query.
    pub fn name(self) -> &'static str {
        match self {
            Role::Unspecified => "unspecified",
            Role::Guest => "guest",
            Role::Citizen => "citizen",
            Role::Validator => "validator",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unspecified" => Ok(Role::Unspecified),
            "guest" => Ok(Role::Guest),
            "citizen" => Ok(Role::Citizen),
            "validator" => Ok(Role::Validator),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_citizen_and_validator_are_verified_roles() {
        assert!(!Role::Unspecified.is_verified_role());
        assert!(!Role::Guest.is_verified_role());
        assert!(Role::Citizen.is_verified_role());
        assert!(Role::Validator.is_verified_role());
    }

    #[test]
    fn citizen_upgrades_to_validator() {
        assert!(Role::Citizen.can_transition_to(Role::Validator));
    }

    #[test]
    fn downgrades_are_rejected() {
        assert!(!Role::Validator.can_transition_to(Role::Guest));
        assert!(!Role::Validator.can_transition_to(Role::Citizen));
        assert!(!Role::Citizen.can_transition_to(Role::Guest));
    }

    #[test]
    fn same_role_transition_is_rejected() {
        assert!(!Role::Validator.can_transition_to(Role::Validator));
        assert!(!Role::Citizen.can_transition_to(Role::Citizen));
    }

    #[test]
    fn role_name_roundtrip() {
        for role in [Role::Unspecified, Role::Guest, Role::Citizen, Role::Validator] {
            assert_eq!(role.name().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_string_rejected() {
        assert!("admin".parse::<Role>().is_err());
    }
}
