//! User roles and permitted-role sets

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role held by a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Worker,
    FosterParent,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Worker, Self::FosterParent];

    /// Wire tag used by the auth provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Worker => "worker",
            Self::FosterParent => "foster_parent",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Admin => 1,
            Self::Worker => 1 << 1,
            Self::FosterParent => 1 << 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| CoreError::unknown_role(s))
    }
}

/// Set of roles permitted on a route
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: Self = Self(0);
    pub const STAFF: Self = Self::of(&[Role::Admin, Role::Worker]);
    pub const EVERYONE: Self = Self::of(&[Role::Admin, Role::Worker, Role::FosterParent]);

    /// Build a set from a list of roles. Usable in `const` items.
    #[must_use]
    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        Self(bits)
    }

    #[must_use]
    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, role| bits | role.bit()))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_tags() {
        assert_eq!("foster_parent".parse::<Role>(), Ok(Role::FosterParent));
        assert_eq!(Role::Worker.to_string(), "worker");
        assert_eq!(
            serde_json::to_string(&Role::FosterParent).unwrap(),
            "\"foster_parent\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"admin\"").unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert_eq!(
            "caseworker".parse::<Role>(),
            Err(CoreError::unknown_role("caseworker"))
        );
        // Tags are case sensitive
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_set_membership() {
        assert!(RoleSet::STAFF.contains(Role::Admin));
        assert!(RoleSet::STAFF.contains(Role::Worker));
        assert!(!RoleSet::STAFF.contains(Role::FosterParent));
        assert!(RoleSet::EMPTY.is_empty());
        assert!(Role::ALL.into_iter().all(|r| RoleSet::EVERYONE.contains(r)));

        let collected: RoleSet = [Role::FosterParent].into_iter().collect();
        assert_eq!(collected, RoleSet::of(&[Role::FosterParent]));
        assert_eq!(format!("{:?}", RoleSet::STAFF), "{Admin, Worker}");
    }
}
