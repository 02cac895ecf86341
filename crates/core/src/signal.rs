//! Authentication signal supplied by the external auth provider

use crate::error::CoreResult;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the session as seen by the router.
///
/// While `loading` is set, `current_user` and `user_role` are provisional and
/// must not be used for access decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSignal {
    #[serde(default)]
    pub current_user: Option<UserId>,
    #[serde(default)]
    pub user_role: Option<Role>,
    #[serde(default)]
    pub loading: bool,
}

impl AuthSignal {
    /// Signal that has not resolved yet
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            current_user: None,
            user_role: None,
            loading: true,
        }
    }

    /// Resolved signal with no session
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            current_user: None,
            user_role: None,
            loading: false,
        }
    }

    /// Resolved signal for a signed-in user
    pub fn signed_in(user: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            current_user: Some(UserId::new(user)),
            user_role: role,
            loading: false,
        }
    }

    /// Session is resolved and a user is present
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !self.loading && self.current_user.is_some()
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for AuthSignal {
    fn default() -> Self {
        Self::loading()
    }
}
