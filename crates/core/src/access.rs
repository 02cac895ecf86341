//! Role gate for protected routes

use crate::role::RoleSet;
use crate::routes::{LOGIN_PATH, UNAUTHORIZED_PATH};
use crate::signal::AuthSignal;

/// Where a rejected visitor is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Unauthorized,
}

impl RedirectTarget {
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Unauthorized => UNAUTHORIZED_PATH,
        }
    }
}

/// Outcome of the role gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Signal has not resolved; show the placeholder
    Loading,
    Redirect(RedirectTarget),
    Granted,
}

/// Decide whether a session may see a route permitted to `permitted`.
///
/// Checks run in order: loading, missing session, role membership. A
/// session without a role is never a member of any set.
#[must_use]
pub fn decide(signal: &AuthSignal, permitted: RoleSet) -> Access {
    if signal.loading {
        tracing::debug!("auth signal still loading");
        return Access::Loading;
    }

    let Some(user) = signal.current_user.as_ref() else {
        tracing::debug!("no session, redirecting to login");
        return Access::Redirect(RedirectTarget::Login);
    };

    match signal.user_role {
        Some(role) if permitted.contains(role) => Access::Granted,
        role => {
            tracing::debug!(
                user = %user,
                role = ?role,
                permitted = ?permitted,
                "role not permitted, redirecting to unauthorized"
            );
            Access::Redirect(RedirectTarget::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::signal::UserId;

    /// Every subset of the three roles
    fn all_role_sets() -> impl Iterator<Item = RoleSet> {
        (0u8..8).map(|mask| {
            Role::ALL
                .into_iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, role)| role)
                .collect()
        })
    }

    fn role_options() -> [Option<Role>; 4] {
        [
            None,
            Some(Role::Admin),
            Some(Role::Worker),
            Some(Role::FosterParent),
        ]
    }

    #[test]
    fn test_granted_iff_role_is_member() {
        for permitted in all_role_sets() {
            for role in Role::ALL {
                let signal = AuthSignal::signed_in("u1", Some(role));
                let expected = if permitted.contains(role) {
                    Access::Granted
                } else {
                    Access::Redirect(RedirectTarget::Unauthorized)
                };
                assert_eq!(decide(&signal, permitted), expected, "{role} in {permitted:?}");
            }
        }
    }

    #[test]
    fn test_loading_never_grants_or_redirects() {
        for permitted in all_role_sets() {
            for role in role_options() {
                for user in [None, Some(UserId::new("u1"))] {
                    let signal = AuthSignal {
                        current_user: user,
                        user_role: role,
                        loading: true,
                    };
                    assert_eq!(decide(&signal, permitted), Access::Loading);
                }
            }
        }
    }

    #[test]
    fn test_missing_session_always_goes_to_login() {
        for permitted in all_role_sets() {
            for role in role_options() {
                let signal = AuthSignal {
                    current_user: None,
                    user_role: role,
                    loading: false,
                };
                assert_eq!(
                    decide(&signal, permitted),
                    Access::Redirect(RedirectTarget::Login)
                );
            }
        }
    }

    #[test]
    fn test_session_without_role_is_unauthorized() {
        let signal = AuthSignal::signed_in("u1", None);
        assert_eq!(
            decide(&signal, RoleSet::EVERYONE),
            Access::Redirect(RedirectTarget::Unauthorized)
        );
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(RedirectTarget::Login.path(), "/login");
        assert_eq!(RedirectTarget::Unauthorized.path(), "/unauthorized");
    }
}
