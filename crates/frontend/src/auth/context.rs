//! Authentication context and provider

use crate::config::AppConfig;
use hearth_core::{AuthSignal, Role};
use std::rc::Rc;
use web_sys::Storage;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthContextData {
    /// Starts out loading until the stored session has been checked
    pub signal: AuthSignal,
}

/// Actions dispatched by the external auth provider
pub enum AuthAction {
    SignedIn { user: String, role: Option<Role> },
    SignedOut,
    /// Finish loading without a session
    Resolved,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn { user, role } => {
                tracing::info!(%user, ?role, "signed in");
                let signal = AuthSignal::signed_in(user, role);
                store_signal(&signal);
                Rc::new(Self { signal })
            }
            AuthAction::SignedOut => {
                tracing::info!("signed out");
                clear_stored_signal();
                Rc::new(Self {
                    signal: AuthSignal::anonymous(),
                })
            }
            AuthAction::Resolved => {
                if !self.signal.loading {
                    return self;
                }
                Rc::new(Self {
                    signal: AuthSignal::anonymous(),
                })
            }
        }
    }
}

/// Get sessionStorage. There is no browser window outside wasm32.
fn get_session_storage() -> Option<Storage> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn store_signal(signal: &AuthSignal) {
    let Some(storage) = get_session_storage() else {
        return;
    };
    match signal.to_json() {
        Ok(serialized) => {
            if storage
                .set_item(AppConfig::AUTH_SIGNAL_KEY, &serialized)
                .is_err()
            {
                tracing::warn!("failed to persist auth signal");
            }
        }
        Err(err) => tracing::warn!(%err, "failed to serialize auth signal"),
    }
}

fn clear_stored_signal() {
    if let Some(storage) = get_session_storage() {
        if storage.remove_item(AppConfig::AUTH_SIGNAL_KEY).is_err() {
            tracing::warn!("failed to clear stored auth signal");
        }
    }
}

/// Read a previously resolved session, if it is still usable
fn load_stored_signal() -> Option<AuthSignal> {
    let stored = get_session_storage()?
        .get_item(AppConfig::AUTH_SIGNAL_KEY)
        .ok()
        .flatten()?;
    match AuthSignal::from_json(&stored) {
        Ok(signal) if signal.is_authenticated() => Some(signal),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(%err, "discarding stored auth signal");
            clear_stored_signal();
            None
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(AuthContextData::default);

    // Restore the session from sessionStorage on mount
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            match load_stored_signal() {
                Some(AuthSignal {
                    current_user: Some(user),
                    user_role,
                    ..
                }) => auth.dispatch(AuthAction::SignedIn {
                    user: user.0,
                    role: user_role,
                }),
                _ => auth.dispatch(AuthAction::Resolved),
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current auth signal
#[hook]
pub fn use_auth_signal() -> AuthSignal {
    let auth = use_auth();
    auth.signal.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AuthContextData, action: AuthAction) -> AuthSignal {
        Rc::new(state).reduce(action).signal.clone()
    }

    #[test]
    fn test_starts_loading() {
        assert_eq!(AuthContextData::default().signal, AuthSignal::loading());
    }

    #[test]
    fn test_resolved_clears_loading_without_session() {
        let signal = reduce(AuthContextData::default(), AuthAction::Resolved);
        assert_eq!(signal, AuthSignal::anonymous());
    }

    #[test]
    fn test_resolved_keeps_existing_session() {
        let state = AuthContextData {
            signal: AuthSignal::signed_in("u1", Some(Role::Worker)),
        };
        let signal = reduce(state, AuthAction::Resolved);
        assert_eq!(signal, AuthSignal::signed_in("u1", Some(Role::Worker)));
    }

    #[test]
    fn test_sign_in_and_out() {
        let signal = reduce(
            AuthContextData::default(),
            AuthAction::SignedIn {
                user: "u1".to_string(),
                role: Some(Role::FosterParent),
            },
        );
        assert!(signal.is_authenticated());
        assert_eq!(signal.user_role, Some(Role::FosterParent));

        let signal = reduce(AuthContextData { signal }, AuthAction::SignedOut);
        assert_eq!(signal, AuthSignal::anonymous());
    }
}
