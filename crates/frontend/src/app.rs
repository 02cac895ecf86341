use crate::auth::{use_auth, AuthAction, AuthProvider};
use crate::config::AppConfig;
use crate::router::{switch, Route};
use hearth_core::{navigate, AuthSignal, Navigation};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
                    <Header />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </AuthProvider>
    }
}

const NAV_ITEMS: [(Route, &str); 8] = [
    (Route::Dashboard, "Dashboard"),
    (Route::YouthProfiles, "Youth"),
    (Route::MyYouth, "My Youth"),
    (Route::FosterParents, "Foster Parents"),
    (Route::Reports, "Reports"),
    (Route::UserManagement, "Users"),
    (Route::AgencySettings, "Agency"),
    (Route::ThemeSettings, "Theme"),
];

/// Navigation entries the session would be allowed to open
fn visible_nav_items(signal: &AuthSignal) -> Vec<(Route, &'static str)> {
    NAV_ITEMS
        .into_iter()
        .filter(|(route, _)| {
            matches!(
                navigate(&route.to_path(), signal),
                Navigation::Render { .. }
            )
        })
        .collect()
}

#[function_component(Header)]
fn header() -> Html {
    let auth = use_auth();

    let on_sign_out = {
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::SignedOut);
        })
    };

    let signal = &auth.signal;
    let session = match (&signal.current_user, signal.user_role) {
        (Some(user), role) if !signal.loading => html! {
            <div class="flex items-center gap-3">
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    {format!("{user} ({})", role.map_or("no role", |r| r.as_str()))}
                </span>
                <button
                    onclick={on_sign_out}
                    class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                >
                    {"Sign out"}
                </button>
            </div>
        },
        _ => html! {},
    };

    html! {
        <header class="bg-gray-50 dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="p-4 flex justify-between items-center">
                <h1 class="text-xl font-bold text-gray-900 dark:text-gray-100">{AppConfig::APP_NAME}</h1>
                {session}
            </div>
            <nav class="flex px-4">
                { for visible_nav_items(signal).into_iter().map(|(route, label)| html! {
                    <Link<Route> to={route} classes="px-4 py-3 text-sm font-medium text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                        {label}
                    </Link<Route>>
                }) }
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::Role;

    fn labels(signal: &AuthSignal) -> Vec<&'static str> {
        visible_nav_items(signal)
            .into_iter()
            .map(|(_, label)| label)
            .collect()
    }

    #[test]
    fn test_no_nav_without_session() {
        assert!(labels(&AuthSignal::loading()).is_empty());
        assert!(labels(&AuthSignal::anonymous()).is_empty());
    }

    #[test]
    fn test_nav_follows_role() {
        let parent = AuthSignal::signed_in("u1", Some(Role::FosterParent));
        assert_eq!(labels(&parent), ["Dashboard", "My Youth", "Theme"]);

        let worker = AuthSignal::signed_in("u2", Some(Role::Worker));
        assert_eq!(
            labels(&worker),
            ["Dashboard", "Youth", "Foster Parents", "Reports", "Theme"]
        );

        let admin = AuthSignal::signed_in("u3", Some(Role::Admin));
        assert_eq!(labels(&admin).len(), 7);
        assert!(!labels(&admin).contains(&"My Youth"));
    }
}
