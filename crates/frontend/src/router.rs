//! URL routes and the route switch

use crate::auth::use_auth_signal;
use crate::auth_guard::RoleGate;
use crate::pages::Pages;
use hearth_core::{resolve, AuthSignal, Guard, Resolved, RouteTarget, ViewRegistry};
use yew::prelude::*;
use yew_router::prelude::*;

/// Typed URL surface of the application.
///
/// Guards and views come from [`hearth_core::ROUTE_TABLE`]; this enum only
/// parses the browser location. The empty-path row has no variant since a
/// browser pathname is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/")]
    Dashboard,
    #[at("/user-management")]
    UserManagement,
    #[at("/reports")]
    Reports,
    #[at("/reports-overview")]
    ReportsOverview,
    #[at("/youth-profiles")]
    YouthProfiles,
    #[at("/youth-profiles/:id")]
    YouthDetail { id: String },
    #[at("/foster-parents")]
    FosterParents,
    #[at("/my-youth")]
    MyYouth,
    #[at("/medication-logs/:youth_id")]
    MedicationLog { youth_id: String },
    #[at("/theme-settings")]
    ThemeSettings,
    #[at("/agency-settings")]
    AgencySettings,
    #[at("/unauthorized")]
    Unauthorized,
    /// Anything the table's catch-all absorbs. `/404` is only the path
    /// yew-router needs for this variant; the table has no such row.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Map a table path back to a typed route for redirects
#[must_use]
pub fn route_for(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::NotFound)
}

/// Build the view for a route, wrapping protected views in the role gate
pub fn render_route(route: &Route, signal: &AuthSignal) -> Html {
    let Resolved { entry, params } = resolve(&route.to_path());
    match (entry.guard, entry.target) {
        (_, RouteTarget::Redirect(to)) => Pages.redirect(to),
        (Guard::Public, RouteTarget::View(view)) => Pages.render(view, &params),
        (Guard::Roles(permitted), RouteTarget::View(view)) => html! {
            <RoleGate signal={signal.clone()} {permitted}>
                { Pages.render(view, &params) }
            </RoleGate>
        },
    }
}

#[derive(Properties, PartialEq)]
struct RoutedViewProps {
    route: Route,
}

#[function_component(RoutedView)]
fn routed_view(props: &RoutedViewProps) -> Html {
    let signal = use_auth_signal();
    render_route(&props.route, &signal)
}

/// Render function for `<Switch<Route>>`
pub fn switch(route: Route) -> Html {
    html! { <RoutedView {route} /> }
}
