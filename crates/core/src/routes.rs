//! Application route table and path resolution

use crate::access::{self, Access};
use crate::role::{Role, RoleSet};
use crate::signal::AuthSignal;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const CATCH_ALL: &str = "*";

/// Page views the router can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    Dashboard,
    UserManagement,
    Reports,
    YouthProfiles,
    YouthDetail,
    FosterParents,
    MedicationLog,
    ThemeSettings,
    AgencySettings,
    Unauthorized,
    NotFound,
}

impl ViewId {
    pub const ALL: [Self; 13] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::UserManagement,
        Self::Reports,
        Self::YouthProfiles,
        Self::YouthDetail,
        Self::FosterParents,
        Self::MedicationLog,
        Self::ThemeSettings,
        Self::AgencySettings,
        Self::Unauthorized,
        Self::NotFound,
    ];

    /// Human readable page title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Register",
            Self::Dashboard => "Dashboard",
            Self::UserManagement => "User Management",
            Self::Reports => "Reports",
            Self::YouthProfiles => "Youth Profiles",
            Self::YouthDetail => "Youth Detail",
            Self::FosterParents => "Foster Parents",
            Self::MedicationLog => "Medication Log",
            Self::ThemeSettings => "Theme Settings",
            Self::AgencySettings => "Agency Settings",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Page Not Found",
        }
    }
}

/// Access requirement of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    Roles(RoleSet),
}

/// What a matched route produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    Redirect(&'static str),
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub guard: Guard,
    pub target: RouteTarget,
}

impl RouteEntry {
    const fn public(pattern: &'static str, view: ViewId) -> Self {
        Self {
            pattern,
            guard: Guard::Public,
            target: RouteTarget::View(view),
        }
    }

    const fn protected(pattern: &'static str, roles: RoleSet, view: ViewId) -> Self {
        Self {
            pattern,
            guard: Guard::Roles(roles),
            target: RouteTarget::View(view),
        }
    }

    const fn redirect(pattern: &'static str, to: &'static str) -> Self {
        Self {
            pattern,
            guard: Guard::Public,
            target: RouteTarget::Redirect(to),
        }
    }
}

const ADMIN: RoleSet = RoleSet::of(&[Role::Admin]);
const FOSTER_PARENT: RoleSet = RoleSet::of(&[Role::FosterParent]);

/// Route table, matched first to last.
///
/// `/reports-overview` and `/my-youth` intentionally reuse views, and the
/// empty path is kept as its own row next to `/`.
pub static ROUTE_TABLE: [RouteEntry; 16] = [
    RouteEntry::public(LOGIN_PATH, ViewId::Login),
    RouteEntry::public("/register", ViewId::Register),
    RouteEntry::protected("/", RoleSet::EVERYONE, ViewId::Dashboard),
    RouteEntry::redirect("", LOGIN_PATH),
    RouteEntry::protected("/user-management", ADMIN, ViewId::UserManagement),
    RouteEntry::protected("/reports", RoleSet::STAFF, ViewId::Reports),
    RouteEntry::protected("/reports-overview", RoleSet::STAFF, ViewId::Reports),
    RouteEntry::protected("/youth-profiles", RoleSet::STAFF, ViewId::YouthProfiles),
    RouteEntry::protected("/youth-profiles/:id", RoleSet::EVERYONE, ViewId::YouthDetail),
    RouteEntry::protected("/foster-parents", RoleSet::STAFF, ViewId::FosterParents),
    RouteEntry::protected("/my-youth", FOSTER_PARENT, ViewId::YouthProfiles),
    RouteEntry::protected(
        "/medication-logs/:youthId",
        RoleSet::EVERYONE,
        ViewId::MedicationLog,
    ),
    RouteEntry::protected("/theme-settings", RoleSet::EVERYONE, ViewId::ThemeSettings),
    RouteEntry::protected("/agency-settings", ADMIN, ViewId::AgencySettings),
    RouteEntry::public(UNAUTHORIZED_PATH, ViewId::Unauthorized),
    RouteEntry::public(CATCH_ALL, ViewId::NotFound),
];

/// Parameters captured from `:name` segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Store a captured segment, percent-decoded. Segments that do not
    /// decode to UTF-8 are kept as written.
    fn push(&mut self, name: &'static str, segment: &str) {
        let value = urlencoding::decode(segment)
            .map_or_else(|_| segment.to_string(), |decoded| decoded.into_owned());
        self.0.push((name, value));
    }
}

/// A path matched against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub entry: &'static RouteEntry,
    pub params: RouteParams,
}

/// Result of visiting a path with a given session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Loading,
    Redirect(&'static str),
    Render { view: ViewId, params: RouteParams },
}

/// Renders views for the host UI runtime
pub trait ViewRegistry {
    type Output;

    fn render(&self, view: ViewId, params: &RouteParams) -> Self::Output;

    /// Placeholder while the auth signal resolves
    fn loading(&self) -> Self::Output;

    fn redirect(&self, to: &'static str) -> Self::Output;
}

/// Produce the registry's output for a navigation result
pub fn render_navigation<R: ViewRegistry>(registry: &R, navigation: &Navigation) -> R::Output {
    match navigation {
        Navigation::Loading => registry.loading(),
        Navigation::Redirect(to) => registry.redirect(*to),
        Navigation::Render { view, params } => registry.render(*view, params),
    }
}

/// Strip query and fragment, and a trailing slash on anything but the root
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<RouteParams> {
    if pattern == CATCH_ALL {
        return Some(RouteParams::default());
    }
    if pattern.is_empty() || path.is_empty() {
        return (pattern == path).then(RouteParams::default);
    }

    let mut params = RouteParams::default();
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.push(name, actual);
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Match a path against the route table. The catch-all row guarantees a match.
#[must_use]
pub fn resolve(path: &str) -> Resolved {
    let path = normalize(path);
    for entry in &ROUTE_TABLE {
        if let Some(params) = match_pattern(entry.pattern, path) {
            return Resolved { entry, params };
        }
    }
    // Unreachable while the catch-all row is present
    Resolved {
        entry: &ROUTE_TABLE[ROUTE_TABLE.len() - 1],
        params: RouteParams::default(),
    }
}

/// Resolve a path and apply its guard to the session
#[must_use]
pub fn navigate(path: &str, signal: &AuthSignal) -> Navigation {
    let Resolved { entry, params } = resolve(path);
    match (entry.guard, entry.target) {
        (_, RouteTarget::Redirect(to)) => Navigation::Redirect(to),
        (Guard::Public, RouteTarget::View(view)) => Navigation::Render { view, params },
        (Guard::Roles(permitted), RouteTarget::View(view)) => {
            match access::decide(signal, permitted) {
                Access::Loading => Navigation::Loading,
                Access::Redirect(target) => Navigation::Redirect(target.path()),
                Access::Granted => Navigation::Render { view, params },
            }
        }
    }
}
