//! Role gate component for protected routes

use crate::pages::Pages;
use hearth_core::{decide, Access, AuthSignal, RoleSet, ViewRegistry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleGateProps {
    /// Session to check, passed in by the caller rather than read from context
    pub signal: AuthSignal,
    pub permitted: RoleSet,
    pub children: Children,
}

/// Shows a spinner while loading, redirects rejected sessions, otherwise
/// renders its children unchanged.
#[function_component(RoleGate)]
pub fn role_gate(props: &RoleGateProps) -> Html {
    match decide(&props.signal, props.permitted) {
        Access::Loading => Pages.loading(),
        Access::Redirect(target) => Pages.redirect(target.path()),
        Access::Granted => html! { <>{ props.children.clone() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use hearth_core::Role;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::prelude::*;

    #[derive(Properties, PartialEq)]
    struct GateHarnessProps {
        signal: AuthSignal,
        permitted: RoleSet,
    }

    #[function_component(GateHarness)]
    fn gate_harness(props: &GateHarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router {history}>
                <RoleGate signal={props.signal.clone()} permitted={props.permitted}>
                    <p id="case-notes">{"case notes"}</p>
                </RoleGate>
            </Router>
        }
    }

    async fn render_gate(signal: AuthSignal, permitted: RoleSet) -> String {
        yew::ServerRenderer::<GateHarness>::with_props(move || GateHarnessProps { signal, permitted })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_loading_shows_spinner_only() {
        let html = render_gate(AuthSignal::loading(), RoleSet::STAFF).await;
        assert!(html.contains(AppConfig::LOADING_TEXT));
        assert!(!html.contains("case notes"));
    }

    #[tokio::test]
    async fn test_rejected_sessions_render_nothing() {
        let anonymous = render_gate(AuthSignal::anonymous(), RoleSet::STAFF).await;
        let parent = AuthSignal::signed_in("u1", Some(Role::FosterParent));
        let wrong_role = render_gate(parent, RoleSet::STAFF).await;

        for html in [anonymous, wrong_role] {
            assert!(!html.contains("case notes"));
            assert!(!html.contains(AppConfig::LOADING_TEXT));
        }
    }

    #[tokio::test]
    async fn test_granted_renders_children_unchanged() {
        let worker = AuthSignal::signed_in("u1", Some(Role::Worker));
        let html = render_gate(worker, RoleSet::STAFF).await;
        assert!(html.contains(r#"<p id="case-notes">case notes</p>"#));
        assert!(!html.contains(AppConfig::LOADING_TEXT));
    }
}
