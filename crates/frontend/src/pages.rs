//! Page registry and page views

use crate::components::Spinner;
use crate::config::AppConfig;
use crate::router::{route_for, Route};
use hearth_core::{RouteParams, ViewId, ViewRegistry};
use yew::prelude::*;
use yew_router::prelude::*;

/// Maps table views onto Yew page components
pub struct Pages;

impl ViewRegistry for Pages {
    type Output = Html;

    fn render(&self, view: ViewId, params: &RouteParams) -> Html {
        let param = |name: &str| AttrValue::from(params.get(name).unwrap_or_default().to_string());
        match view {
            ViewId::Login => html! { <LoginPage /> },
            ViewId::Register => html! { <RegisterPage /> },
            ViewId::YouthDetail => html! { <YouthDetailPage id={param("id")} /> },
            ViewId::MedicationLog => html! { <MedicationLogPage youth_id={param("youthId")} /> },
            ViewId::Unauthorized => html! { <UnauthorizedPage /> },
            ViewId::NotFound => html! { <NotFoundPage /> },
            ViewId::Dashboard
            | ViewId::UserManagement
            | ViewId::Reports
            | ViewId::YouthProfiles
            | ViewId::FosterParents
            | ViewId::ThemeSettings
            | ViewId::AgencySettings => html! {
                <PageLayout title={view.title()} />
            },
        }
    }

    fn loading(&self) -> Html {
        html! { <Spinner text={Some(AttrValue::Static(AppConfig::LOADING_TEXT))} /> }
    }

    fn redirect(&self, to: &'static str) -> Html {
        html! { <Redirect<Route> to={route_for(to)} /> }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageLayout)]
pub fn page_layout(props: &PageLayoutProps) -> Html {
    html! {
        <section class="max-w-5xl mx-auto p-6">
            <h2 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-4">
                {props.title.clone()}
            </h2>
            {props.children.clone()}
        </section>
    }
}

#[function_component(LoginPage)]
fn login_page() -> Html {
    html! {
        <PageLayout title={ViewId::Login.title()}>
            <p class="text-gray-600 dark:text-gray-400">
                {"Sign in with your agency account to continue."}
            </p>
            <Link<Route> to={Route::Register} classes="text-blue-600 dark:text-blue-400">
                {"Need an account? Register"}
            </Link<Route>>
        </PageLayout>
    }
}

#[function_component(RegisterPage)]
fn register_page() -> Html {
    html! {
        <PageLayout title={ViewId::Register.title()}>
            <Link<Route> to={Route::Login} classes="text-blue-600 dark:text-blue-400">
                {"Already registered? Sign in"}
            </Link<Route>>
        </PageLayout>
    }
}

#[derive(Properties, PartialEq)]
struct YouthDetailProps {
    id: AttrValue,
}

#[function_component(YouthDetailPage)]
fn youth_detail_page(props: &YouthDetailProps) -> Html {
    html! {
        <PageLayout title={ViewId::YouthDetail.title()}>
            <p class="text-gray-600 dark:text-gray-400">{format!("Youth {}", props.id)}</p>
            <Link<Route>
                to={Route::MedicationLog { youth_id: props.id.to_string() }}
                classes="text-blue-600 dark:text-blue-400"
            >
                {"Medication log"}
            </Link<Route>>
        </PageLayout>
    }
}

#[derive(Properties, PartialEq)]
struct MedicationLogProps {
    youth_id: AttrValue,
}

#[function_component(MedicationLogPage)]
fn medication_log_page(props: &MedicationLogProps) -> Html {
    html! {
        <PageLayout title={ViewId::MedicationLog.title()}>
            <Link<Route>
                to={Route::YouthDetail { id: props.youth_id.to_string() }}
                classes="text-blue-600 dark:text-blue-400"
            >
                {format!("Back to youth {}", props.youth_id)}
            </Link<Route>>
        </PageLayout>
    }
}

#[function_component(UnauthorizedPage)]
fn unauthorized_page() -> Html {
    html! {
        <PageLayout title={ViewId::Unauthorized.title()}>
            <p class="text-gray-600 dark:text-gray-400">
                {"Your role does not have access to that page."}
            </p>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 dark:text-blue-400">
                {"Go to dashboard"}
            </Link<Route>>
        </PageLayout>
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    html! {
        <PageLayout title={ViewId::NotFound.title()}>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 dark:text-blue-400">
                {"Go to dashboard"}
            </Link<Route>>
        </PageLayout>
    }
}
