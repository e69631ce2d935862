//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_container::ToastContainer;
use crate::config::ClientConfig;
use crate::net::api::{ApiClient, FetchTransport, HttpTransport};
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, profile::ProfilePage,
    reset_password::ResetPasswordPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::session::SessionStore;
use crate::state::storage::{BrowserStorage, KeyValueStore, SessionStorage};
use crate::state::toast::Toasts;

/// Build the API client and hydrate the session store on top of it.
pub fn compose(
    config: &ClientConfig,
    store: Arc<dyn KeyValueStore>,
    transport: Arc<dyn HttpTransport>,
) -> (ApiClient, SessionStore) {
    let api = ApiClient::new(config.api_base_url.clone(), transport);
    let storage = SessionStorage::new(store, &config.storage_namespace);
    let session = SessionStore::initialize_or_reset(storage, api.clone());
    (api, session)
}

/// Root application component.
///
/// Constructs the shared handles once and provides them to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let (api, session) = compose(&config, Arc::new(BrowserStorage), Arc::new(FetchTransport));
    log::debug!("GoBarber client talking to {}", api.base_url());

    provide_context(config);
    provide_context(api);
    provide_context(session);
    provide_context(Toasts::new());

    view! {
        <Title text="GoBarber"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
            <ToastContainer/>
        </Router>
    }
}
