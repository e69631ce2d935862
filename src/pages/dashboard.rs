//! Dashboard: the authenticated landing route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::context::{use_session, use_toasts};
use crate::state::toast::NewToast;
use crate::util::auth::{RouteAccess, install_route_guard};

pub(crate) fn greeting(user: Option<&User>) -> String {
    match user.map(|u| u.name.trim()).filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    install_route_guard(&session, RouteAccess::Private, use_navigate());

    let session_out = session.clone();
    let on_sign_out = move |_| {
        // The route guard performs the redirect once the state clears.
        if let Err(err) = session_out.sign_out() {
            log::warn!("sign-out failed: {err}");
            toasts.add(NewToast::error("Sign-out error").with_description(err.to_string()));
        }
    };

    let session_avatar = session.clone();
    let avatar_url = move || session_avatar.current_user().map(|u| u.avatar_url).unwrap_or_default();
    let title = move || greeting(session.current_user().as_ref());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span class="dashboard-page__logo">"GoBarber"</span>
                <div class="dashboard-page__profile">
                    <img src=avatar_url alt=""/>
                    <A href="/profile">{title}</A>
                </div>
                <button class="button button--ghost" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
        </div>
    }
}
