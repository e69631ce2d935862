//! Sign-in page: e-mail + password against `POST /sessions`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app's landing route. A successful sign-in commits the session and
//! moves on to the dashboard; failures become an error toast.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::input::{Input, field_error};
use crate::state::context::{use_session, use_toasts};
use crate::state::session::SessionError;
use crate::state::toast::NewToast;
use crate::util::auth::{DASHBOARD_PATH, RouteAccess, install_route_guard};
use crate::util::validation::{FieldErrors, validate_sign_in};

/// Toast shown when sign-in fails for any reason other than validation.
pub(crate) fn sign_in_failure_toast(err: &SessionError) -> NewToast {
    let description = match err {
        SessionError::Network(_) => "Could not reach the server, try again.",
        _ => "Could not sign in, check your credentials.",
    };
    NewToast::error("Authentication error").with_description(description)
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_route_guard(&session, RouteAccess::Public, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(field_errors) = validate_sign_in(&email_value, &password_value) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        let session = session.clone();
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.sign_in(&email_value, &password_value).await {
                Ok(()) => navigate(DASHBOARD_PATH, NavigateOptions::default()),
                Err(err) => {
                    log::warn!("sign-in failed: {err}");
                    toasts.add(sign_in_failure_toast(&err));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__logo">"GoBarber"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Sign in"</h2>
                    <Input name="email" placeholder="E-mail" value=email error=field_error(errors, "email")/>
                    <Input
                        name="password"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        error=field_error(errors, "password")
                    />
                    <Button loading=busy>"Sign in"</Button>
                    <A href="/forgot-password">"Forgot my password"</A>
                </form>
                <A href="/signup">"Create account"</A>
            </div>
        </div>
    }
}
