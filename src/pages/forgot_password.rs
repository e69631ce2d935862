//! Forgot-password page: asks the backend to e-mail a reset link.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::input::{Input, field_error};
use crate::net::types::ForgotPasswordRequest;
use crate::state::context::{use_api, use_session, use_toasts};
use crate::state::toast::NewToast;
use crate::util::auth::{RouteAccess, install_route_guard};
use crate::util::validation::{FieldErrors, validate_forgot_password};

pub(crate) fn recovery_sent_toast() -> NewToast {
    NewToast::success("Recovery e-mail sent")
        .with_description("We sent you an e-mail to confirm the password recovery, check your inbox.")
}

pub(crate) fn recovery_failed_toast() -> NewToast {
    NewToast::error("Password recovery error")
        .with_description("Something went wrong while requesting the password recovery, try again.")
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let toasts = use_toasts();
    install_route_guard(&session, RouteAccess::Public, use_navigate());

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = ForgotPasswordRequest { email: email.get_untracked().trim().to_owned() };
        if let Err(field_errors) = validate_forgot_password(&request.email) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        let api = api.clone();
        let toasts = toasts.clone();
        leptos::task::spawn_local(async move {
            match api.post_empty("password/forgot", &request).await {
                Ok(()) => {
                    toasts.add(recovery_sent_toast());
                }
                Err(err) => {
                    log::warn!("password recovery request failed: {err}");
                    toasts.add(recovery_failed_toast());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__logo">"GoBarber"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Recover password"</h2>
                    <Input name="email" placeholder="E-mail" value=email error=field_error(errors, "email")/>
                    <Button loading=busy>"Recover"</Button>
                </form>
                <A href="/">"Back to sign in"</A>
            </div>
        </div>
    }
}
