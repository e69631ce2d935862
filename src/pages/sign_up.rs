//! Sign-up page: creates an account via `POST /users`.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::input::{Input, field_error};
use crate::net::api::ApiError;
use crate::net::types::SignUpRequest;
use crate::state::context::{use_api, use_session, use_toasts};
use crate::state::toast::NewToast;
use crate::util::auth::{RouteAccess, SIGN_IN_PATH, install_route_guard};
use crate::util::validation::{FieldErrors, validate_sign_up};

pub(crate) fn sign_up_success_toast() -> NewToast {
    NewToast::success("Registration complete").with_description("You can now sign in to GoBarber.")
}

pub(crate) fn sign_up_failure_toast(err: &ApiError) -> NewToast {
    let description = match err {
        ApiError::Status { message: Some(message), .. } => message.clone(),
        _ => "Could not create your account, try again.".to_owned(),
    };
    NewToast::error("Registration error").with_description(description)
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_route_guard(&session, RouteAccess::Public, navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = SignUpRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if let Err(field_errors) = validate_sign_up(&request.name, &request.email, &request.password) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        let api = api.clone();
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.post_empty("users", &request).await {
                Ok(()) => {
                    toasts.add(sign_up_success_toast());
                    navigate(SIGN_IN_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("sign-up failed: {err}");
                    toasts.add(sign_up_failure_toast(&err));
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
                    <h2>"Create your account"</h2>
                    <Input name="name" placeholder="Name" value=name error=field_error(errors, "name")/>
                    <Input name="email" placeholder="E-mail" value=email error=field_error(errors, "email")/>
                    <Input
                        name="password"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        error=field_error(errors, "password")
                    />
                    <Button loading=busy>"Sign up"</Button>
                </form>
                <A href="/">"Back to sign in"</A>
            </div>
        </div>
    }
}
