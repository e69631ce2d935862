//! Reset-password page, reached from the link in the recovery e-mail
//! (`/reset-password?token=...`).

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::button::Button;
use crate::components::input::{Input, field_error};
use crate::net::types::ResetPasswordRequest;
use crate::state::context::{use_api, use_toasts};
use crate::state::toast::NewToast;
use crate::util::auth::SIGN_IN_PATH;
use crate::util::validation::{FieldErrors, validate_reset_password};

/// Why a reset request could not be built.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ResetInputError {
    Fields(FieldErrors),
    MissingToken,
}

/// Validate the form and pair it with the token from the URL.
pub(crate) fn build_reset_request(
    token: Option<String>,
    password: &str,
    confirmation: &str,
) -> Result<ResetPasswordRequest, ResetInputError> {
    validate_reset_password(password, confirmation).map_err(ResetInputError::Fields)?;
    let token = token
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or(ResetInputError::MissingToken)?;
    Ok(ResetPasswordRequest {
        password: password.to_owned(),
        password_confirmation: confirmation.to_owned(),
        token,
    })
}

pub(crate) fn reset_failed_toast() -> NewToast {
    NewToast::error("Password reset error").with_description("Something went wrong while resetting your password, try again.")
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token = query.with_untracked(|q| q.get("token"));
        let request = match build_reset_request(token, &password.get_untracked(), &confirmation.get_untracked()) {
            Ok(request) => request,
            Err(ResetInputError::Fields(field_errors)) => {
                errors.set(field_errors);
                return;
            }
            Err(ResetInputError::MissingToken) => {
                errors.set(FieldErrors::default());
                toasts.add(reset_failed_toast());
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let api = api.clone();
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.post_empty("password/reset", &request).await {
                Ok(()) => navigate(SIGN_IN_PATH, NavigateOptions::default()),
                Err(err) => {
                    log::warn!("password reset failed: {err}");
                    toasts.add(reset_failed_toast());
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
                    <h2>"Reset password"</h2>
                    <Input
                        name="password"
                        placeholder="New password"
                        input_type="password"
                        value=password
                        error=field_error(errors, "password")
                    />
                    <Input
                        name="password_confirmation"
                        placeholder="Confirm password"
                        input_type="password"
                        value=confirmation
                        error=field_error(errors, "password_confirmation")
                    />
                    <Button loading=busy>"Change password"</Button>
                </form>
            </div>
        </div>
    }
}
