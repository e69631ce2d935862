//! Profile page: edit name, e-mail, password and avatar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the form (`PUT /profile/update`) and the avatar input
//! (`PATCH /users/avatar`) hand the user the backend returns to
//! `SessionStore::update_user`, so every consumer of the session sees the
//! change and the token stays as it was.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::input::{Input, field_error};
use crate::net::api::ApiError;
use crate::net::types::{ProfileUpdate, User};
use crate::state::context::{use_session, use_toasts};
use crate::state::storage::StorageError;
use crate::state::toast::NewToast;
use crate::util::auth::{DASHBOARD_PATH, RouteAccess, install_route_guard};
use crate::util::validation::{FieldErrors, ProfileForm, validate_profile};

/// Request body for a validated form. Password fields are only included
/// when the user typed their current password.
pub(crate) fn profile_update_from(form: &ProfileForm) -> ProfileUpdate {
    let mut update = ProfileUpdate {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        ..ProfileUpdate::default()
    };
    if form.is_changing_password() {
        update.old_password = Some(form.old_password.clone());
        update.password = Some(form.password.clone());
        update.password_confirmation = Some(form.password_confirmation.clone());
    }
    update
}

pub(crate) fn profile_updated_toast() -> NewToast {
    NewToast::success("Profile updated").with_description("Your profile information was updated successfully.")
}

pub(crate) fn profile_failed_toast() -> NewToast {
    NewToast::error("Update error").with_description("Something went wrong while updating your profile, try again.")
}

pub(crate) fn avatar_updated_toast() -> NewToast {
    NewToast::success("Avatar updated")
}

/// Toast for an avatar upload: success only when both the upload and the
/// session update went through.
pub(crate) fn avatar_result_toast(result: Result<Result<(), StorageError>, ApiError>) -> NewToast {
    match result {
        Ok(Ok(())) => avatar_updated_toast(),
        Ok(Err(err)) => {
            log::warn!("failed to persist new avatar: {err}");
            profile_failed_toast()
        }
        Err(err) => {
            log::warn!("avatar upload failed: {err}");
            profile_failed_toast()
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    install_route_guard(&session, RouteAccess::Private, navigate.clone());

    let initial = session.current_user().unwrap_or_default();
    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let old_password = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let session_submit = session.clone();
    let toasts_submit = toasts.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            old_password: old_password.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        if let Err(field_errors) = validate_profile(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        let body = profile_update_from(&form);
        let session = session_submit.clone();
        let toasts = toasts_submit.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session.api().put_json::<_, User>("profile/update", &body).await;
            match result {
                Ok(user) => match session.update_user(user) {
                    Ok(()) => {
                        toasts.add(profile_updated_toast());
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("failed to persist updated profile: {err}");
                        toasts.add(profile_failed_toast());
                        busy.set(false);
                    }
                },
                Err(err) => {
                    log::warn!("profile update failed: {err}");
                    toasts.add(profile_failed_toast());
                    busy.set(false);
                }
            }
        });
    };

    let session_avatar = session.clone();
    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let session = session_avatar.clone();
            let toasts = toasts.clone();
            leptos::task::spawn_local(async move {
                let result = session.api().upload_avatar(&file).await;
                toasts.add(avatar_result_toast(result.map(|user| session.update_user(user))));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, &session_avatar, &toasts);
        }
    };

    let avatar_url = {
        let session = session.clone();
        move || session.current_user().map(|u| u.avatar_url).unwrap_or_default()
    };
    let user_name = move || session.current_user().map(|u| u.name).unwrap_or_default();

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <A href="/dashboard">"← Back"</A>
            </header>
            <form class="auth-form" on:submit=on_submit>
                <div class="avatar-input">
                    <img src=avatar_url alt=user_name/>
                    <label for="avatar">
                        "Change avatar"
                        <input type="file" id="avatar" accept="image/*" on:change=on_avatar_change/>
                    </label>
                </div>
                <h1>"My profile"</h1>
                <Input name="name" placeholder="Name" value=name error=field_error(errors, "name")/>
                <Input name="email" placeholder="E-mail" value=email error=field_error(errors, "email")/>
                <Input
                    name="old_password"
                    placeholder="Current password"
                    input_type="password"
                    value=old_password
                    error=field_error(errors, "old_password")
                />
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
                    value=password_confirmation
                    error=field_error(errors, "password_confirmation")
                />
                <Button loading=busy>"Save changes"</Button>
            </form>
        </div>
    }
}
