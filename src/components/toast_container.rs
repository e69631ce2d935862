//! Stack of toast notifications rendered above every page.
//!
//! Each toast removes itself after the configured timeout (browser builds);
//! the close button removes it immediately.

use leptos::prelude::*;

use crate::state::context::{use_config, use_toasts};
use crate::state::toast::ToastMessage;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();
    let timeout_ms = use_config().toast_timeout_ms;

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.messages()
                key=|message| message.id.clone()
                children=move |message| view! { <Toast message=message timeout_ms=timeout_ms/> }
            />
        </div>
    }
}

#[component]
fn Toast(message: ToastMessage, timeout_ms: u32) -> impl IntoView {
    let toasts = use_toasts();
    let ToastMessage { id, kind, title, description } = message;

    #[cfg(feature = "csr")]
    {
        let toasts = toasts.clone();
        let id = id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(timeout_ms))).await;
            toasts.remove(&id);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = timeout_ms;

    let on_close = move |_| toasts.remove(&id);

    view! {
        <div class=kind.class() role="alert">
            <div class="toast__body">
                <strong>{title}</strong>
                {description.map(|text| view! { <p>{text}</p> })}
            </div>
            <button class="toast__close" type="button" on:click=on_close>
                "×"
            </button>
        </div>
    }
}
