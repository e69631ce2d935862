//! Submit button that disables itself while a request is in flight.

use leptos::prelude::*;

#[component]
pub fn Button(loading: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <button
            class=move || if loading.get() { "button button--loading" } else { "button" }
            type="submit"
            disabled=move || loading.get()
        >
            {children()}
        </button>
    }
}
