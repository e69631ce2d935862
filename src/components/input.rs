//! Text input with focus/filled/error styling.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// CSS classes for the input wrapper.
#[must_use]
pub fn input_class(focused: bool, filled: bool, has_error: bool) -> String {
    let mut class = String::from("input");
    if focused {
        class.push_str(" input--focused");
    }
    if filled {
        class.push_str(" input--filled");
    }
    if has_error {
        class.push_str(" input--error");
    }
    class
}

/// Reactive error message for one form field.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
}

/// Labelled-by-placeholder input bound to `value`.
#[component]
pub fn Input(
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let class = move || input_class(focused.get(), !value.get().is_empty(), error.get().is_some());

    view! {
        <div class=class>
            <input
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
            <Show when=move || error.get().is_some()>
                <span class="input__error" title=move || error.get().unwrap_or_default()>
                    {move || error.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
