//! Labeled form input with an optional inline error line.
//!
//! DESIGN
//! ======
//! Keeps input markup consistent between the login and registration forms
//! while the pages keep ownership of validation and submit flow.

use leptos::prelude::*;

/// A labeled input bound to a string signal, with a reactive error line.
#[component]
pub fn FormField(
    /// Visible label text.
    label: &'static str,
    /// HTML input type, e.g. `"email"` or `"password"`.
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text shown while empty.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Two-way bound value.
    value: RwSignal<String>,
    /// Error message for this field, if any.
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
