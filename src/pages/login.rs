//! Login page: email + password against the mock auth layer.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::error::FieldError;
use crate::net::mock;
use crate::net::types::Session;
use crate::state::session::SessionState;
use crate::util::storage;
use crate::util::validate::validate_login_form;

/// Canonical form of a typed email: trimmed, lowercased.
fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Look up the message for one field in a validation result.
fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
}

/// Login page with client-side validation and a busy flag while the mock
/// call is in flight. Already-authenticated visitors are sent to `/`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Signed-in visitors skip the form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let email_error = Signal::derive(move || field_message(&field_errors.get(), "email"));
    let password_error = Signal::derive(move || field_message(&field_errors.get(), "password"));

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = normalize_email(&email.get());
        let password_value = password.get();
        let errors = validate_login_form(&email_value, &password_value);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        form_error.set(String::new());
        busy.set(true);

        let navigate = navigate_submit.clone();
        leptos::task::spawn_local(async move {
            match mock::login(&email_value, &password_value).await {
                Ok(response) => {
                    let payload = Session::from(response);
                    storage::save_session(&payload);
                    session.update(|s| s.adopt(payload));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    form_error.set(err.message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=email
                        error=email_error
                    />
                    <FormField
                        label="Password"
                        input_type="password"
                        value=password
                        error=password_error
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || form_error.get()}</p>
                </Show>
                <p class="auth-footer">
                    "No account? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
