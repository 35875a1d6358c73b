//! Registration page with per-field error rendering.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::error::FieldError;
use crate::net::mock;
use crate::net::types::Session;
use crate::state::session::SessionState;
use crate::util::storage;
use crate::util::validate::validate_registration_form;

/// Map a failed mock registration onto the form: 422 field errors land on
/// their inputs, anything else (409, ...) becomes the form-level message.
fn split_submit_error(err: crate::net::error::ApiError) -> (Vec<FieldError>, String) {
    if err.field_errors.is_empty() {
        (Vec::new(), err.message)
    } else {
        (err.field_errors, String::new())
    }
}

/// Registration page: name, email, password, confirmation.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let error_for = |field: &'static str| {
        Signal::derive(move || {
            field_errors
                .get()
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    };
    let name_error = error_for("name");
    let email_error = error_for("email");
    let password_error = error_for("password");
    let confirmation_error = error_for("password_confirmation");

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_ascii_lowercase();
        let password_value = password.get();
        let confirmation_value = confirmation.get();

        let errors = validate_registration_form(&name_value, &email_value, &password_value, &confirmation_value);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        form_error.set(String::new());
        busy.set(true);

        let navigate = navigate_submit.clone();
        leptos::task::spawn_local(async move {
            match mock::register(&name_value, &email_value, &password_value, &confirmation_value).await {
                Ok(response) => {
                    let payload = Session::from(response);
                    storage::save_session(&payload);
                    session.update(|s| s.adopt(payload));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    let (fields, message) = split_submit_error(err);
                    field_errors.set(fields);
                    form_error.set(message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField label="Name" placeholder="Ada Lovelace" value=name error=name_error/>
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
                    <FormField
                        label="Confirm password"
                        input_type="password"
                        value=confirmation
                        error=confirmation_error
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || form_error.get()}</p>
                </Show>
                <p class="auth-footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
