//! Form input validation shared by the auth pages and the mock register path.
//!
//! Checks are structural, not RFC-complete — the goal is catching obvious
//! typos before a round trip, not replacing server-side validation.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::error::FieldError;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Minimum accepted display-name length after trimming.
pub const NAME_MIN_LEN: usize = 2;

/// Validate an email address. Returns the error message when invalid.
///
/// Structural check: exactly one `@`, a non-empty local part, and a dotted
/// domain with non-empty labels.
pub fn validate_email(email: &str) -> Option<&'static str> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required");
    }
    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Some("Enter a valid email address");
    };
    if local.is_empty() {
        return Some("Enter a valid email address");
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Some("Enter a valid email address");
    }
    None
}

/// Validate a password: minimum length plus at least one letter and one digit.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Password is required");
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Some("Password must be at least 8 characters");
    }
    if !password.chars().any(char::is_alphabetic) || !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a letter and a digit");
    }
    None
}

/// Validate a display name: non-empty after trimming, with a minimum length.
pub fn validate_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required");
    }
    if trimmed.chars().count() < NAME_MIN_LEN {
        return Some("Name must be at least 2 characters");
    }
    None
}

/// Validate the login form; empty result means the form may submit.
pub fn validate_login_form(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(message) = validate_email(email) {
        errors.push(FieldError::new("email", message));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    errors
}

/// Validate the registration form, including the confirmation match.
pub fn validate_registration_form(
    name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(message) = validate_name(name) {
        errors.push(FieldError::new("name", message));
    }
    if let Some(message) = validate_email(email) {
        errors.push(FieldError::new("email", message));
    }
    if let Some(message) = validate_password(password) {
        errors.push(FieldError::new("password", message));
    }
    if password_confirmation != password {
        errors.push(FieldError::new("password_confirmation", "Passwords do not match"));
    }
    errors
}
