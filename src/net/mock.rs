//! Canned backend: fixed-delay auth and dashboard data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pages call these functions instead of `net::http` until a real API
//! exists. Each call sleeps for [`MOCK_DELAY_MS`] in the browser to keep the
//! busy/loading states honest, then returns a canned result. Decision logic
//! is pure so it stays testable on the host.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use super::error::ApiError;
use super::types::{ActivityEntry, DashboardStats, LoginResponse, User};
use crate::util::format::now_ms;
use crate::util::validate::validate_registration_form;

/// Simulated network latency per mock call.
pub const MOCK_DELAY_MS: u64 = 600;

/// The one account the mock backend knows about.
pub const DEMO_EMAIL: &str = "demo@company.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "Demo User";

/// Sign in against the canned account.
///
/// # Errors
///
/// 401 for anything other than the demo credentials.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    simulate_latency().await;
    check_credentials(email, password)
}

/// Register a new account.
///
/// # Errors
///
/// 422 with field errors for invalid input, 409 when the email is taken.
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<LoginResponse, ApiError> {
    simulate_latency().await;
    build_registration(name, email, password, password_confirmation)
}

/// End the mock session. Clearing stored credentials is the caller's job.
pub async fn logout() {
    simulate_latency().await;
}

/// Headline numbers for the dashboard stat cards.
pub async fn fetch_dashboard_stats() -> DashboardStats {
    simulate_latency().await;
    DashboardStats {
        users_total: 12_847,
        sessions_active: 312,
        revenue_cents: 4_820_950,
        growth_pct: 4.2,
    }
}

/// Recent events for the dashboard activity feed.
pub async fn fetch_recent_activity() -> Vec<ActivityEntry> {
    simulate_latency().await;
    let now = now_ms();
    vec![
        ActivityEntry {
            message: "New user signed up".to_owned(),
            ts_ms: now - 40 * 1_000,
        },
        ActivityEntry {
            message: "Invoice #1042 paid".to_owned(),
            ts_ms: now - 12 * 60 * 1_000,
        },
        ActivityEntry {
            message: "Weekly report generated".to_owned(),
            ts_ms: now - 3 * 60 * 60 * 1_000,
        },
        ActivityEntry {
            message: "Maintenance window completed".to_owned(),
            ts_ms: now - 2 * 24 * 60 * 60 * 1_000,
        },
    ]
}

/// Pure credential check behind [`login`].
fn check_credentials(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    if email.trim().eq_ignore_ascii_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
        Ok(issue_session(DEMO_NAME, DEMO_EMAIL))
    } else {
        Err(ApiError::unauthorized("Invalid email or password"))
    }
}

/// Pure registration decision behind [`register`].
fn build_registration(
    name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<LoginResponse, ApiError> {
    let errors = validate_registration_form(name, email, password, password_confirmation);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }
    if email.trim().eq_ignore_ascii_case(DEMO_EMAIL) {
        return Err(ApiError::from_status(409, "Email is already registered"));
    }
    Ok(issue_session(name.trim(), email.trim()))
}

/// Mint an opaque token pair for a successful mock sign-in.
fn issue_session(name: &str, email: &str) -> LoginResponse {
    LoginResponse {
        token: format!("mock-{}", uuid::Uuid::new_v4()),
        refresh_token: Some(format!("mock-refresh-{}", uuid::Uuid::new_v4())),
        user: User {
            name: name.to_owned(),
            email: email.to_owned(),
        },
    }
}

async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(MOCK_DELAY_MS)).await;
}
