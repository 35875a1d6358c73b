//! Shared payload DTOs for the auth and dashboard flows.
//!
//! DESIGN
//! ======
//! These types mirror what a real backend would return so the mock layer and
//! the fetch wrapper stay schema-compatible when a server shows up.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The persisted user record: exactly the fields stored in localStorage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name shown in the dashboard header.
    pub name: String,
    /// Account email, also the login identifier.
    pub email: String,
}

/// What the storage layer persists and restores as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// Opaque refresh token; stored but never exchanged.
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Canned payload returned by the mock login/register calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            refresh_token: response.refresh_token,
            user: response.user,
        }
    }
}

/// Headline numbers for the dashboard stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users_total: u64,
    pub sessions_active: u64,
    /// Revenue in cents to keep the payload integer-only.
    pub revenue_cents: i64,
    /// Month-over-month growth, e.g. `4.2` for +4.2%.
    pub growth_pct: f64,
}

/// One row in the dashboard activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub message: String,
    /// Event timestamp in milliseconds since the Unix epoch.
    pub ts_ms: i64,
}
