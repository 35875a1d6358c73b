//! Planned REST endpoints for the future backend.
//!
//! Nothing here is called by working code — the pages go through `net::mock`
//! — but paths are pinned down now so the fetch wrapper has a stable contract
//! when the real API lands.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const API_BASE: &str = "/api/v1";

// Auth.
pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const AUTH_REGISTER: &str = "/api/v1/auth/register";
pub const AUTH_LOGOUT: &str = "/api/v1/auth/logout";
pub const AUTH_REFRESH: &str = "/api/v1/auth/refresh";
pub const AUTH_ME: &str = "/api/v1/auth/me";

// Users.
pub const USERS: &str = "/api/v1/users";

/// Detail path for one user.
pub fn user_detail(user_id: &str) -> String {
    format!("{API_BASE}/users/{user_id}")
}

// Dashboard.
pub const DASHBOARD_STATS: &str = "/api/v1/dashboard/stats";
pub const DASHBOARD_ACTIVITY: &str = "/api/v1/dashboard/activity";
