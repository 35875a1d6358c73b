use futures::executor::block_on;

use super::*;

// =============================================================
// Credential check
// =============================================================

#[test]
fn demo_credentials_sign_in() {
    let response = check_credentials(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert!(response.token.starts_with("mock-"));
    assert!(response.refresh_token.is_some());
    assert_eq!(response.user.email, DEMO_EMAIL);
    assert_eq!(response.user.name, DEMO_NAME);
}

#[test]
fn demo_email_is_case_insensitive_and_trimmed() {
    assert!(check_credentials("  Demo@Company.com ", DEMO_PASSWORD).is_ok());
}

#[test]
fn wrong_password_is_401() {
    let err = check_credentials(DEMO_EMAIL, "letmein99").unwrap_err();
    assert_eq!(err.status, 401);
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn unknown_account_is_401() {
    let err = check_credentials("nobody@company.com", DEMO_PASSWORD).unwrap_err();
    assert_eq!(err.status, 401);
}

#[test]
fn each_sign_in_mints_a_fresh_token() {
    let a = check_credentials(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    let b = check_credentials(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert_ne!(a.token, b.token);
}

// =============================================================
// Registration
// =============================================================

#[test]
fn valid_registration_issues_a_session() {
    let response = build_registration("Ada Lovelace", "ada@example.com", "secret123", "secret123").unwrap();
    assert_eq!(response.user.name, "Ada Lovelace");
    assert_eq!(response.user.email, "ada@example.com");
    assert!(response.token.starts_with("mock-"));
}

#[test]
fn registration_trims_name_and_email() {
    let response = build_registration(" Ada ", " ada@example.com ", "secret123", "secret123").unwrap();
    assert_eq!(response.user.name, "Ada");
    assert_eq!(response.user.email, "ada@example.com");
}

#[test]
fn invalid_registration_is_422_with_field_errors() {
    let err = build_registration("", "not-an-email", "short", "different").unwrap_err();
    assert_eq!(err.status, 422);
    assert!(err.field_message("name").is_some());
    assert!(err.field_message("email").is_some());
    assert!(err.field_message("password").is_some());
    assert!(err.field_message("password_confirmation").is_some());
}

#[test]
fn taken_email_is_409() {
    let err = build_registration("Someone", DEMO_EMAIL, "secret123", "secret123").unwrap_err();
    assert_eq!(err.status, 409);
    assert!(!err.should_force_logout());
}

// =============================================================
// Async surface (latency is a no-op on the host)
// =============================================================

#[test]
fn login_resolves_through_the_async_path() {
    let response = block_on(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
    assert_eq!(response.user.email, DEMO_EMAIL);
}

#[test]
fn register_resolves_through_the_async_path() {
    let err = block_on(register("Someone", DEMO_EMAIL, "secret123", "secret123")).unwrap_err();
    assert_eq!(err.status, 409);
}

#[test]
fn dashboard_stats_are_canned() {
    let stats = block_on(fetch_dashboard_stats());
    assert_eq!(stats.users_total, 12_847);
    assert_eq!(stats.sessions_active, 312);
    assert_eq!(stats.revenue_cents, 4_820_950);
    assert!((stats.growth_pct - 4.2).abs() < f64::EPSILON);
}

#[test]
fn recent_activity_is_newest_first() {
    let entries = block_on(fetch_recent_activity());
    assert!(!entries.is_empty());
    for pair in entries.windows(2) {
        assert!(pair[0].ts_ms >= pair[1].ts_ms);
    }
}

#[test]
fn logout_completes() {
    block_on(logout());
}
