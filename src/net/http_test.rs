#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;

use futures::executor::block_on;

use super::*;

// =============================================================
// Builder defaults
// =============================================================

#[test]
fn builder_applies_documented_defaults() {
    let request = ApiRequest::get("/api/v1/dashboard/stats");
    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.path(), "/api/v1/dashboard/stats");
    assert_eq!(request.timeout_ms, DEFAULT_TIMEOUT_MS);
    assert_eq!(request.max_attempts, DEFAULT_MAX_ATTEMPTS);
    assert!(request.with_auth);
    assert!(request.body.is_none());
}

#[test]
fn builder_overrides_stick() {
    let request = ApiRequest::post("/api/v1/auth/login")
        .json(serde_json::json!({"email":"a@b.com"}))
        .timeout_ms(2_000)
        .max_attempts(5)
        .with_auth(false);
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.timeout_ms, 2_000);
    assert_eq!(request.max_attempts, 5);
    assert!(!request.with_auth);
    assert!(request.body.is_some());
}

#[test]
fn max_attempts_clamps_to_at_least_one() {
    let request = ApiRequest::delete("/api/v1/users/u-1").max_attempts(0);
    assert_eq!(request.max_attempts, 1);
}

#[test]
fn method_as_str_matches_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// Backoff schedule
// =============================================================

#[test]
fn backoff_delay_doubles_per_retry() {
    assert_eq!(backoff_delay_ms(500, 0), 500);
    assert_eq!(backoff_delay_ms(500, 1), 1_000);
    assert_eq!(backoff_delay_ms(500, 2), 2_000);
    assert_eq!(backoff_delay_ms(500, 3), 4_000);
}

#[test]
fn backoff_delay_saturates_instead_of_overflowing() {
    assert_eq!(backoff_delay_ms(u64::MAX, 1), u64::MAX);
    assert_eq!(backoff_delay_ms(1, 200), 1_u64 << 63);
}

// =============================================================
// Retry loop
// =============================================================

#[test]
fn retry_returns_first_success() {
    let calls = Cell::new(0_u32);
    let result = block_on(retry_with_backoff(3, 1, || {
        calls.set(calls.get() + 1);
        async { Ok::<_, ApiError>(42) }
    }));
    assert_eq!(result, Ok(42));
    assert_eq!(calls.get(), 1);
}

#[test]
fn retry_stops_after_budget_and_returns_last_error() {
    let calls = Cell::new(0_u32);
    let result = block_on(retry_with_backoff(3, 1, || {
        calls.set(calls.get() + 1);
        let attempt = calls.get();
        async move { Err::<u32, _>(ApiError::from_status(500, format!("boom {attempt}"))) }
    }));
    assert_eq!(calls.get(), 3);
    assert_eq!(result, Err(ApiError::from_status(500, "boom 3")));
}

#[test]
fn retry_short_circuits_on_non_retriable_errors() {
    let calls = Cell::new(0_u32);
    let result = block_on(retry_with_backoff(5, 1, || {
        calls.set(calls.get() + 1);
        async { Err::<u32, _>(ApiError::from_status(404, "missing")) }
    }));
    assert_eq!(calls.get(), 1);
    assert_eq!(result, Err(ApiError::from_status(404, "missing")));
}

#[test]
fn retry_recovers_after_transient_failures() {
    let calls = Cell::new(0_u32);
    let result = block_on(retry_with_backoff(3, 1, || {
        calls.set(calls.get() + 1);
        let attempt = calls.get();
        async move {
            if attempt < 3 {
                Err(ApiError::network("flaky"))
            } else {
                Ok(attempt)
            }
        }
    }));
    assert_eq!(result, Ok(3));
}

#[test]
fn zero_attempt_budget_still_runs_once() {
    let calls = Cell::new(0_u32);
    let result = block_on(retry_with_backoff(0, 1, || {
        calls.set(calls.get() + 1);
        async { Err::<u32, _>(ApiError::network("offline")) }
    }));
    assert_eq!(calls.get(), 1);
    assert!(result.is_err());
}

// =============================================================
// SSR stubs and batch helpers
// =============================================================

#[test]
fn send_outside_the_browser_is_a_network_error() {
    let result = block_on(ApiRequest::get("/api/v1/auth/me").send_value());
    let err = result.unwrap_err();
    assert_eq!(err.status, 0);
    assert!(err.is_retriable());
}

#[test]
fn sequential_batch_preserves_input_order_and_length() {
    let requests = vec![
        ApiRequest::get("/api/v1/dashboard/stats"),
        ApiRequest::get("/api/v1/dashboard/activity"),
    ];
    let results = block_on(send_all_sequential(requests));
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(Result::is_err));
}

#[test]
fn parallel_batch_preserves_input_order_and_length() {
    let requests = vec![
        ApiRequest::get("/api/v1/users"),
        ApiRequest::get("/api/v1/dashboard/stats"),
        ApiRequest::get("/api/v1/dashboard/activity"),
    ];
    let results = block_on(send_all_parallel(requests));
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(Result::is_err));
}
