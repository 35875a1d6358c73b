//! Centralized fetch wrapper: timeout, retry with backoff, status dispatch.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning a transport error, since these calls are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every attempt resolves to `Result<_, ApiError>`. 401 clears stored
//! credentials and redirects to `/login` before surfacing the error; other
//! 4xx surface immediately; 5xx and transport failures loop through the
//! retry schedule and the LAST error is returned.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::parse_error_body;

/// Per-attempt deadline before a timeout error is synthesized.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Total attempts per request, first try included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Delay before the first retry; doubles with each further retry.
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 500;

/// HTTP methods the wrapper issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single API request, built up fluently and consumed by [`ApiRequest::send`].
#[derive(Clone, Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    timeout_ms: u64,
    max_attempts: u32,
    with_auth: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            with_auth: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the per-attempt timeout.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    /// Override the attempt budget; clamped to at least one attempt.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Skip bearer-token injection, e.g. for the login call itself.
    pub fn with_auth(mut self, enabled: bool) -> Self {
        self.with_auth = enabled;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Execute the request and deserialize the 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the last [`ApiError`] after the retry schedule is exhausted,
    /// or immediately for non-retriable failures.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = self.send_value().await?;
        serde_json::from_value(value).map_err(|e| ApiError::network(format!("invalid response body: {e}")))
    }

    /// Execute the request, keeping the 2xx body as raw JSON.
    ///
    /// # Errors
    ///
    /// Same contract as [`ApiRequest::send`].
    pub async fn send_value(self) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = &self;
            retry_with_backoff(self.max_attempts, DEFAULT_BACKOFF_BASE_MS, || request.attempt()).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::network("not available on server"))
        }
    }

    /// One network attempt: build, race against the timeout, dispatch status.
    #[cfg(feature = "hydrate")]
    async fn attempt(&self) -> Result<serde_json::Value, ApiError> {
        use gloo_net::http::Request;

        let builder = match self.method {
            Method::Get => Request::get(&self.path),
            Method::Post => Request::post(&self.path),
            Method::Put => Request::put(&self.path),
            Method::Delete => Request::delete(&self.path),
        };
        let mut builder = builder.header("X-Request-Id", &uuid::Uuid::new_v4().to_string());
        if self.with_auth {
            if let Some(token) = crate::util::storage::read_key(crate::util::storage::TOKEN_KEY) {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
        }
        let request = match &self.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::network(e.to_string()))?,
        };

        // Race the request against its deadline; the losing future is dropped.
        let deadline = gloo_timers::future::sleep(std::time::Duration::from_millis(self.timeout_ms));
        let response = match futures::future::select(Box::pin(request.send()), Box::pin(deadline)).await {
            futures::future::Either::Left((result, _)) => {
                result.map_err(|e| ApiError::network(e.to_string()))?
            }
            futures::future::Either::Right(((), _)) => return Err(ApiError::timeout()),
        };

        let status = response.status();
        if (200..300).contains(&status) {
            return response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| ApiError::network(e.to_string()));
        }

        let raw = response.text().await.unwrap_or_default();
        let err = parse_error_body(status, &raw);
        if err.should_force_logout() {
            crate::util::storage::clear_session();
            redirect_to_login();
        }
        Err(err)
    }
}

/// Delay before retry number `retry_index` (zero-based), doubling per retry.
pub fn backoff_delay_ms(base_delay_ms: u64, retry_index: u32) -> u64 {
    base_delay_ms.saturating_mul(1_u64 << retry_index.min(63))
}

/// Run `op` up to `max_attempts` times, sleeping between retriable failures.
///
/// Non-retriable errors short-circuit after the first attempt; once the
/// budget is spent the last error observed is returned.
///
/// # Errors
///
/// Returns the final [`ApiError`] when every attempt fails.
pub async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    base_delay_ms: u64,
    mut op: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let budget = max_attempts.max(1);
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt >= budget || !err.is_retriable() {
                    return Err(err);
                }
                backoff_sleep(backoff_delay_ms(base_delay_ms, attempt - 1)).await;
            }
        }
    }
}

/// Issue each request in order, one at a time.
pub async fn send_all_sequential(requests: Vec<ApiRequest>) -> Vec<Result<serde_json::Value, ApiError>> {
    let mut results = Vec::with_capacity(requests.len());
    for request in requests {
        results.push(request.send_value().await);
    }
    results
}

/// Issue every request at once and wait for all of them.
///
/// No coordination beyond the join: each request keeps its own timeout and
/// retry schedule, and results come back in input order.
#[cfg(any(test, feature = "hydrate"))]
pub async fn send_all_parallel(requests: Vec<ApiRequest>) -> Vec<Result<serde_json::Value, ApiError>> {
    futures::future::join_all(requests.into_iter().map(ApiRequest::send_value)).await
}

async fn backoff_sleep(delay_ms: u64) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = delay_ms;
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
