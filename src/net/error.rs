//! The single tagged error for the networking layer.
//!
//! ERROR HANDLING
//! ==============
//! Every failure — transport, timeout, or HTTP status — collapses into
//! [`ApiError`] so callers branch on one classification: 401 forces logout,
//! other 4xx are terminal, 5xx and transport failures are retriable.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure, keyed by form input name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// HTTP-shaped error carried through the fetch wrapper and mock layer.
///
/// `status` 0 marks transport-level failures (network errors and synthesized
/// timeouts) that never reached an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Field-level validation errors; empty means none.
    pub field_errors: Vec<FieldError>,
}

/// Coarse classification derived from the status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or timeout; no HTTP response was received.
    Network,
    /// 401 — credentials are stale, force logout.
    Unauthorized,
    /// Other 4xx — the request itself is wrong, retrying cannot help.
    Client,
    /// 5xx and anything unclassified — the server may recover.
    Server,
}

impl ApiError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::from_status(0, message)
    }

    pub fn timeout() -> Self {
        Self::from_status(0, "request timed out")
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_status(401, message)
    }

    /// 422 with per-field detail, as a real validation endpoint would return.
    pub fn validation(field_errors: Vec<FieldError>) -> Self {
        Self {
            status: 422,
            message: "Validation failed".to_owned(),
            field_errors,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status {
            0 => ErrorKind::Network,
            401 => ErrorKind::Unauthorized,
            400..=499 => ErrorKind::Client,
            _ => ErrorKind::Server,
        }
    }

    /// Whether the retry loop may attempt this request again.
    pub fn is_retriable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network | ErrorKind::Server)
    }

    /// Whether stored credentials must be cleared and the user sent to login.
    pub fn should_force_logout(&self) -> bool {
        self.status == 401
    }

    /// Look up the message for one form field, if the error carried any.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Error body shape a conventional JSON API returns:
/// `{ "message": "...", "errors": { "field": "message" } }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

/// Decode an error response body into an [`ApiError`].
///
/// Non-JSON bodies and missing fields fall back to a generic status message.
pub fn parse_error_body(status: u16, raw: &str) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(raw).ok();
    match parsed {
        Some(body) => {
            let message = body
                .message
                .unwrap_or_else(|| format!("request failed with status {status}"));
            let field_errors = body
                .errors
                .into_iter()
                .map(|(field, message)| FieldError { field, message })
                .collect();
            ApiError {
                status,
                message,
                field_errors,
            }
        }
        None => ApiError::from_status(status, format!("request failed with status {status}")),
    }
}
