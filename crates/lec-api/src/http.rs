//! Shared HTTP response helpers for the course API client.
//!
//! Centralizes status-code checks (non-success → [`ApiError::Status`]) and
//! the diagnostic failure classification, so resource modules stay focused
//! on paths and payload types.

use crate::error::ApiError;

/// Diagnostic bucket for a failed call. Used for logging only; callers
/// always receive the original failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// 401: no or invalid session token.
    Unauthenticated,
    /// 403: signed in, but not allowed.
    Unauthorized,
    /// 404
    Missing,
    /// 500
    ServerFault,
    /// Any other non-success status.
    Other,
    /// No response at all (connect error, timeout).
    Transport,
}

impl FailureCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
            Self::Missing => "missing",
            Self::ServerFault => "server_fault",
            Self::Other => "other",
            Self::Transport => "transport",
        }
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a failure by status code. `None` means no response arrived.
#[must_use]
pub const fn classify(status: Option<u16>) -> FailureCategory {
    match status {
        None => FailureCategory::Transport,
        Some(401) => FailureCategory::Unauthenticated,
        Some(403) => FailureCategory::Unauthorized,
        Some(404) => FailureCategory::Missing,
        Some(500) => FailureCategory::ServerFault,
        Some(_) => FailureCategory::Other,
    }
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise logs the failure
/// category and returns [`ApiError::Status`] carrying the exact status and
/// the server's `message` (or the raw body when it is not an envelope).
pub async fn check_response(
    resp: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let status = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = envelope_message(&body).unwrap_or(body);
    log_failure(path, classify(Some(status)), Some(status), &message);
    Err(ApiError::Status { status, message })
}

/// Log a transport failure (no response) and hand the error back.
pub fn transport_failure(path: &str, error: reqwest::Error) -> ApiError {
    let detail = if error.is_timeout() {
        "request timed out".to_string()
    } else {
        error.to_string()
    };
    log_failure(path, FailureCategory::Transport, None, &detail);
    ApiError::Http(error)
}

fn log_failure(path: &str, category: FailureCategory, status: Option<u16>, detail: &str) {
    match category {
        FailureCategory::ServerFault | FailureCategory::Transport => {
            tracing::error!(path, ?status, %category, detail, "course API request failed");
        }
        FailureCategory::Missing => {
            tracing::debug!(path, ?status, %category, detail, "course API resource not found");
        }
        FailureCategory::Unauthenticated
        | FailureCategory::Unauthorized
        | FailureCategory::Other => {
            tracing::warn!(path, ?status, %category, detail, "course API request rejected");
        }
    }
}

fn envelope_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}

/// Percent-encode a single path segment.
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
