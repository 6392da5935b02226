//! Course API error types.

use lec_auth::AuthError;
use thiserror::Error;

use crate::http::{FailureCategory, classify};

/// Errors surfaced by [`ApiClient`](crate::ApiClient) calls.
///
/// The client logs and classifies failures but never rewrites them: a 404
/// from the server reaches the caller as `Status { status: 404, .. }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// Server-provided `message`, or the raw response body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Token retrieval failed under the fail-closed credential policy.
    #[error("credentials unavailable: {0}")]
    Credentials(#[from] AuthError),
}

impl ApiError {
    /// HTTP status, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Credentials(_) => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(error) if error.is_timeout())
    }

    /// Diagnostic bucket for this failure.
    #[must_use]
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Status { status, .. } => classify(Some(*status)),
            Self::Http(_) => FailureCategory::Transport,
            Self::Decode(_) | Self::Credentials(_) => FailureCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_status_and_category() {
        let err = ApiError::Status {
            status: 403,
            message: "forbidden".into(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.category(), FailureCategory::Unauthorized);
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "API error (403): forbidden");
    }

    #[test]
    fn credential_error_has_no_status() {
        let err = ApiError::from(AuthError::TokenExpired);
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("credentials unavailable"));
    }
}
