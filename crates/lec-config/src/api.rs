//! Remote course API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("lectern/", env!("CARGO_PKG_VERSION")).to_string()
}

/// What to do when the identity provider fails to produce a token for a
/// signed-in session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialPolicy {
    /// Send the request without an `Authorization` header.
    #[default]
    FailOpen,
    /// Abort the request with a credentials error.
    FailClosed,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin plus path prefix of the course API, e.g. `https://api.example.com/api`.
    /// `API_BASE_URL` overrides this.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on token retrieval and on each HTTP request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub credential_policy: CredentialPolicy,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            credential_policy: CredentialPolicy::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash, ready for `format!("{base}{path}")`.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Reject settings no request could succeed with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.normalized_base_url();
        let has_scheme = base.starts_with("http://") || base.starts_with("https://");
        let host = base.split("://").nth(1).unwrap_or_default();
        if !has_scheme || host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
