//! # lec-api
//!
//! Authenticated HTTP client for the Lectern course API.
//!
//! Every request runs a two-stage pipeline:
//! 1. **Credential stage** ([`ApiClient::credential_stage`]): once the session
//!    has loaded, fetch its token fresh from the [`SessionProvider`]. A failure
//!    is logged and, under the default fail-open policy, the request goes out
//!    without credentials.
//! 2. **Request stage**: send with `Authorization: Bearer <token>` when a token
//!    was obtained, classify any failure for logging, and hand the original
//!    error back.
//!
//! Both stages share one budget: the configured timeout bounds the whole
//! call, not each stage separately.
//!
//! Resource endpoints are grouped per domain resource:
//! - [`users`], [`reviews`], [`announcements`], [`courses`],
//!   [`enrollments`], [`modules`], [`lessons`]

pub mod announcements;
pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod modules;
pub mod reviews;
pub mod users;

mod error;
mod http;

pub use error::ApiError;
pub use http::{FailureCategory, classify};

use std::sync::Arc;
use std::time::Duration;

use lec_auth::{AuthError, SessionProvider};
use lec_config::{ApiConfig, CredentialPolicy};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::Instant;

use crate::http::{check_response, transport_failure};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one API origin, one timeout, and one session.
///
/// Cheap to clone; clones share the connection pool and session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    policy: CredentialPolicy,
    session: Arc<dyn SessionProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. TLS backend initialization).
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionProvider>) -> Result<Self, ApiError> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            timeout,
            policy: config.credential_policy,
            session,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionProvider> {
        &self.session
    }

    /// Stage 1: obtain the bearer token for the next request, if any.
    ///
    /// Returns `Ok(None)` when nobody is signed in, when the session has not
    /// finished loading, or (under [`CredentialPolicy::FailOpen`]) when token
    /// retrieval fails or exceeds the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Credentials`] only under
    /// [`CredentialPolicy::FailClosed`].
    pub async fn credential_stage(&self) -> Result<Option<String>, ApiError> {
        self.credentials_before(Instant::now() + self.timeout).await
    }

    /// [`credential_stage`](Self::credential_stage) bounded by `deadline`.
    /// A signed-out provider answers `Ok(None)` from `get_token`, so signed-in
    /// state is not consulted separately.
    async fn credentials_before(&self, deadline: Instant) -> Result<Option<String>, ApiError> {
        if !self.session.is_loaded() {
            return Ok(None);
        }

        let outcome = tokio::time::timeout_at(deadline, self.session.get_token())
            .await
            .unwrap_or_else(|_| Err(AuthError::Timeout(self.timeout.as_secs())));

        match outcome {
            Ok(token) => Ok(token.filter(|t| !t.trim().is_empty())),
            Err(error) => match self.policy {
                CredentialPolicy::FailOpen => {
                    tracing::warn!(%error, "token retrieval failed; sending request without credentials");
                    Ok(None)
                }
                CredentialPolicy::FailClosed => {
                    tracing::warn!(%error, "token retrieval failed; request not sent");
                    Err(ApiError::Credentials(error))
                }
            },
        }
    }

    /// Stage 2: send `method path` with whatever stage 1 produced and decode
    /// the JSON body.
    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let deadline = Instant::now() + self.timeout;
        let token = self.credentials_before(deadline).await?;

        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, path, authenticated = token.is_some(), "course API request");

        let mut request = self
            .http
            .request(method, &url)
            .timeout(deadline.saturating_duration_since(Instant::now()));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| transport_failure(path, e))?;
        let resp = check_response(resp, path).await?;
        let bytes = resp.bytes().await.map_err(|e| transport_failure(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::DELETE, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, body).await
    }

    /// POST with no request body (state transitions like `complete`).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::POST, path, None).await
    }
}
