//! Session provider backed by the local token store.

use async_trait::async_trait;

use crate::claims::SessionClaims;
use crate::error::AuthError;
use crate::session::SessionProvider;
use crate::token_store::TokenStore;

/// Seconds before `exp` at which a stored token is treated as expired.
const EXPIRY_BUFFER_SECS: i64 = 30;

/// Reads the session JWT from [`TokenStore`] on every call.
///
/// Nothing is cached: a token rotated by the identity provider between two
/// requests is picked up by the second one.
#[derive(Debug, Clone)]
pub struct StoredSession {
    store: TokenStore,
}

impl StoredSession {
    #[must_use]
    pub const fn new(store: TokenStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Decode the currently stored token, if any. Reads storage on the
    /// calling thread.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedToken`] if a token is stored but cannot
    /// be decoded.
    pub fn claims(&self) -> Result<Option<SessionClaims>, AuthError> {
        self.store.load().map(|jwt| SessionClaims::decode(&jwt)).transpose()
    }

    /// Load the stored token on the blocking pool; keychain and file reads
    /// stay off the async worker threads.
    async fn load(&self) -> Result<Option<String>, AuthError> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| AuthError::TokenStoreError(format!("token load task failed: {e}")))
    }

    async fn live_claims(&self) -> Option<SessionClaims> {
        let claims = self
            .load()
            .await
            .and_then(|jwt| jwt.map(|jwt| SessionClaims::decode(&jwt)).transpose());
        match claims {
            Ok(Some(claims)) if !claims.is_near_expiry(EXPIRY_BUFFER_SECS) => Some(claims),
            Ok(_) => None,
            Err(error) => {
                tracing::debug!(%error, "stored session token is unreadable");
                None
            }
        }
    }
}

#[async_trait]
impl SessionProvider for StoredSession {
    fn is_loaded(&self) -> bool {
        true
    }

    async fn is_signed_in(&self) -> bool {
        self.live_claims().await.is_some()
    }

    async fn user_id(&self) -> Option<String> {
        self.live_claims().await.map(|claims| claims.user_id)
    }

    async fn get_token(&self) -> Result<Option<String>, AuthError> {
        let Some(jwt) = self.load().await? else {
            return Ok(None);
        };
        let claims = SessionClaims::decode(&jwt)?;
        if claims.is_near_expiry(EXPIRY_BUFFER_SECS) {
            tracing::warn!(
                expires_at = ?claims.expires_at,
                "session token expires within {EXPIRY_BUFFER_SECS}s; sign in again",
            );
            return Err(AuthError::TokenExpired);
        }
        Ok(Some(claims.raw_jwt))
    }
}
