//! The identity-provider capability the HTTP client consumes.

use async_trait::async_trait;

use crate::error::AuthError;

/// Read-only view of the current session.
///
/// Implementations must fetch the token fresh on every [`get_token`] call:
/// sessions expire and rotate, so callers never hold on to a token beyond
/// the request it was fetched for. Only [`is_loaded`] is synchronous; it
/// must not touch storage.
///
/// [`get_token`]: SessionProvider::get_token
/// [`is_loaded`]: SessionProvider::is_loaded
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Whether the provider has finished restoring session state.
    fn is_loaded(&self) -> bool;

    /// Whether a user is signed in. Only meaningful once loaded.
    async fn is_signed_in(&self) -> bool;

    /// The signed-in user's ID, if any.
    async fn user_id(&self) -> Option<String>;

    /// Fetch the current bearer token. `Ok(None)` means "no token to
    /// attach"; `Err` means the provider itself failed.
    async fn get_token(&self) -> Result<Option<String>, AuthError>;
}

/// A session with a fixed state, for scripts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    loaded: bool,
    token: Option<String>,
    user_id: Option<String>,
}

impl StaticSession {
    /// A loaded, signed-in session that always yields `token`.
    #[must_use]
    pub fn signed_in(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            loaded: true,
            token: Some(token.into()),
            user_id: Some(user_id.into()),
        }
    }

    /// A loaded session with nobody signed in.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            loaded: true,
            token: None,
            user_id: None,
        }
    }

    /// A session still restoring its state.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            loaded: false,
            token: None,
            user_id: None,
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    async fn is_signed_in(&self) -> bool {
        self.loaded && self.user_id.is_some()
    }

    async fn user_id(&self) -> Option<String> {
        self.user_id.clone()
    }

    async fn get_token(&self) -> Result<Option<String>, AuthError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signed_in_yields_token() {
        let session = StaticSession::signed_in("abc123", "user_1");
        assert!(session.is_loaded());
        assert!(session.is_signed_in().await);
        assert_eq!(session.user_id().await.as_deref(), Some("user_1"));
        assert_eq!(session.get_token().await.unwrap().as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn signed_out_yields_nothing() {
        let session = StaticSession::signed_out();
        assert!(session.is_loaded());
        assert!(!session.is_signed_in().await);
        assert!(session.get_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn loading_is_not_signed_in() {
        let session = StaticSession::loading();
        assert!(!session.is_loaded());
        assert!(!session.is_signed_in().await);
    }
}
