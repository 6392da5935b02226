use std::fs;
use std::path::PathBuf;

use lec_config::AuthConfig;

use crate::error::AuthError;

const KEYRING_USER: &str = "session-jwt";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Where a loaded token came from (for status display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Config,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Config => "config",
            Self::File => "file",
        }
    }
}

/// Read-only view of the tiers where the identity provider's login flow
/// leaves the session JWT. Writing and clearing them is the provider's job.
///
/// Load priority: OS keychain → configured token (`auth.token`, usually
/// `LECTERN_AUTH__TOKEN`) → credentials file (`~/.lectern/credentials`).
#[derive(Debug, Clone)]
pub struct TokenStore {
    keyring_service: Option<String>,
    configured_token: Option<String>,
    credentials_path: Option<PathBuf>,
}

impl TokenStore {
    /// Store backed by all three tiers, as configured.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            keyring_service: Some(config.keyring_service.clone()),
            configured_token: config.token().map(String::from),
            credentials_path: default_credentials_path(),
        }
    }

    /// Store backed only by a credentials file at `path`.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            configured_token: None,
            credentials_path: Some(path.into()),
        }
    }

    /// Load a JWT from the highest-priority tier that has one.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_source().map(|(token, _)| token)
    }

    /// Load a JWT and report which tier it came from.
    #[must_use]
    pub fn load_with_source(&self) -> Option<(String, TokenSource)> {
        if let Some(token) = self.load_keyring() {
            return Some((token, TokenSource::Keyring));
        }
        if let Some(token) = self.configured_token.clone() {
            return Some((token, TokenSource::Config));
        }
        self.load_file().map(|token| (token, TokenSource::File))
    }

    // --- Private tier helpers ---

    fn load_keyring(&self) -> Option<String> {
        let service = self.keyring_service.as_deref()?;
        let entry = keyring::Entry::new(service, KEYRING_USER).ok()?;
        entry
            .get_password()
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    fn load_file(&self) -> Option<String> {
        let path = self.credentials_path.as_deref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectern").join(CREDENTIALS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_path_is_under_home() {
        let path = default_credentials_path().expect("should resolve");
        assert!(path.ends_with(".lectern/credentials"));
    }

    #[test]
    fn file_tier_is_read_and_trimmed() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        fs::write(&path, "test_jwt_abc123\n").expect("write");

        let store = TokenStore::file_only(&path);
        assert_eq!(
            store.load_with_source(),
            Some(("test_jwt_abc123".to_string(), TokenSource::File))
        );

        fs::remove_file(&path).expect("remove");
        assert!(store.load().is_none(), "a removed file reads as signed out");
    }

    #[test]
    fn loading_never_creates_the_credentials_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let dir = tmp.path().join("nested");
        let store = TokenStore::file_only(dir.join("credentials"));

        assert!(store.load_with_source().is_none());
        assert!(!dir.exists());
    }

    #[test]
    fn load_file_ignores_whitespace_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        fs::write(&path, "   \n  ").expect("write");

        let store = TokenStore::file_only(&path);
        assert!(store.load().is_none(), "whitespace-only should return None");
    }

    #[test]
    fn configured_token_beats_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        fs::write(&path, "file_token").expect("write");

        let store = TokenStore {
            keyring_service: None,
            configured_token: Some("config_token".into()),
            credentials_path: Some(path),
        };
        assert_eq!(
            store.load_with_source(),
            Some(("config_token".to_string(), TokenSource::Config))
        );
    }
}
