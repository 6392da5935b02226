//! Session token configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "lectern-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Fixed session token. Consulted after the OS keychain, before the
    /// credentials file.
    #[serde(default)]
    pub token: String,

    /// OS keychain service the identity provider's login flow writes to.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl AuthConfig {
    /// The configured fixed token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        let token = self.token.trim();
        if token.is_empty() { None } else { Some(token) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_token() {
        let config = AuthConfig::default();
        assert!(config.token().is_none());
        assert_eq!(config.keyring_service, "lectern-cli");
    }

    #[test]
    fn whitespace_token_is_ignored() {
        let config = AuthConfig {
            token: "   ".into(),
            ..Default::default()
        };
        assert!(config.token().is_none());
    }
}
