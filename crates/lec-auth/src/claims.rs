use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Claims read from a session JWT.
///
/// Decoding does NOT verify the signature. The course API verifies every
/// token it receives; the client only needs `sub` to build per-user query
/// keys and `exp` to avoid sending a token it knows is dead.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Raw JWT string, as attached to requests.
    pub raw_jwt: String,
    /// Identity provider user ID (`sub` claim).
    pub user_id: String,
    /// Identity provider session ID (`sid` claim).
    pub session_id: Option<String>,
    /// Token expiration time (`exp` claim). `None` if the token has no `exp`.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionClaims {
    /// Decode the payload segment of a JWT.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedToken`] if the token is not three
    /// dot-separated segments, the payload is not base64url JSON, or `sub`
    /// is missing.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let jwt = jwt.trim();
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::MalformedToken("invalid JWT format".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
        let value: serde_json::Value = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::MalformedToken(format!("JSON parse failed: {e}")))?;

        let user_id = value["sub"]
            .as_str()
            .filter(|sub| !sub.is_empty())
            .ok_or_else(|| AuthError::MalformedToken("missing sub claim".into()))?
            .to_string();
        let session_id = value["sid"].as_str().map(String::from);
        let expires_at = match value.get("exp") {
            None | Some(serde_json::Value::Null) => None,
            Some(exp) => {
                let secs = exp
                    .as_i64()
                    .ok_or_else(|| AuthError::MalformedToken("non-numeric exp claim".into()))?;
                Some(
                    DateTime::from_timestamp(secs, 0)
                        .ok_or_else(|| AuthError::MalformedToken("invalid exp timestamp".into()))?,
                )
            }
        };

        Ok(Self {
            raw_jwt: jwt.to_string(),
            user_id,
            session_id,
            expires_at,
        })
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    /// Tokens without `exp` never expire from the client's point of view.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at.is_some_and(|expires_at| expires_at <= threshold)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"RS256"}"#);
        let payload = engine.encode(payload);
        let signature = engine.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
        make_jwt(&format!(r#"{{"sub":"user_123","sid":"sess_9","exp":{exp}}}"#))
    }

    #[test]
    fn decode_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let claims = SessionClaims::decode(&make_jwt_with_exp(future_exp)).unwrap();
        assert_eq!(claims.user_id, "user_123");
        assert_eq!(claims.session_id.as_deref(), Some("sess_9"));
        assert_eq!(claims.expires_at.unwrap().timestamp(), future_exp);
        assert!(!claims.is_near_expiry(60));
    }

    #[test]
    fn expired_token_is_near_expiry() {
        let past_exp = Utc::now().timestamp() - 3600;
        let claims = SessionClaims::decode(&make_jwt_with_exp(past_exp)).unwrap();
        assert!(claims.is_near_expiry(0));
    }

    #[test]
    fn within_buffer_is_near_expiry() {
        let soon = Utc::now().timestamp() + 30;
        let claims = SessionClaims::decode(&make_jwt_with_exp(soon)).unwrap();
        assert!(claims.is_near_expiry(60));
    }

    #[test]
    fn missing_exp_never_expires() {
        let claims = SessionClaims::decode(&make_jwt(r#"{"sub":"user_1"}"#)).unwrap();
        assert!(claims.expires_at.is_none());
        assert!(!claims.is_near_expiry(3600));
    }

    #[test]
    fn decode_invalid_format() {
        let err = SessionClaims::decode("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_missing_sub() {
        let err = SessionClaims::decode(&make_jwt(r#"{"exp":1}"#)).unwrap_err();
        assert!(err.to_string().contains("missing sub claim"));
    }

    #[test]
    fn decode_bad_base64() {
        let err = SessionClaims::decode("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
