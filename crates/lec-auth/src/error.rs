use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; sign in with the identity provider first")]
    NotAuthenticated,

    #[error("session token expired; sign in again")]
    TokenExpired,

    #[error("identity provider did not answer within {0}s")]
    Timeout(u64),

    #[error("identity provider error: {0}")]
    Provider(String),

    #[error("malformed session token: {0}")]
    MalformedToken(String),

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
