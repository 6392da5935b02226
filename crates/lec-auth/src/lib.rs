//! # lec-auth
//!
//! Session plumbing for Lectern. The identity provider issues and rotates
//! tokens; this crate only reads them.
//!
//! - [`SessionProvider`]: the capability the HTTP client consumes
//!   (`get_token`, `is_loaded`, `is_signed_in`, `user_id`)
//! - [`StaticSession`]: a fixed token and user, for scripting and tests
//! - [`StoredSession`]: reads the token the provider's login flow left in the
//!   OS keychain, config, or credentials file, fresh on every call
//! - [`claims`]: unverified JWT payload decoding (`sub`, `sid`, `exp`)

pub mod claims;
pub mod error;
pub mod session;
pub mod stored;
pub mod token_store;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use session::{SessionProvider, StaticSession};
pub use stored::StoredSession;
pub use token_store::TokenStore;
