use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    session_id: Option<String>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    note: Option<String>,
}

impl AuthStatusResponse {
    fn signed_out(token_source: Option<&'static str>, note: String) -> Self {
        Self {
            authenticated: false,
            user_id: None,
            session_id: None,
            expires_at: None,
            token_source,
            note: Some(note),
        }
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = ctx
        .session
        .store()
        .load_with_source()
        .map(|(_, source)| source.as_str());

    let status = match ctx.session.claims() {
        Ok(Some(claims)) => {
            let expired = claims.expires_at.is_some_and(|at| at <= Utc::now());
            AuthStatusResponse {
                authenticated: !expired,
                user_id: Some(claims.user_id),
                session_id: claims.session_id,
                expires_at: claims.expires_at.map(|at| at.to_rfc3339()),
                token_source: source,
                note: expired.then(|| "session token expired; sign in again".to_string()),
            }
        }
        Ok(None) => AuthStatusResponse::signed_out(None, "no session token found".into()),
        Err(error) => AuthStatusResponse::signed_out(source, error.to_string()),
    };

    output(&status, flags.format)
}
