use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::loaded;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lec me`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = loaded(ctx.queries.current_user().await, "profile")?;
    output(user.as_ref(), flags.format)
}
