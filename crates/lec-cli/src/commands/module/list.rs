use std::sync::Arc;

use lec_auth::SessionProvider;
use lec_core::entities::ModuleProgress;

use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::loaded;
use crate::context::AppContext;
use crate::output::output;
use crate::views::{ModuleRow, module_rows};

pub async fn run(course_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = outline(course_id, ctx).await?;
    output(&rows, flags.format)
}

/// Course outline with per-module progress. Signed-out callers see every
/// module as not started.
pub async fn outline(course_id: &str, ctx: &AppContext) -> anyhow::Result<Vec<ModuleRow>> {
    let course = loaded(ctx.queries.course(Some(course_id)).await, "course")?;
    let modules = loaded(
        ctx.queries.course_modules(Some(course_id)).await,
        "course modules",
    )?;

    let progress: Vec<ModuleProgress> = if ctx.session.is_signed_in().await {
        Arc::unwrap_or_clone(loaded(
            ctx.queries.module_progress(Some(course_id)).await,
            "module progress",
        )?)
    } else {
        Vec::new()
    };

    Ok(module_rows(&modules, &progress, course.sequential))
}
