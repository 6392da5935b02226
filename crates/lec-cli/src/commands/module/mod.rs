mod list;
mod next;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModuleCommands;
use crate::commands::shared::outcome::{completed, loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lec module`.
pub async fn handle(
    action: &ModuleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ModuleCommands::List { course_id } => list::run(course_id, ctx, flags).await,
        ModuleCommands::Get { id } => {
            let module = loaded(ctx.queries.module(Some(id)).await, "module")?;
            output(module.as_ref(), flags.format)
        }
        ModuleCommands::Complete {
            course_id,
            module_id,
        } => {
            let progress = completed(
                ctx.queries.complete_module(course_id, module_id).await,
                "module completion",
            )?;
            output(&progress, flags.format)
        }
        ModuleCommands::Next { course_id } => next::run(course_id, ctx, flags).await,
    }
}
