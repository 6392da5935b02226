use std::sync::Arc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::commands::shared::outcome::{completed, loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lec lesson`.
pub async fn handle(
    action: &LessonCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LessonCommands::List { module_id } => {
            let mut lessons = Arc::unwrap_or_clone(loaded(
                ctx.queries.module_lessons(Some(module_id)).await,
                "lessons",
            )?);
            lessons.sort_by_key(|lesson| lesson.position);
            output(&lessons, flags.format)
        }
        LessonCommands::Get { id } => {
            let lesson = loaded(ctx.queries.lesson(Some(id)).await, "lesson")?;
            output(lesson.as_ref(), flags.format)
        }
        LessonCommands::Complete {
            course_id,
            module_id,
            lesson_id,
        } => {
            let lesson = completed(
                ctx.queries
                    .complete_lesson(course_id, module_id, lesson_id)
                    .await,
                "lesson completion",
            )?;
            output(&lesson, flags.format)
        }
    }
}
