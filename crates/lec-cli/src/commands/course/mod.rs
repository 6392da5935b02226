mod create;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::shared::outcome::completed;
use crate::context::AppContext;
use crate::output::output;
use crate::views::Route;

/// Handle `lec course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::List {
            search,
            category,
            level,
            limit,
        } => {
            list::run(
                search.as_deref(),
                category.as_deref(),
                level.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        CourseCommands::Get { id } => get::run(id, ctx, flags).await,
        CourseCommands::Mine => list::run_mine(ctx, flags).await,
        CourseCommands::Create {
            title,
            description,
            price,
            category,
            level,
            sequential,
        } => {
            create::run(
                title,
                description,
                *price,
                category.as_deref(),
                level.as_deref(),
                *sequential,
                ctx,
                flags,
            )
            .await
        }
        CourseCommands::Update {
            id,
            title,
            description,
            price,
            category,
            level,
        } => {
            let changes = update::Changes {
                title: title.clone(),
                description: description.clone(),
                price: *price,
                category: category.clone(),
                level: level.as_deref(),
            };
            update::run(id, changes, ctx, flags).await
        }
        CourseCommands::Delete { id } => {
            if !ctx.queries.delete_course(id).await {
                anyhow::bail!("course {id} was not deleted");
            }
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        CourseCommands::Publish { id } => {
            let course = completed(ctx.queries.publish_course(id).await, "publish")?;
            let route = Route::InstructorCourse {
                course_id: course.id.clone(),
            };
            output(
                &serde_json::json!({ "course": course, "route": route.to_string() }),
                flags.format,
            )
        }
    }
}
