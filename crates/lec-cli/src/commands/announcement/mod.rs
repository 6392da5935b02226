use lec_core::payloads::CreateAnnouncement;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnnouncementCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::outcome::{completed, loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lec announcement`.
pub async fn handle(
    action: &AnnouncementCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnnouncementCommands::List {
            course,
            global,
            limit,
        } => {
            let announcements = match (course.as_deref(), *global) {
                (Some(course_id), _) => ctx.queries.course_announcements(Some(course_id)).await,
                (None, true) => ctx.queries.global_announcements().await,
                (None, false) => ctx.queries.announcements().await,
            };
            let announcements = loaded(announcements, "announcements")?;
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&take_limited(&announcements, limit), flags.format)
        }
        AnnouncementCommands::Get { id } => {
            let announcement = loaded(ctx.queries.announcement(Some(id)).await, "announcement")?;
            output(announcement.as_ref(), flags.format)
        }
        AnnouncementCommands::Create {
            title,
            content,
            course,
        } => {
            let payload = CreateAnnouncement {
                title: title.clone(),
                content: content.clone(),
                course_id: course.clone(),
            };
            let announcement = completed(
                ctx.queries.create_announcement(&payload).await,
                "announcement",
            )?;
            output(&announcement, flags.format)
        }
        AnnouncementCommands::Delete { id, course } => {
            if !ctx
                .queries
                .delete_announcement(id, course.as_deref())
                .await
            {
                anyhow::bail!("announcement {id} was not deleted");
            }
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
