mod write;

use lec_auth::SessionProvider;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::outcome::loaded;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lec review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewCommands::List { course, limit } => {
            let reviews = match course.as_deref() {
                Some(course_id) => ctx.queries.course_reviews(Some(course_id)).await,
                None => ctx.queries.reviews().await,
            };
            let reviews = loaded(reviews, "reviews")?;
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&take_limited(&reviews, limit), flags.format)
        }
        ReviewCommands::Get { id } => {
            let review = loaded(ctx.queries.review(Some(id)).await, "review")?;
            output(review.as_ref(), flags.format)
        }
        ReviewCommands::Check { course_id } => {
            if !ctx.session.is_signed_in().await {
                anyhow::bail!("sign in to check your review of course {course_id}");
            }
            let check = loaded(
                ctx.queries.check_user_review(Some(course_id)).await,
                "review check",
            )?;
            output(check.as_ref(), flags.format)
        }
        ReviewCommands::Add {
            course_id,
            rating,
            comment,
        } => write::add(course_id, *rating, comment.clone(), ctx, flags).await,
        ReviewCommands::Update {
            course_id,
            id,
            rating,
            comment,
        } => write::update(course_id, id, *rating, comment.clone(), ctx, flags).await,
        ReviewCommands::Delete { course_id, id } => {
            if !ctx.queries.delete_review(id, course_id).await {
                anyhow::bail!("review {id} was not deleted");
            }
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ReviewCommands::Moderate {
            course_id,
            id,
            status,
            reason,
        } => write::moderate(course_id, id, status, reason.clone(), ctx, flags).await,
    }
}
