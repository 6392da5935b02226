use lec_core::enums::ReviewStatus;
use lec_core::payloads::{CreateReview, ModerateReview, UpdateReview};

use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::completed;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn add(
    course_id: &str,
    rating: u8,
    comment: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = CreateReview {
        course_id: course_id.to_string(),
        rating,
        comment,
    };
    let review = completed(ctx.queries.add_review(&payload).await, "review")?;
    output(&review, flags.format)
}

pub async fn update(
    course_id: &str,
    review_id: &str,
    rating: Option<u8>,
    comment: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if rating.is_none() && comment.is_none() {
        anyhow::bail!("nothing to update: pass --rating or --comment");
    }
    let payload = UpdateReview { rating, comment };
    let review = completed(
        ctx.queries
            .update_review(review_id, course_id, &payload)
            .await,
        "review update",
    )?;
    output(&review, flags.format)
}

pub async fn moderate(
    course_id: &str,
    review_id: &str,
    status: &str,
    reason: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: ReviewStatus = parse_enum(status, "status")?;
    if status == ReviewStatus::Pending {
        anyhow::bail!("moderation status must be approved or rejected");
    }
    let payload = ModerateReview { status, reason };
    let review = completed(
        ctx.queries
            .moderate_review(review_id, course_id, &payload)
            .await,
        "moderation",
    )?;
    output(&review, flags.format)
}
