mod panel;
mod payment;

pub use panel::{PanelResponse, panel_response};

use std::sync::Arc;

use anyhow::Context;
use lec_core::entities::Enrollment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnrollmentCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::outcome::{completed, loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lec enrollment`.
pub async fn handle(
    action: &EnrollmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnrollmentCommands::List { limit } => {
            let enrollments = loaded(ctx.queries.my_enrollments().await, "enrollments")?;
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            output(&take_limited(&enrollments, limit), flags.format)
        }
        EnrollmentCommands::Show { course_id } => {
            let enrollment = current(ctx, course_id).await?;
            output(
                &serde_json::json!({
                    "enrollment": enrollment,
                    "panel": panel_response(course_id, enrollment.as_ref()),
                }),
                flags.format,
            )
        }
        EnrollmentCommands::Enroll { course_id } => {
            let enrollment = completed(ctx.queries.enroll(course_id).await, "enrollment")?;
            let panel = panel_response(course_id, Some(&enrollment));
            output(
                &serde_json::json!({ "enrollment": enrollment, "panel": panel }),
                flags.format,
            )
        }
        EnrollmentCommands::Cancel { course_id } => {
            let enrollment = current(ctx, course_id)
                .await?
                .with_context(|| format!("not enrolled in course {course_id}"))?;
            let cancelled = completed(
                ctx.queries
                    .cancel_enrollment(&enrollment.id, course_id)
                    .await,
                "cancellation",
            )?;
            output(&cancelled, flags.format)
        }
        EnrollmentCommands::Pay {
            course_id,
            reference,
        } => payment::run(course_id, reference, ctx, flags).await,
    }
}

/// The caller's enrollment in a course, `None` when not enrolled.
async fn current(ctx: &AppContext, course_id: &str) -> anyhow::Result<Option<Enrollment>> {
    let enrollment = loaded(ctx.queries.course_enrollment(Some(course_id)).await, "enrollment")?;
    Ok(Arc::unwrap_or_clone(enrollment))
}
