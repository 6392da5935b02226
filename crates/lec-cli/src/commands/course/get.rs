use std::sync::Arc;

use lec_auth::SessionProvider;
use lec_core::entities::{Course, Enrollment};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::enrollment::{PanelResponse, panel_response};
use crate::commands::shared::outcome::loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CourseDetailResponse {
    course: Course,
    enrollment: Option<Enrollment>,
    panel: PanelResponse,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let course = loaded(ctx.queries.course(Some(id)).await, "course")?;

    // Signed-out visitors only ever see "Enroll Now".
    let enrollment = if ctx.session.is_signed_in().await {
        Arc::unwrap_or_clone(loaded(
            ctx.queries.course_enrollment(Some(id)).await,
            "enrollment",
        )?)
    } else {
        None
    };

    let panel = panel_response(&course.id, enrollment.as_ref());
    output(
        &CourseDetailResponse {
            course: Arc::unwrap_or_clone(course),
            enrollment,
            panel,
        },
        flags.format,
    )
}
