use std::sync::Arc;

use lec_core::entities::Lesson;
use serde::Serialize;

use super::list::outline;
use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::loaded;
use crate::context::AppContext;
use crate::output::output;
use crate::views::{Route, resume_module, resume_route};

#[derive(Serialize)]
struct NextResponse {
    module_id: Option<String>,
    module_title: Option<String>,
    path: String,
    route: Route,
}

pub async fn run(course_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = outline(course_id, ctx).await?;

    let next = resume_module(&rows);
    let lessons: Vec<Lesson> = match next {
        Some(row) => Arc::unwrap_or_clone(loaded(
            ctx.queries.module_lessons(Some(&row.module_id)).await,
            "lessons",
        )?),
        None => Vec::new(),
    };

    let route = resume_route(course_id, &rows, &lessons);
    output(
        &NextResponse {
            module_id: next.map(|row| row.module_id.clone()),
            module_title: next.map(|row| row.title.clone()),
            path: route.to_string(),
            route,
        },
        flags.format,
    )
}
