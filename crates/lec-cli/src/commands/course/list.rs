use lec_core::enums::CourseLevel;
use lec_core::payloads::CourseFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::commands::shared::outcome::loaded;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    category: Option<&str>,
    level: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = CourseFilter {
        search: search.map(String::from),
        category: category.map(String::from),
        level: parse_optional::<CourseLevel>(level, "level")?,
    };
    let limit = effective_limit(limit, flags.limit, ctx.default_limit());

    let courses = loaded(ctx.queries.courses(&filter).await, "courses")?;
    output(&take_limited(&courses, limit), flags.format)
}

/// `lec course mine`: the instructor's own courses, drafts included.
pub async fn run_mine(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let courses = loaded(ctx.queries.instructor_courses().await, "instructor courses")?;
    let limit = effective_limit(None, flags.limit, ctx.default_limit());
    output(&take_limited(&courses, limit), flags.format)
}
