use lec_core::enums::CourseLevel;
use lec_core::payloads::UpdateCourse;

use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::completed;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

pub struct Changes<'a> {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub level: Option<&'a str>,
}

pub async fn run(
    id: &str,
    changes: Changes<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = UpdateCourse {
        title: changes.title,
        description: changes.description,
        price: changes.price,
        category: changes.category,
        level: parse_optional::<CourseLevel>(changes.level, "level")?,
        ..UpdateCourse::default()
    };
    if payload == UpdateCourse::default() {
        anyhow::bail!("nothing to update: pass at least one field");
    }

    let course = completed(ctx.queries.update_course(id, &payload).await, "course update")?;
    output(&course, flags.format)
}
