use lec_core::enums::CourseLevel;
use lec_core::payloads::CreateCourse;

use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::completed;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;
use crate::views::Route;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    title: &str,
    description: &str,
    price: f64,
    category: Option<&str>,
    level: Option<&str>,
    sequential: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !price.is_finite() || price < 0.0 {
        anyhow::bail!("invalid price {price}: must be zero or positive");
    }
    let payload = CreateCourse {
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.map(String::from),
        level: parse_optional::<CourseLevel>(level, "level")?.unwrap_or(CourseLevel::Beginner),
        thumbnail_url: None,
        sequential,
    };

    let course = completed(ctx.queries.create_course(&payload).await, "course creation")?;
    let route = Route::InstructorCourse {
        course_id: course.id.clone(),
    };
    output(
        &serde_json::json!({ "course": course, "route": route.to_string() }),
        flags.format,
    )
}
