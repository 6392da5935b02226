use anyhow::Context;
use lec_core::payloads::PaymentConfirmation;

use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::completed;
use crate::context::AppContext;
use crate::output::output;
use crate::views::{EnrollmentAction, Route, enrollment_panel, route_for};

pub async fn run(
    course_id: &str,
    reference: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let enrollment = super::current(ctx, course_id).await?.with_context(|| {
        format!("not enrolled in course {course_id}; run `lec enrollment enroll {course_id}`")
    })?;

    let panel = enrollment_panel(Some(&enrollment));
    if !panel.offers(EnrollmentAction::CompletePayment) {
        anyhow::bail!(
            "enrollment {} is {}; nothing to pay",
            enrollment.id,
            enrollment.status
        );
    }
    if reference.trim().is_empty() {
        anyhow::bail!("payment reference must not be empty");
    }

    let payment_route = route_for(EnrollmentAction::CompletePayment, course_id, Some(&enrollment));
    tracing::debug!(route = ?payment_route.as_ref().map(Route::to_string), "confirming payment");

    let payload = PaymentConfirmation {
        payment_reference: reference.trim().to_string(),
    };
    let confirmed = completed(
        ctx.queries
            .confirm_payment(&enrollment.id, course_id, &payload)
            .await,
        "payment confirmation",
    )?;
    let next = route_for(EnrollmentAction::ContinueLearning, course_id, Some(&confirmed));

    output(
        &serde_json::json!({
            "enrollment": confirmed,
            "route": next.map(|route| route.to_string()),
        }),
        flags.format,
    )
}
