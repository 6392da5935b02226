use lec_core::entities::Enrollment;
use lec_core::enums::EnrollmentStatus;
use serde::Serialize;

use crate::views::{EnrollmentView, enrollment_panel, route_for};

/// An enrollment panel with each action resolved to where it leads.
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub view: EnrollmentView,
    pub status: Option<EnrollmentStatus>,
    pub progress: u8,
    pub primary: Option<&'static str>,
    pub actions: Vec<ActionResponse>,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub label: &'static str,
    pub primary: bool,
    pub enabled: bool,
    pub route: Option<String>,
}

#[must_use]
pub fn panel_response(course_id: &str, enrollment: Option<&Enrollment>) -> PanelResponse {
    let panel = enrollment_panel(enrollment);
    let primary = panel.primary().map(|button| button.label);
    let actions = panel
        .actions
        .iter()
        .map(|button| ActionResponse {
            label: button.label,
            primary: button.primary,
            enabled: button.enabled,
            route: button
                .enabled
                .then(|| route_for(button.action, course_id, enrollment))
                .flatten()
                .map(|route| route.to_string()),
        })
        .collect();

    PanelResponse {
        view: panel.view,
        status: panel.status,
        progress: panel.progress,
        primary,
        actions,
    }
}
