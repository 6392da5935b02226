use lec_core::entities::Enrollment;
use lec_core::enums::EnrollmentStatus;
use serde::Serialize;

/// Which screen a course's enrollment state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentView {
    NotEnrolled,
    InProgress,
    Payment,
    Certificate,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentAction {
    Enroll,
    ContinueLearning,
    CompletePayment,
    ViewCertificate,
    ReviewCourse,
}

impl EnrollmentAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enroll => "Enroll Now",
            Self::ContinueLearning => "Continue Learning",
            Self::CompletePayment => "Complete Payment",
            Self::ViewCertificate => "View Certificate",
            Self::ReviewCourse => "Review Course",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub action: EnrollmentAction,
    pub label: &'static str,
    pub primary: bool,
    pub enabled: bool,
}

impl ActionButton {
    const fn primary(action: EnrollmentAction) -> Self {
        Self {
            action,
            label: action.label(),
            primary: true,
            enabled: true,
        }
    }

    const fn secondary(action: EnrollmentAction) -> Self {
        Self {
            action,
            label: action.label(),
            primary: false,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentPanel {
    pub view: EnrollmentView,
    pub status: Option<EnrollmentStatus>,
    pub progress: u8,
    pub actions: Vec<ActionButton>,
}

impl EnrollmentPanel {
    #[must_use]
    pub fn primary(&self) -> Option<&ActionButton> {
        self.actions.iter().find(|button| button.primary && button.enabled)
    }

    #[must_use]
    pub fn offers(&self, action: EnrollmentAction) -> bool {
        self.actions
            .iter()
            .any(|button| button.action == action && button.enabled)
    }
}

/// Map the signed-in user's enrollment (or its absence) to a panel.
#[must_use]
pub fn enrollment_panel(enrollment: Option<&Enrollment>) -> EnrollmentPanel {
    let Some(enrollment) = enrollment else {
        return EnrollmentPanel {
            view: EnrollmentView::NotEnrolled,
            status: None,
            progress: 0,
            actions: vec![ActionButton::primary(EnrollmentAction::Enroll)],
        };
    };

    let (view, actions) = match enrollment.status {
        EnrollmentStatus::Active => (
            EnrollmentView::InProgress,
            vec![ActionButton::primary(EnrollmentAction::ContinueLearning)],
        ),
        EnrollmentStatus::PendingPayment => (
            EnrollmentView::Payment,
            vec![ActionButton::primary(EnrollmentAction::CompletePayment)],
        ),
        EnrollmentStatus::Completed => (
            EnrollmentView::Certificate,
            vec![
                ActionButton::primary(EnrollmentAction::ViewCertificate),
                ActionButton::secondary(EnrollmentAction::ReviewCourse),
            ],
        ),
        EnrollmentStatus::Cancelled => (
            EnrollmentView::Disabled,
            vec![ActionButton {
                enabled: false,
                ..ActionButton::primary(EnrollmentAction::ContinueLearning)
            }],
        ),
    };

    EnrollmentPanel {
        view,
        status: Some(enrollment.status),
        progress: enrollment.progress.min(100),
        actions,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    pub(crate) fn enrollment(status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            id: "enr_1".into(),
            course_id: "crs_1".into(),
            user_id: "user_1".into(),
            status,
            progress: 40,
            enrolled_at: Utc::now(),
            completed_at: None,
            certificate_url: None,
        }
    }

    #[test]
    fn not_enrolled_offers_enroll() {
        let panel = enrollment_panel(None);
        assert_eq!(panel.view, EnrollmentView::NotEnrolled);
        assert_eq!(panel.primary().map(|b| b.label), Some("Enroll Now"));
    }

    #[test]
    fn active_continues_learning() {
        let panel = enrollment_panel(Some(&enrollment(EnrollmentStatus::Active)));
        assert_eq!(panel.view, EnrollmentView::InProgress);
        assert_eq!(panel.primary().map(|b| b.action), Some(EnrollmentAction::ContinueLearning));
        assert_eq!(panel.progress, 40);
    }

    #[test]
    fn pending_payment_has_no_certificate_action() {
        let panel = enrollment_panel(Some(&enrollment(EnrollmentStatus::PendingPayment)));
        assert_eq!(panel.view, EnrollmentView::Payment);
        assert_eq!(panel.primary().map(|b| b.label), Some("Complete Payment"));
        assert!(!panel.offers(EnrollmentAction::ViewCertificate));
    }

    #[test]
    fn completed_offers_certificate_and_review() {
        let panel = enrollment_panel(Some(&enrollment(EnrollmentStatus::Completed)));
        assert_eq!(panel.view, EnrollmentView::Certificate);
        assert_eq!(panel.primary().map(|b| b.label), Some("View Certificate"));
        assert!(panel.offers(EnrollmentAction::ReviewCourse));
    }

    #[test]
    fn cancelled_enables_nothing() {
        let panel = enrollment_panel(Some(&enrollment(EnrollmentStatus::Cancelled)));
        assert_eq!(panel.view, EnrollmentView::Disabled);
        assert!(panel.primary().is_none());
        assert!(panel.actions.iter().all(|b| !b.enabled));
    }
}
