//! Route values computed from the current query results.

use std::fmt;

use lec_core::entities::{Enrollment, Lesson};
use serde::Serialize;

use super::enrollment::EnrollmentAction;
use super::module_progress::{ModuleAction, ModuleRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    CourseDetail {
        course_id: String,
    },
    Learn {
        course_id: String,
    },
    Lesson {
        course_id: String,
        module_id: String,
        lesson_id: String,
    },
    Payment {
        course_id: String,
        enrollment_id: String,
    },
    Certificate {
        enrollment_id: String,
    },
    Review {
        course_id: String,
    },
    InstructorCourse {
        course_id: String,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CourseDetail { course_id } => write!(f, "/courses/{course_id}"),
            Self::Learn { course_id } => write!(f, "/courses/{course_id}/learn"),
            Self::Lesson {
                course_id,
                module_id,
                lesson_id,
            } => write!(
                f,
                "/courses/{course_id}/learn/{module_id}/lessons/{lesson_id}"
            ),
            Self::Payment {
                course_id,
                enrollment_id,
            } => write!(f, "/courses/{course_id}/payment?enrollment={enrollment_id}"),
            Self::Certificate { enrollment_id } => write!(f, "/certificates/{enrollment_id}"),
            Self::Review { course_id } => write!(f, "/courses/{course_id}/review"),
            Self::InstructorCourse { course_id } => write!(f, "/instructor/courses/{course_id}"),
        }
    }
}

/// Where an enrollment action leads. `None` when the action needs an
/// enrollment id and there is no enrollment.
#[must_use]
pub fn route_for(
    action: EnrollmentAction,
    course_id: &str,
    enrollment: Option<&Enrollment>,
) -> Option<Route> {
    let course_id = course_id.to_string();
    match action {
        EnrollmentAction::Enroll => Some(Route::CourseDetail { course_id }),
        EnrollmentAction::ContinueLearning => Some(Route::Learn { course_id }),
        EnrollmentAction::CompletePayment => enrollment.map(|e| Route::Payment {
            course_id,
            enrollment_id: e.id.clone(),
        }),
        EnrollmentAction::ViewCertificate => enrollment.map(|e| Route::Certificate {
            enrollment_id: e.id.clone(),
        }),
        EnrollmentAction::ReviewCourse => Some(Route::Review { course_id }),
    }
}

/// The lesson a student should resume at.
///
/// Picks the first unlocked module that is not completed, then the first
/// incomplete lesson of it (`lessons` must be that module's lessons). Falls
/// back to the course outline when everything is done or nothing is known.
#[must_use]
pub fn resume_route(course_id: &str, rows: &[ModuleRow], lessons: &[Lesson]) -> Route {
    let next = resume_module(rows);
    let lesson = next.and_then(|row| {
        let mut ordered: Vec<&Lesson> = lessons
            .iter()
            .filter(|lesson| lesson.module_id == row.module_id)
            .collect();
        ordered.sort_by_key(|lesson| lesson.position);
        ordered.into_iter().find(|lesson| !lesson.completed)
    });

    match (next, lesson) {
        (Some(row), Some(lesson)) => Route::Lesson {
            course_id: course_id.to_string(),
            module_id: row.module_id.clone(),
            lesson_id: lesson.id.clone(),
        },
        _ => Route::Learn {
            course_id: course_id.to_string(),
        },
    }
}

/// The module [`resume_route`] would pick, so callers know whose lessons
/// to fetch.
#[must_use]
pub fn resume_module(rows: &[ModuleRow]) -> Option<&ModuleRow> {
    rows.iter()
        .find(|row| !row.locked && row.action != ModuleAction::Review)
}
