//! Mutations and the cache keys each one makes stale.
//!
//! [`Mutation::invalidates`] is the single table of edges from writes to
//! reads. Adding a mutation means adding a row here; nothing else in the
//! crate decides what to refetch.

use crate::key::QueryKey;

/// A successful write against the course API, with the ids its
/// invalidation set depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddReview {
        course_id: String,
        /// `None` when the session has no user id; every user's check entry
        /// for the course is then invalidated.
        user_id: Option<String>,
    },
    UpdateReview {
        review_id: String,
        course_id: String,
    },
    DeleteReview {
        review_id: String,
        course_id: String,
        user_id: Option<String>,
    },
    ModerateReview {
        review_id: String,
        course_id: String,
    },
    CreateAnnouncement {
        course_id: Option<String>,
    },
    UpdateAnnouncement {
        announcement_id: String,
        course_id: Option<String>,
    },
    DeleteAnnouncement {
        announcement_id: String,
        course_id: Option<String>,
    },
    CreateCourse,
    UpdateCourse {
        course_id: String,
    },
    DeleteCourse {
        course_id: String,
    },
    PublishCourse {
        course_id: String,
    },
    Enroll {
        course_id: String,
    },
    CancelEnrollment {
        course_id: String,
    },
    ConfirmPayment {
        course_id: String,
    },
    CreateModule {
        course_id: String,
    },
    UpdateModule {
        course_id: String,
        module_id: String,
    },
    DeleteModule {
        course_id: String,
        module_id: String,
    },
    CompleteModule {
        course_id: String,
        module_id: String,
    },
    CreateLesson {
        module_id: String,
    },
    UpdateLesson {
        module_id: String,
        lesson_id: String,
    },
    DeleteLesson {
        module_id: String,
        lesson_id: String,
    },
    CompleteLesson {
        course_id: String,
        module_id: String,
        lesson_id: String,
    },
}

impl Mutation {
    /// Keys (as prefixes) to mark stale once this mutation succeeds.
    #[must_use]
    pub fn invalidates(&self) -> Vec<QueryKey> {
        match self {
            Self::AddReview { course_id, user_id } => vec![
                QueryKey::reviews(),
                QueryKey::course_reviews(course_id),
                check_review_key(course_id, user_id.as_deref()),
            ],
            Self::UpdateReview {
                review_id,
                course_id,
            }
            | Self::ModerateReview {
                review_id,
                course_id,
            } => vec![
                QueryKey::reviews(),
                QueryKey::review(review_id),
                QueryKey::course_reviews(course_id),
            ],
            Self::DeleteReview {
                review_id,
                course_id,
                user_id,
            } => vec![
                QueryKey::reviews(),
                QueryKey::review(review_id),
                QueryKey::course_reviews(course_id),
                check_review_key(course_id, user_id.as_deref()),
            ],
            Self::CreateAnnouncement { course_id } => announcement_scope(course_id.as_deref()),
            Self::UpdateAnnouncement {
                announcement_id,
                course_id,
            }
            | Self::DeleteAnnouncement {
                announcement_id,
                course_id,
            } => {
                let mut keys = announcement_scope(course_id.as_deref());
                keys.push(QueryKey::announcement(announcement_id));
                keys
            }
            Self::CreateCourse => vec![QueryKey::new(["courses"]), QueryKey::instructor_courses()],
            Self::UpdateCourse { course_id }
            | Self::DeleteCourse { course_id }
            | Self::PublishCourse { course_id } => vec![
                QueryKey::new(["courses"]),
                QueryKey::instructor_courses(),
                QueryKey::course(course_id),
            ],
            Self::Enroll { course_id }
            | Self::CancelEnrollment { course_id }
            | Self::ConfirmPayment { course_id } => vec![
                QueryKey::my_enrollments(),
                QueryKey::enrollment(course_id),
                QueryKey::course(course_id),
            ],
            Self::CreateModule { course_id } => vec![
                QueryKey::course_modules(course_id),
                QueryKey::module_progress(course_id),
            ],
            Self::UpdateModule {
                course_id,
                module_id,
            }
            | Self::DeleteModule {
                course_id,
                module_id,
            } => vec![
                QueryKey::course_modules(course_id),
                QueryKey::module_progress(course_id),
                QueryKey::module(module_id),
            ],
            Self::CompleteModule {
                course_id,
                module_id,
            } => vec![
                QueryKey::module_progress(course_id),
                QueryKey::module(module_id),
                QueryKey::enrollment(course_id),
                QueryKey::my_enrollments(),
            ],
            Self::CreateLesson { module_id } => vec![QueryKey::module_lessons(module_id)],
            Self::UpdateLesson {
                module_id,
                lesson_id,
            }
            | Self::DeleteLesson {
                module_id,
                lesson_id,
            } => vec![
                QueryKey::module_lessons(module_id),
                QueryKey::lesson(lesson_id),
            ],
            Self::CompleteLesson {
                course_id,
                module_id,
                lesson_id,
            } => vec![
                QueryKey::lesson(lesson_id),
                QueryKey::module_lessons(module_id),
                QueryKey::module_progress(course_id),
                QueryKey::enrollment(course_id),
            ],
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AddReview { .. } => "add_review",
            Self::UpdateReview { .. } => "update_review",
            Self::DeleteReview { .. } => "delete_review",
            Self::ModerateReview { .. } => "moderate_review",
            Self::CreateAnnouncement { .. } => "create_announcement",
            Self::UpdateAnnouncement { .. } => "update_announcement",
            Self::DeleteAnnouncement { .. } => "delete_announcement",
            Self::CreateCourse => "create_course",
            Self::UpdateCourse { .. } => "update_course",
            Self::DeleteCourse { .. } => "delete_course",
            Self::PublishCourse { .. } => "publish_course",
            Self::Enroll { .. } => "enroll",
            Self::CancelEnrollment { .. } => "cancel_enrollment",
            Self::ConfirmPayment { .. } => "confirm_payment",
            Self::CreateModule { .. } => "create_module",
            Self::UpdateModule { .. } => "update_module",
            Self::DeleteModule { .. } => "delete_module",
            Self::CompleteModule { .. } => "complete_module",
            Self::CreateLesson { .. } => "create_lesson",
            Self::UpdateLesson { .. } => "update_lesson",
            Self::DeleteLesson { .. } => "delete_lesson",
            Self::CompleteLesson { .. } => "complete_lesson",
        }
    }

    /// Notification title when the server did not send a message.
    #[must_use]
    pub const fn success_title(&self) -> &'static str {
        match self {
            Self::AddReview { .. } => "Review submitted",
            Self::UpdateReview { .. } => "Review updated",
            Self::DeleteReview { .. } => "Review deleted",
            Self::ModerateReview { .. } => "Review moderated",
            Self::CreateAnnouncement { .. } => "Announcement published",
            Self::UpdateAnnouncement { .. } => "Announcement updated",
            Self::DeleteAnnouncement { .. } => "Announcement deleted",
            Self::CreateCourse => "Course created",
            Self::UpdateCourse { .. } => "Course updated",
            Self::DeleteCourse { .. } => "Course deleted",
            Self::PublishCourse { .. } => "Course published",
            Self::Enroll { .. } => "Enrolled",
            Self::CancelEnrollment { .. } => "Enrollment cancelled",
            Self::ConfirmPayment { .. } => "Payment confirmed",
            Self::CreateModule { .. } => "Module created",
            Self::UpdateModule { .. } => "Module updated",
            Self::DeleteModule { .. } => "Module deleted",
            Self::CompleteModule { .. } => "Module completed",
            Self::CreateLesson { .. } => "Lesson created",
            Self::UpdateLesson { .. } => "Lesson updated",
            Self::DeleteLesson { .. } => "Lesson deleted",
            Self::CompleteLesson { .. } => "Lesson completed",
        }
    }

    #[must_use]
    pub const fn failure_title(&self) -> &'static str {
        match self {
            Self::AddReview { .. } => "Could not submit review",
            Self::UpdateReview { .. } => "Could not update review",
            Self::DeleteReview { .. } => "Could not delete review",
            Self::ModerateReview { .. } => "Could not moderate review",
            Self::CreateAnnouncement { .. } => "Could not publish announcement",
            Self::UpdateAnnouncement { .. } => "Could not update announcement",
            Self::DeleteAnnouncement { .. } => "Could not delete announcement",
            Self::CreateCourse => "Could not create course",
            Self::UpdateCourse { .. } => "Could not update course",
            Self::DeleteCourse { .. } => "Could not delete course",
            Self::PublishCourse { .. } => "Could not publish course",
            Self::Enroll { .. } => "Could not enroll",
            Self::CancelEnrollment { .. } => "Could not cancel enrollment",
            Self::ConfirmPayment { .. } => "Could not confirm payment",
            Self::CreateModule { .. } => "Could not create module",
            Self::UpdateModule { .. } => "Could not update module",
            Self::DeleteModule { .. } => "Could not delete module",
            Self::CompleteModule { .. } => "Could not complete module",
            Self::CreateLesson { .. } => "Could not create lesson",
            Self::UpdateLesson { .. } => "Could not update lesson",
            Self::DeleteLesson { .. } => "Could not delete lesson",
            Self::CompleteLesson { .. } => "Could not complete lesson",
        }
    }
}

fn check_review_key(course_id: &str, user_id: Option<&str>) -> QueryKey {
    user_id.map_or_else(
        || QueryKey::new(["checkUserReview", course_id]),
        |user_id| QueryKey::check_user_review(course_id, user_id),
    )
}

fn announcement_scope(course_id: Option<&str>) -> Vec<QueryKey> {
    vec![
        QueryKey::announcements(),
        course_id.map_or_else(QueryKey::global_announcements, QueryKey::course_announcements),
    ]
}
