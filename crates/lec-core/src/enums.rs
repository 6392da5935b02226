//! Status enums and classifiers reported by the remote course API.
//!
//! The API serializes statuses as `SCREAMING_SNAKE_CASE` strings
//! (`PENDING_PAYMENT`, `IN_PROGRESS`). Every enum here is a read-only
//! snapshot of server state: the client never advances a status locally,
//! it refetches and renders whatever the server reports.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Implements `Display` and a case-insensitive `FromStr` over `as_str()`.
///
/// `FromStr` accepts the wire form (`PENDING_PAYMENT`) as well as the
/// lowercase and kebab forms typed on a command line (`pending-payment`).
macro_rules! string_enum {
    ($ty:ident, $label:literal, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
                $(
                    if normalized == Self::$variant.as_str() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(CoreError::Validation(format!(
                    concat!("unknown ", $label, " '{}'"),
                    s
                )))
            }
        }
    };
}

// ---------------------------------------------------------------------------
// EnrollmentStatus
// ---------------------------------------------------------------------------

/// Status of a student's enrollment in a course.
///
/// ```text
/// pending_payment → active → completed
///                 → cancelled
///          active → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Active,
    PendingPayment,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::PendingPayment => "PENDING_PAYMENT",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether the server will never move this enrollment again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

string_enum!(EnrollmentStatus, "enrollment status", [Active, PendingPayment, Completed, Cancelled]);

// ---------------------------------------------------------------------------
// ModuleProgressStatus
// ---------------------------------------------------------------------------

/// Per-module progress of the signed-in student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ModuleProgressStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

string_enum!(ModuleProgressStatus, "module progress status", [NotStarted, InProgress, Completed]);

// ---------------------------------------------------------------------------
// ReviewStatus
// ---------------------------------------------------------------------------

/// Moderation state of a course review.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

string_enum!(ReviewStatus, "review status", [Pending, Approved, Rejected]);

// ---------------------------------------------------------------------------
// CourseLevel / CourseStatus
// ---------------------------------------------------------------------------

/// Difficulty level advertised on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

string_enum!(CourseLevel, "course level", [Beginner, Intermediate, Advanced]);

/// Publication state of a course, managed by its instructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

impl CourseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }
}

string_enum!(CourseStatus, "course status", [Draft, Published, Archived]);

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Platform role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Instructor => "INSTRUCTOR",
            Self::Admin => "ADMIN",
        }
    }

    /// Instructors and admins may create and edit courses.
    #[must_use]
    pub const fn can_manage_courses(self) -> bool {
        matches!(self, Self::Instructor | Self::Admin)
    }
}

string_enum!(UserRole, "user role", [Student, Instructor, Admin]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_status_uses_wire_names() {
        let json = serde_json::to_string(&EnrollmentStatus::PendingPayment).unwrap();
        assert_eq!(json, "\"PENDING_PAYMENT\"");
        let parsed: EnrollmentStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, EnrollmentStatus::Cancelled);
    }

    #[test]
    fn display_matches_serde() {
        for status in [
            ModuleProgressStatus::NotStarted,
            ModuleProgressStatus::InProgress,
            ModuleProgressStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn from_str_accepts_cli_spellings() {
        assert_eq!(
            "pending-payment".parse::<EnrollmentStatus>().unwrap(),
            EnrollmentStatus::PendingPayment
        );
        assert_eq!("approved".parse::<ReviewStatus>().unwrap(), ReviewStatus::Approved);
        assert_eq!(" Advanced ".parse::<CourseLevel>().unwrap(), CourseLevel::Advanced);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "expert".parse::<CourseLevel>().unwrap_err();
        assert!(err.to_string().contains("unknown course level 'expert'"));
    }

    #[test]
    fn terminal_enrollment_states() {
        assert!(EnrollmentStatus::Completed.is_terminal());
        assert!(EnrollmentStatus::Cancelled.is_terminal());
        assert!(!EnrollmentStatus::Active.is_terminal());
        assert!(!EnrollmentStatus::PendingPayment.is_terminal());
    }

    #[test]
    fn only_instructors_and_admins_manage_courses() {
        assert!(!UserRole::Student.can_manage_courses());
        assert!(UserRole::Instructor.can_manage_courses());
        assert!(UserRole::Admin.can_manage_courses());
    }
}
