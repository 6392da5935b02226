//! Cache keys: an ordered list of string segments, resource name first.

use std::fmt;

use lec_core::payloads::CourseFilter;

/// Identifies one logical piece of server data.
///
/// Two calls that return the same data share a key; calls whose data differ
/// never do. Invalidation matches by prefix, so `["reviews"]` also covers
/// `["reviews", "r1"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` is a leading run of this key's segments.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    // ── Users ──────────────────────────────────────────────────────

    #[must_use]
    pub fn current_user() -> Self {
        Self::new(["currentUser"])
    }

    // ── Reviews ────────────────────────────────────────────────────

    #[must_use]
    pub fn reviews() -> Self {
        Self::new(["reviews"])
    }

    #[must_use]
    pub fn review(id: &str) -> Self {
        Self::new(["review", id])
    }

    #[must_use]
    pub fn course_reviews(course_id: &str) -> Self {
        Self::new(["courseReviews", course_id])
    }

    /// Course first, then user (the path of the endpoint is the other way round).
    #[must_use]
    pub fn check_user_review(course_id: &str, user_id: &str) -> Self {
        Self::new(["checkUserReview", course_id, user_id])
    }

    // ── Announcements ──────────────────────────────────────────────

    #[must_use]
    pub fn announcements() -> Self {
        Self::new(["announcements"])
    }

    #[must_use]
    pub fn course_announcements(course_id: &str) -> Self {
        Self::new(["courseAnnouncements", course_id])
    }

    #[must_use]
    pub fn global_announcements() -> Self {
        Self::new(["globalAnnouncements"])
    }

    #[must_use]
    pub fn announcement(id: &str) -> Self {
        Self::new(["announcement", id])
    }

    // ── Courses ────────────────────────────────────────────────────

    /// `["courses", "search=rust", "level=BEGINNER"]`; blank filters are left out.
    #[must_use]
    pub fn courses(filter: &CourseFilter) -> Self {
        let mut segments = vec!["courses".to_string()];
        segments.extend(
            filter
                .pairs()
                .into_iter()
                .map(|(name, value)| format!("{name}={value}")),
        );
        Self(segments)
    }

    #[must_use]
    pub fn course(id: &str) -> Self {
        Self::new(["course", id])
    }

    #[must_use]
    pub fn instructor_courses() -> Self {
        Self::new(["instructorCourses"])
    }

    // ── Enrollments ────────────────────────────────────────────────

    #[must_use]
    pub fn my_enrollments() -> Self {
        Self::new(["myEnrollments"])
    }

    #[must_use]
    pub fn enrollment(course_id: &str) -> Self {
        Self::new(["enrollment", course_id])
    }

    // ── Modules & lessons ──────────────────────────────────────────

    #[must_use]
    pub fn course_modules(course_id: &str) -> Self {
        Self::new(["courseModules", course_id])
    }

    #[must_use]
    pub fn module(id: &str) -> Self {
        Self::new(["module", id])
    }

    #[must_use]
    pub fn module_progress(course_id: &str) -> Self {
        Self::new(["moduleProgress", course_id])
    }

    #[must_use]
    pub fn module_lessons(module_id: &str) -> Self {
        Self::new(["moduleLessons", module_id])
    }

    #[must_use]
    pub fn lesson(id: &str) -> Self {
        Self::new(["lesson", id])
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment:?}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lec_core::enums::CourseLevel;

    #[test]
    fn prefix_matching() {
        let reviews = QueryKey::reviews();
        assert!(QueryKey::new(["reviews", "r1"]).starts_with(&reviews));
        assert!(reviews.starts_with(&reviews));
        assert!(!QueryKey::review("r1").starts_with(&reviews));
        assert!(!reviews.starts_with(&QueryKey::new(["reviews", "r1"])));
    }

    #[test]
    fn course_filter_segments_are_stable() {
        let filter = CourseFilter {
            search: Some(" rust ".into()),
            category: None,
            level: Some(CourseLevel::Beginner),
        };
        assert_eq!(
            QueryKey::courses(&filter).segments(),
            ["courses", "search=rust", "level=BEGINNER"]
        );
        assert_eq!(QueryKey::courses(&CourseFilter::default()).segments(), ["courses"]);
    }

    #[test]
    fn display_reads_like_a_list() {
        assert_eq!(
            QueryKey::check_user_review("c1", "u1").to_string(),
            r#"["checkUserReview", "c1", "u1"]"#
        );
    }
}
