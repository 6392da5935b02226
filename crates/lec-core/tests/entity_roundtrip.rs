//! Serde roundtrip and JsonSchema validation tests for the API records.

use chrono::Utc;
use lec_core::entities::*;
use lec_core::enums::*;
use lec_core::responses::ApiResponse;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    course_roundtrip,
    Course,
    Course {
        id: "crs_1".into(),
        title: "Rust for Backend Engineers".into(),
        description: "Async, ownership, and services".into(),
        price: 49.0,
        category: Some("programming".into()),
        level: CourseLevel::Intermediate,
        status: CourseStatus::Published,
        instructor_id: "user_inst".into(),
        thumbnail_url: None,
        sequential: true,
        average_rating: Some(4.5),
        review_count: 12,
        enrollment_count: 340,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    enrollment_roundtrip,
    Enrollment,
    Enrollment {
        id: "enr_1".into(),
        course_id: "crs_1".into(),
        user_id: "user_1".into(),
        status: EnrollmentStatus::PendingPayment,
        progress: 0,
        enrolled_at: Utc::now(),
        completed_at: None,
        certificate_url: None,
    }
);

roundtrip_and_validate!(
    module_progress_roundtrip,
    ModuleProgress,
    ModuleProgress {
        module_id: "mod_1".into(),
        status: ModuleProgressStatus::InProgress,
        completed_lessons: 2,
        total_lessons: 5,
        completed_at: None,
    }
);

roundtrip_and_validate!(
    review_check_roundtrip,
    ReviewCheck,
    ReviewCheck {
        has_reviewed: true,
        review: Some(Review {
            id: "rev_1".into(),
            course_id: "crs_1".into(),
            user_id: "user_1".into(),
            rating: 5,
            comment: Some("Excellent pacing".into()),
            status: ReviewStatus::Approved,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }),
    }
);

roundtrip_and_validate!(
    announcement_roundtrip,
    Announcement,
    Announcement {
        id: "ann_1".into(),
        course_id: None,
        author_id: "user_admin".into(),
        title: "Maintenance window".into(),
        content: "The platform is read-only on Sunday.".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    lesson_roundtrip,
    Lesson,
    Lesson {
        id: "les_1".into(),
        module_id: "mod_1".into(),
        title: "Borrowing".into(),
        content: Some("# Borrowing".into()),
        video_url: None,
        duration_minutes: Some(12),
        position: 1,
        completed: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

#[test]
fn parses_server_fixture_with_camel_case_fields() {
    let body = r#"{
        "success": true,
        "data": {
            "id": "enr_9",
            "courseId": "crs_2",
            "userId": "user_3",
            "status": "COMPLETED",
            "progress": 100,
            "enrolledAt": "2026-01-05T10:00:00Z",
            "completedAt": "2026-02-01T18:30:00Z",
            "certificateUrl": "https://certs.example.com/enr_9.pdf"
        }
    }"#;

    let parsed: ApiResponse<Enrollment> = serde_json::from_str(body).unwrap();
    let enrollment = parsed.into_data();
    assert_eq!(enrollment.status, EnrollmentStatus::Completed);
    assert_eq!(enrollment.progress, 100);
    assert!(enrollment.certificate_url.is_some());
}

#[test]
fn schema_rejects_invalid_enrollment_status() {
    let schema = serde_json::to_value(schema_for!(Enrollment)).unwrap();
    let invalid = serde_json::json!({
        "id": "enr_1",
        "courseId": "crs_1",
        "userId": "user_1",
        "status": "PAUSED",
        "enrolledAt": "2026-02-08T12:00:00Z",
        "completedAt": null,
        "certificateUrl": null
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject unknown enrollment status");
}

#[test]
fn schema_rejects_review_without_rating() {
    let schema = serde_json::to_value(schema_for!(Review)).unwrap();
    let invalid = serde_json::json!({
        "id": "rev_1",
        "courseId": "crs_1",
        "userId": "user_1",
        "comment": null,
        "status": "PENDING",
        "createdAt": "2026-02-08T12:00:00Z",
        "updatedAt": "2026-02-08T12:00:00Z"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject review without 'rating'");
}
