use lec_core::entities::Enrollment;
use lec_core::payloads::{CreateEnrollment, PaymentConfirmation};

use super::{require, require_all, required};
use crate::{Mutation, QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["myEnrollments"]`
    pub async fn my_enrollments(&self) -> QueryResult<Vec<Enrollment>> {
        self.query(QueryKey::my_enrollments(), self.api().my_enrollments())
            .await
    }

    /// `["enrollment", courseId]`. `data` holds `None` when not enrolled.
    pub async fn course_enrollment(
        &self,
        course_id: Option<&str>,
    ) -> QueryResult<Option<Enrollment>> {
        let Some(course_id) = required(course_id) else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::enrollment(course_id),
            self.api().course_enrollment(course_id),
        )
        .await
    }

    pub async fn enroll(&self, course_id: &str) -> Option<Enrollment> {
        let mutation = Mutation::Enroll {
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require(course_id, "course") {
            return self.reject(&mutation, &reason);
        }
        let payload = CreateEnrollment {
            course_id: course_id.to_string(),
        };
        self.mutate(mutation, self.api().enroll(&payload)).await
    }

    pub async fn cancel_enrollment(
        &self,
        enrollment_id: &str,
        course_id: &str,
    ) -> Option<Enrollment> {
        let mutation = Mutation::CancelEnrollment {
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require_all(&[(enrollment_id, "enrollment"), (course_id, "course")]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().cancel_enrollment(enrollment_id))
            .await
    }

    pub async fn confirm_payment(
        &self,
        enrollment_id: &str,
        course_id: &str,
        payload: &PaymentConfirmation,
    ) -> Option<Enrollment> {
        let mutation = Mutation::ConfirmPayment {
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require_all(&[(enrollment_id, "enrollment"), (course_id, "course")]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(
            mutation,
            self.api().confirm_payment(enrollment_id, payload),
        )
        .await
    }
}
