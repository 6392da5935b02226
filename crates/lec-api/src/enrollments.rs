//! `/enrollments` endpoints.

use lec_core::entities::Enrollment;
use lec_core::payloads::{CreateEnrollment, PaymentConfirmation};
use lec_core::responses::ApiResponse;

use crate::{ApiClient, error::ApiError, http::segment};

impl ApiClient {
    /// `GET /enrollments/me`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn my_enrollments(&self) -> Result<ApiResponse<Vec<Enrollment>>, ApiError> {
        self.get("/enrollments/me").await
    }

    /// `GET /enrollments/course/{courseId}`: the signed-in user's enrollment
    /// in one course. `data` is `null` when the user is not enrolled.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn course_enrollment(
        &self,
        course_id: &str,
    ) -> Result<ApiResponse<Option<Enrollment>>, ApiError> {
        self.get(&format!("/enrollments/course/{}", segment(course_id)))
            .await
    }

    /// `POST /enrollments`. Paid courses come back as `PENDING_PAYMENT`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn enroll(
        &self,
        payload: &CreateEnrollment,
    ) -> Result<ApiResponse<Enrollment>, ApiError> {
        self.post("/enrollments", payload).await
    }

    /// `PATCH /enrollments/{id}/cancel`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn cancel_enrollment(&self, id: &str) -> Result<ApiResponse<Enrollment>, ApiError> {
        self.patch::<(), _>(&format!("/enrollments/{}/cancel", segment(id)), None)
            .await
    }

    /// `POST /enrollments/{id}/payment`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn confirm_payment(
        &self,
        id: &str,
        payload: &PaymentConfirmation,
    ) -> Result<ApiResponse<Enrollment>, ApiError> {
        self.post(&format!("/enrollments/{}/payment", segment(id)), payload)
            .await
    }
}
