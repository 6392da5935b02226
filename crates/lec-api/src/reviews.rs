//! `/reviews` endpoints.

use lec_core::entities::{Review, ReviewCheck};
use lec_core::payloads::{CreateReview, ModerateReview, UpdateReview};
use lec_core::responses::{Acknowledgement, ApiResponse};

use crate::{ApiClient, error::ApiError, http::segment};

// All review endpoints fail with `ApiError` on transport, status, or decode
// failure; nothing is retried or translated.
impl ApiClient {
    /// `GET /reviews`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_reviews(&self) -> Result<ApiResponse<Vec<Review>>, ApiError> {
        self.get("/reviews").await
    }

    /// `GET /reviews/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_review(&self, id: &str) -> Result<ApiResponse<Review>, ApiError> {
        self.get(&format!("/reviews/{}", segment(id))).await
    }

    /// `POST /reviews`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_review(
        &self,
        payload: &CreateReview,
    ) -> Result<ApiResponse<Review>, ApiError> {
        self.post("/reviews", payload).await
    }

    /// `PUT /reviews/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_review(
        &self,
        id: &str,
        payload: &UpdateReview,
    ) -> Result<ApiResponse<Review>, ApiError> {
        self.put(&format!("/reviews/{}", segment(id)), payload).await
    }

    /// `DELETE /reviews/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_review(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/reviews/{}", segment(id))).await
    }

    /// `PATCH /reviews/{id}/moderate`: approve or reject (admin only).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn moderate_review(
        &self,
        id: &str,
        payload: &ModerateReview,
    ) -> Result<ApiResponse<Review>, ApiError> {
        self.patch(&format!("/reviews/{}/moderate", segment(id)), Some(payload))
            .await
    }

    /// `GET /reviews/check/{userId}/{courseId}`: has this user reviewed the course?
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn check_user_review(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<ApiResponse<ReviewCheck>, ApiError> {
        self.get(&format!(
            "/reviews/check/{}/{}",
            segment(user_id),
            segment(course_id)
        ))
        .await
    }

    /// `GET /reviews/course/{courseId}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn course_reviews(
        &self,
        course_id: &str,
    ) -> Result<ApiResponse<Vec<Review>>, ApiError> {
        self.get(&format!("/reviews/course/{}", segment(course_id)))
            .await
    }
}
