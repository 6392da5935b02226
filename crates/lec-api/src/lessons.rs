//! `/lessons` endpoints.

use lec_core::entities::Lesson;
use lec_core::payloads::{CreateLesson, UpdateLesson};
use lec_core::responses::{Acknowledgement, ApiResponse};

use crate::{ApiClient, error::ApiError, http::segment};

impl ApiClient {
    /// `GET /lessons/module/{moduleId}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn module_lessons(
        &self,
        module_id: &str,
    ) -> Result<ApiResponse<Vec<Lesson>>, ApiError> {
        self.get(&format!("/lessons/module/{}", segment(module_id)))
            .await
    }

    /// `GET /lessons/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_lesson(&self, id: &str) -> Result<ApiResponse<Lesson>, ApiError> {
        self.get(&format!("/lessons/{}", segment(id))).await
    }

    /// `POST /lessons`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_lesson(
        &self,
        payload: &CreateLesson,
    ) -> Result<ApiResponse<Lesson>, ApiError> {
        self.post("/lessons", payload).await
    }

    /// `PUT /lessons/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_lesson(
        &self,
        id: &str,
        payload: &UpdateLesson,
    ) -> Result<ApiResponse<Lesson>, ApiError> {
        self.put(&format!("/lessons/{}", segment(id)), payload).await
    }

    /// `DELETE /lessons/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_lesson(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/lessons/{}", segment(id))).await
    }

    /// `POST /lessons/{id}/complete`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn complete_lesson(&self, id: &str) -> Result<ApiResponse<Lesson>, ApiError> {
        self.post_empty(&format!("/lessons/{}/complete", segment(id)))
            .await
    }
}
