//! `/courses` endpoints.

use lec_core::entities::Course;
use lec_core::payloads::{CourseFilter, CreateCourse, UpdateCourse};
use lec_core::responses::{Acknowledgement, ApiResponse};

use crate::{ApiClient, error::ApiError, http::segment};

impl ApiClient {
    /// `GET /courses`, filtered by `search`, `category`, and `level`.
    /// Blank filter values are left out of the query string.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_courses(
        &self,
        filter: &CourseFilter,
    ) -> Result<ApiResponse<Vec<Course>>, ApiError> {
        let query = filter
            .pairs()
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        if query.is_empty() {
            self.get("/courses").await
        } else {
            self.get(&format!("/courses?{query}")).await
        }
    }

    /// `GET /courses/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_course(&self, id: &str) -> Result<ApiResponse<Course>, ApiError> {
        self.get(&format!("/courses/{}", segment(id))).await
    }

    /// `GET /courses/instructor/me`: courses the signed-in instructor owns.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn instructor_courses(&self) -> Result<ApiResponse<Vec<Course>>, ApiError> {
        self.get("/courses/instructor/me").await
    }

    /// `POST /courses`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_course(
        &self,
        payload: &CreateCourse,
    ) -> Result<ApiResponse<Course>, ApiError> {
        self.post("/courses", payload).await
    }

    /// `PUT /courses/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_course(
        &self,
        id: &str,
        payload: &UpdateCourse,
    ) -> Result<ApiResponse<Course>, ApiError> {
        self.put(&format!("/courses/{}", segment(id)), payload).await
    }

    /// `DELETE /courses/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_course(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/courses/{}", segment(id))).await
    }

    /// `PATCH /courses/{id}/publish`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn publish_course(&self, id: &str) -> Result<ApiResponse<Course>, ApiError> {
        self.patch::<(), _>(&format!("/courses/{}/publish", segment(id)), None)
            .await
    }
}
