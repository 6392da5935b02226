//! `/announcements` endpoints.

use lec_core::entities::Announcement;
use lec_core::payloads::{CreateAnnouncement, UpdateAnnouncement};
use lec_core::responses::{Acknowledgement, ApiResponse};

use crate::{ApiClient, error::ApiError, http::segment};

impl ApiClient {
    /// `GET /announcements`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_announcements(&self) -> Result<ApiResponse<Vec<Announcement>>, ApiError> {
        self.get("/announcements").await
    }

    /// `GET /announcements/course/{courseId}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn course_announcements(
        &self,
        course_id: &str,
    ) -> Result<ApiResponse<Vec<Announcement>>, ApiError> {
        self.get(&format!("/announcements/course/{}", segment(course_id)))
            .await
    }

    /// `GET /announcements/global`: announcements not tied to a course.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn global_announcements(
        &self,
    ) -> Result<ApiResponse<Vec<Announcement>>, ApiError> {
        self.get("/announcements/global").await
    }

    /// `GET /announcements/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_announcement(&self, id: &str) -> Result<ApiResponse<Announcement>, ApiError> {
        self.get(&format!("/announcements/{}", segment(id))).await
    }

    /// `POST /announcements`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_announcement(
        &self,
        payload: &CreateAnnouncement,
    ) -> Result<ApiResponse<Announcement>, ApiError> {
        self.post("/announcements", payload).await
    }

    /// `PUT /announcements/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_announcement(
        &self,
        id: &str,
        payload: &UpdateAnnouncement,
    ) -> Result<ApiResponse<Announcement>, ApiError> {
        self.put(&format!("/announcements/{}", segment(id)), payload)
            .await
    }

    /// `DELETE /announcements/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_announcement(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/announcements/{}", segment(id))).await
    }
}
