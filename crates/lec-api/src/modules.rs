//! `/modules` endpoints.

use lec_core::entities::{Module, ModuleProgress};
use lec_core::payloads::{CreateModule, UpdateModule};
use lec_core::responses::{Acknowledgement, ApiResponse};

use crate::{ApiClient, error::ApiError, http::segment};

impl ApiClient {
    /// `GET /modules/course/{courseId}`, ordered by position.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn course_modules(
        &self,
        course_id: &str,
    ) -> Result<ApiResponse<Vec<Module>>, ApiError> {
        self.get(&format!("/modules/course/{}", segment(course_id)))
            .await
    }

    /// `GET /modules/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_module(&self, id: &str) -> Result<ApiResponse<Module>, ApiError> {
        self.get(&format!("/modules/{}", segment(id))).await
    }

    /// `POST /modules`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_module(
        &self,
        payload: &CreateModule,
    ) -> Result<ApiResponse<Module>, ApiError> {
        self.post("/modules", payload).await
    }

    /// `PUT /modules/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_module(
        &self,
        id: &str,
        payload: &UpdateModule,
    ) -> Result<ApiResponse<Module>, ApiError> {
        self.put(&format!("/modules/{}", segment(id)), payload).await
    }

    /// `DELETE /modules/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_module(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/modules/{}", segment(id))).await
    }

    /// `GET /modules/course/{courseId}/progress`: per-module progress of the
    /// signed-in user.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn module_progress(
        &self,
        course_id: &str,
    ) -> Result<ApiResponse<Vec<ModuleProgress>>, ApiError> {
        self.get(&format!("/modules/course/{}/progress", segment(course_id)))
            .await
    }

    /// `POST /modules/{id}/complete`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn complete_module(&self, id: &str) -> Result<ApiResponse<ModuleProgress>, ApiError> {
        self.post_empty(&format!("/modules/{}/complete", segment(id)))
            .await
    }
}
