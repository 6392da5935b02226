//! `/users` endpoints.

use lec_core::entities::User;
use lec_core::responses::ApiResponse;

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /users/me`: the profile of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn current_user(&self) -> Result<ApiResponse<User>, ApiError> {
        self.get("/users/me").await
    }
}
