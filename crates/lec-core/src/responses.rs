//! The response envelope every course API endpoint returns.
//!
//! Resource functions in `lec-api` surface the envelope as-is (the HTTP
//! status line and headers are dropped). The query layer caches `data`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `{ "success": true, "message": "...", "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

const fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Drop the envelope and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Envelope for endpoints that answer with no meaningful payload
/// (deletes, cancellations). A missing or `null` `data` is accepted.
pub type Acknowledgement = ApiResponse<Option<serde_json::Value>>;
