use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CourseLevel, CourseStatus};

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    pub level: CourseLevel,
    pub status: CourseStatus,
    pub instructor_id: String,
    pub thumbnail_url: Option<String>,
    /// When set, a module unlocks only after the previous one is completed.
    #[serde(default)]
    pub sequential: bool,
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub enrollment_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Free courses skip the payment step on enrollment.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }
}
