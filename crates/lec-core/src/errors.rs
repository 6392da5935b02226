//! Validation errors for domain input.
//!
//! Transport and auth errors live in their own crates (`ApiError` in
//! `lec-api`, `AuthError` in `lec-auth`). The CLI converges everything into
//! `anyhow`.

use thiserror::Error;

/// Errors raised while checking input before it is sent anywhere.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation before it was sent anywhere.
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ReviewStatus;
    use crate::payloads::CreateReview;

    #[test]
    fn input_errors_surface_as_validation() {
        let review = CreateReview {
            course_id: "c1".into(),
            rating: 0,
            comment: None,
        };
        let CoreError::Validation(detail) = review.validate().unwrap_err();
        assert!(detail.contains("rating"));

        let err = "maybe".parse::<ReviewStatus>().unwrap_err();
        assert!(err.to_string().starts_with("Validation error: "));
    }
}
