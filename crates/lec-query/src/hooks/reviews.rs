use lec_core::entities::{Review, ReviewCheck};
use lec_core::payloads::{CreateReview, ModerateReview, UpdateReview};

use super::{require_all, required};
use crate::{Mutation, QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["reviews"]`
    pub async fn reviews(&self) -> QueryResult<Vec<Review>> {
        self.query(QueryKey::reviews(), self.api().list_reviews())
            .await
    }

    /// `["review", id]`
    pub async fn review(&self, id: Option<&str>) -> QueryResult<Review> {
        let Some(id) = required(id) else {
            return QueryResult::disabled();
        };
        self.query(QueryKey::review(id), self.api().get_review(id))
            .await
    }

    /// `["courseReviews", courseId]`
    pub async fn course_reviews(&self, course_id: Option<&str>) -> QueryResult<Vec<Review>> {
        let Some(course_id) = required(course_id) else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::course_reviews(course_id),
            self.api().course_reviews(course_id),
        )
        .await
    }

    /// `["checkUserReview", courseId, userId]`, for the signed-in user.
    /// Disabled when signed out.
    pub async fn check_user_review(&self, course_id: Option<&str>) -> QueryResult<ReviewCheck> {
        let user_id = self.user_id().await;
        let (Some(course_id), Some(user_id)) = (required(course_id), required(user_id.as_deref()))
        else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::check_user_review(course_id, user_id),
            self.api().check_user_review(user_id, course_id),
        )
        .await
    }

    pub async fn add_review(&self, payload: &CreateReview) -> Option<Review> {
        let mutation = Mutation::AddReview {
            course_id: payload.course_id.clone(),
            user_id: self.user_id().await,
        };
        if let Err(error) = payload.validate() {
            return self.reject(&mutation, &error);
        }
        self.mutate(mutation, self.api().create_review(payload))
            .await
    }

    pub async fn update_review(
        &self,
        review_id: &str,
        course_id: &str,
        payload: &UpdateReview,
    ) -> Option<Review> {
        let mutation = Mutation::UpdateReview {
            review_id: review_id.to_string(),
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require_all(&[(review_id, "review"), (course_id, "course")]) {
            return self.reject(&mutation, &reason);
        }
        if let Err(error) = payload.validate() {
            return self.reject(&mutation, &error);
        }
        self.mutate(mutation, self.api().update_review(review_id, payload))
            .await
    }

    /// Returns whether the review was deleted.
    pub async fn delete_review(&self, review_id: &str, course_id: &str) -> bool {
        let mutation = Mutation::DeleteReview {
            review_id: review_id.to_string(),
            course_id: course_id.to_string(),
            user_id: self.user_id().await,
        };
        if let Err(reason) = require_all(&[(review_id, "review"), (course_id, "course")]) {
            self.reject::<()>(&mutation, &reason);
            return false;
        }
        self.mutate(mutation, self.api().delete_review(review_id))
            .await
            .is_some()
    }

    pub async fn moderate_review(
        &self,
        review_id: &str,
        course_id: &str,
        payload: &ModerateReview,
    ) -> Option<Review> {
        let mutation = Mutation::ModerateReview {
            review_id: review_id.to_string(),
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require_all(&[(review_id, "review"), (course_id, "course")]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().moderate_review(review_id, payload))
            .await
    }
}
