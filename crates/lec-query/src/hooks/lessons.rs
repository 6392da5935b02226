use lec_core::entities::Lesson;
use lec_core::payloads::{CreateLesson, UpdateLesson};

use super::{require, require_all, required};
use crate::{Mutation, QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["moduleLessons", moduleId]`
    pub async fn module_lessons(&self, module_id: Option<&str>) -> QueryResult<Vec<Lesson>> {
        let Some(module_id) = required(module_id) else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::module_lessons(module_id),
            self.api().module_lessons(module_id),
        )
        .await
    }

    /// `["lesson", id]`
    pub async fn lesson(&self, id: Option<&str>) -> QueryResult<Lesson> {
        let Some(id) = required(id) else {
            return QueryResult::disabled();
        };
        self.query(QueryKey::lesson(id), self.api().get_lesson(id))
            .await
    }

    pub async fn create_lesson(&self, payload: &CreateLesson) -> Option<Lesson> {
        let mutation = Mutation::CreateLesson {
            module_id: payload.module_id.clone(),
        };
        if let Err(reason) = require(&payload.module_id, "module") {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().create_lesson(payload))
            .await
    }

    pub async fn update_lesson(
        &self,
        lesson_id: &str,
        module_id: &str,
        payload: &UpdateLesson,
    ) -> Option<Lesson> {
        let mutation = Mutation::UpdateLesson {
            module_id: module_id.to_string(),
            lesson_id: lesson_id.to_string(),
        };
        if let Err(reason) = require_all(&[(lesson_id, "lesson"), (module_id, "module")]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().update_lesson(lesson_id, payload))
            .await
    }

    /// Returns whether the lesson was deleted.
    pub async fn delete_lesson(&self, lesson_id: &str, module_id: &str) -> bool {
        let mutation = Mutation::DeleteLesson {
            module_id: module_id.to_string(),
            lesson_id: lesson_id.to_string(),
        };
        if let Err(reason) = require_all(&[(lesson_id, "lesson"), (module_id, "module")]) {
            self.reject::<()>(&mutation, &reason);
            return false;
        }
        self.mutate(mutation, self.api().delete_lesson(lesson_id))
            .await
            .is_some()
    }

    pub async fn complete_lesson(
        &self,
        course_id: &str,
        module_id: &str,
        lesson_id: &str,
    ) -> Option<Lesson> {
        let mutation = Mutation::CompleteLesson {
            course_id: course_id.to_string(),
            module_id: module_id.to_string(),
            lesson_id: lesson_id.to_string(),
        };
        if let Err(reason) = require_all(&[
            (lesson_id, "lesson"),
            (module_id, "module"),
            (course_id, "course"),
        ]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().complete_lesson(lesson_id))
            .await
    }
}
