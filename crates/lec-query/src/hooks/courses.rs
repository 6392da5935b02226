use lec_core::entities::Course;
use lec_core::payloads::{CourseFilter, CreateCourse, UpdateCourse};

use super::{require, required};
use crate::{Mutation, QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["courses", filter…]`
    pub async fn courses(&self, filter: &CourseFilter) -> QueryResult<Vec<Course>> {
        self.query(QueryKey::courses(filter), self.api().list_courses(filter))
            .await
    }

    /// `["course", id]`
    pub async fn course(&self, id: Option<&str>) -> QueryResult<Course> {
        let Some(id) = required(id) else {
            return QueryResult::disabled();
        };
        self.query(QueryKey::course(id), self.api().get_course(id))
            .await
    }

    /// `["instructorCourses"]`
    pub async fn instructor_courses(&self) -> QueryResult<Vec<Course>> {
        self.query(
            QueryKey::instructor_courses(),
            self.api().instructor_courses(),
        )
        .await
    }

    pub async fn create_course(&self, payload: &CreateCourse) -> Option<Course> {
        self.mutate(Mutation::CreateCourse, self.api().create_course(payload))
            .await
    }

    pub async fn update_course(&self, course_id: &str, payload: &UpdateCourse) -> Option<Course> {
        let mutation = Mutation::UpdateCourse {
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require(course_id, "course") {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().update_course(course_id, payload))
            .await
    }

    /// Returns whether the course was deleted.
    pub async fn delete_course(&self, course_id: &str) -> bool {
        let mutation = Mutation::DeleteCourse {
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require(course_id, "course") {
            self.reject::<()>(&mutation, &reason);
            return false;
        }
        self.mutate(mutation, self.api().delete_course(course_id))
            .await
            .is_some()
    }

    pub async fn publish_course(&self, course_id: &str) -> Option<Course> {
        let mutation = Mutation::PublishCourse {
            course_id: course_id.to_string(),
        };
        if let Err(reason) = require(course_id, "course") {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().publish_course(course_id))
            .await
    }
}
