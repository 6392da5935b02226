use lec_core::entities::{Module, ModuleProgress};
use lec_core::payloads::{CreateModule, UpdateModule};

use super::{require, require_all, required};
use crate::{Mutation, QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["courseModules", courseId]`
    pub async fn course_modules(&self, course_id: Option<&str>) -> QueryResult<Vec<Module>> {
        let Some(course_id) = required(course_id) else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::course_modules(course_id),
            self.api().course_modules(course_id),
        )
        .await
    }

    /// `["module", id]`
    pub async fn module(&self, id: Option<&str>) -> QueryResult<Module> {
        let Some(id) = required(id) else {
            return QueryResult::disabled();
        };
        self.query(QueryKey::module(id), self.api().get_module(id))
            .await
    }

    /// `["moduleProgress", courseId]`
    pub async fn module_progress(
        &self,
        course_id: Option<&str>,
    ) -> QueryResult<Vec<ModuleProgress>> {
        let Some(course_id) = required(course_id) else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::module_progress(course_id),
            self.api().module_progress(course_id),
        )
        .await
    }

    pub async fn create_module(&self, payload: &CreateModule) -> Option<Module> {
        let mutation = Mutation::CreateModule {
            course_id: payload.course_id.clone(),
        };
        if let Err(reason) = require(&payload.course_id, "course") {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().create_module(payload))
            .await
    }

    pub async fn update_module(
        &self,
        module_id: &str,
        course_id: &str,
        payload: &UpdateModule,
    ) -> Option<Module> {
        let mutation = Mutation::UpdateModule {
            course_id: course_id.to_string(),
            module_id: module_id.to_string(),
        };
        if let Err(reason) = require_all(&[(module_id, "module"), (course_id, "course")]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().update_module(module_id, payload))
            .await
    }

    /// Returns whether the module was deleted.
    pub async fn delete_module(&self, module_id: &str, course_id: &str) -> bool {
        let mutation = Mutation::DeleteModule {
            course_id: course_id.to_string(),
            module_id: module_id.to_string(),
        };
        if let Err(reason) = require_all(&[(module_id, "module"), (course_id, "course")]) {
            self.reject::<()>(&mutation, &reason);
            return false;
        }
        self.mutate(mutation, self.api().delete_module(module_id))
            .await
            .is_some()
    }

    pub async fn complete_module(&self, course_id: &str, module_id: &str) -> Option<ModuleProgress> {
        let mutation = Mutation::CompleteModule {
            course_id: course_id.to_string(),
            module_id: module_id.to_string(),
        };
        if let Err(reason) = require_all(&[(module_id, "module"), (course_id, "course")]) {
            return self.reject(&mutation, &reason);
        }
        self.mutate(mutation, self.api().complete_module(module_id))
            .await
    }
}
