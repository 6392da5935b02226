use lec_core::entities::Announcement;
use lec_core::payloads::{CreateAnnouncement, UpdateAnnouncement};

use super::{require, required};
use crate::{Mutation, QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["announcements"]`
    pub async fn announcements(&self) -> QueryResult<Vec<Announcement>> {
        self.query(QueryKey::announcements(), self.api().list_announcements())
            .await
    }

    /// `["courseAnnouncements", courseId]`
    pub async fn course_announcements(
        &self,
        course_id: Option<&str>,
    ) -> QueryResult<Vec<Announcement>> {
        let Some(course_id) = required(course_id) else {
            return QueryResult::disabled();
        };
        self.query(
            QueryKey::course_announcements(course_id),
            self.api().course_announcements(course_id),
        )
        .await
    }

    /// `["globalAnnouncements"]`
    pub async fn global_announcements(&self) -> QueryResult<Vec<Announcement>> {
        self.query(
            QueryKey::global_announcements(),
            self.api().global_announcements(),
        )
        .await
    }

    /// `["announcement", id]`
    pub async fn announcement(&self, id: Option<&str>) -> QueryResult<Announcement> {
        let Some(id) = required(id) else {
            return QueryResult::disabled();
        };
        self.query(QueryKey::announcement(id), self.api().get_announcement(id))
            .await
    }

    pub async fn create_announcement(&self, payload: &CreateAnnouncement) -> Option<Announcement> {
        let mutation = Mutation::CreateAnnouncement {
            course_id: payload.course_id.clone(),
        };
        self.mutate(mutation, self.api().create_announcement(payload))
            .await
    }

    pub async fn update_announcement(
        &self,
        announcement_id: &str,
        course_id: Option<&str>,
        payload: &UpdateAnnouncement,
    ) -> Option<Announcement> {
        let mutation = Mutation::UpdateAnnouncement {
            announcement_id: announcement_id.to_string(),
            course_id: course_id.map(String::from),
        };
        if let Err(reason) = require(announcement_id, "announcement") {
            return self.reject(&mutation, &reason);
        }
        self.mutate(
            mutation,
            self.api().update_announcement(announcement_id, payload),
        )
        .await
    }

    /// Returns whether the announcement was deleted.
    pub async fn delete_announcement(&self, announcement_id: &str, course_id: Option<&str>) -> bool {
        let mutation = Mutation::DeleteAnnouncement {
            announcement_id: announcement_id.to_string(),
            course_id: course_id.map(String::from),
        };
        if let Err(reason) = require(announcement_id, "announcement") {
            self.reject::<()>(&mutation, &reason);
            return false;
        }
        self.mutate(mutation, self.api().delete_announcement(announcement_id))
            .await
            .is_some()
    }
}
