use lec_core::entities::User;

use crate::{QueryClient, QueryKey, QueryResult};

impl QueryClient {
    /// `["currentUser"]`
    pub async fn current_user(&self) -> QueryResult<User> {
        self.query(QueryKey::current_user(), self.api().current_user())
            .await
    }
}
