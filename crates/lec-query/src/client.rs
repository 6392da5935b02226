//! The query/mutation driver: cache lookups, fetches, invalidation,
//! notifications.

use std::future::Future;
use std::sync::Arc;

use lec_api::{ApiClient, ApiError};
use lec_core::responses::ApiResponse;

use crate::cache::{FetchTicket, QueryCache};
use crate::key::QueryKey;
use crate::mutation::Mutation;
use crate::notify::{Notification, Notifier};

/// Outcome of a keyed read.
///
/// Read failures are not swallowed: `error` carries the API error while
/// `data` keeps the last good snapshot, if there was one.
#[derive(Debug)]
pub struct QueryResult<T> {
    pub data: Option<Arc<T>>,
    pub error: Option<ApiError>,
    enabled: bool,
}

impl<T> QueryResult<T> {
    /// Result of a query whose required id was missing. No request was made.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            data: None,
            error: None,
            enabled: false,
        }
    }

    const fn ready(data: Arc<T>) -> Self {
        Self {
            data: Some(data),
            error: None,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        !self.enabled
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Error first, then data. A disabled query yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, if the last fetch failed.
    pub fn into_result(self) -> Result<Option<Arc<T>>, ApiError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

/// Releases the in-flight marker if a fetch future is dropped mid-await.
struct InFlight<'a> {
    cache: &'a QueryCache,
    key: &'a QueryKey,
    ticket: Option<FetchTicket>,
}

impl InFlight<'_> {
    fn finish<T: Send + Sync + 'static>(mut self, value: Option<Arc<T>>) {
        if let Some(ticket) = self.ticket.take() {
            self.cache.finish_fetch(self.key, ticket, value);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.ticket.is_some() {
            self.cache.abandon_fetch(self.key);
        }
    }
}

/// Runs keyed queries and declared mutations against one [`ApiClient`].
///
/// Cheap to clone; clones share the cache and notifier.
#[derive(Clone)]
pub struct QueryClient {
    api: ApiClient,
    cache: QueryCache,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("api", &self.api)
            .field("cache_entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl QueryClient {
    #[must_use]
    pub fn new(api: ApiClient, cache: QueryCache, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Signed-in user id, for per-user keys and invalidation sets.
    pub async fn user_id(&self) -> Option<String> {
        self.api.session().user_id().await
    }

    /// Serve `key` from cache if fresh, otherwise await `fetch` and cache its
    /// `data`. `fetch` is dropped unpolled on a cache hit.
    ///
    /// If another fetch for the same key starts while this one is in flight,
    /// only the newer one writes to the cache; this call still returns what
    /// its own request produced.
    pub async fn query<T, Fut>(&self, key: QueryKey, fetch: Fut) -> QueryResult<T>
    where
        T: Send + Sync + 'static,
        Fut: Future<Output = Result<ApiResponse<T>, ApiError>>,
    {
        if self.cache.is_fresh(&key)
            && let Some(data) = self.cache.get::<T>(&key)
        {
            return QueryResult::ready(data);
        }

        let in_flight = InFlight {
            cache: &self.cache,
            key: &key,
            ticket: Some(self.cache.begin_fetch(&key)),
        };
        match fetch.await {
            Ok(response) => {
                let data = Arc::new(response.into_data());
                in_flight.finish(Some(Arc::clone(&data)));
                QueryResult::ready(data)
            }
            Err(error) => {
                in_flight.finish::<T>(None);
                tracing::debug!(%key, %error, "query failed");
                QueryResult {
                    data: self.cache.get(&key),
                    error: Some(error),
                    enabled: true,
                }
            }
        }
    }

    /// Await `run`; on success mark every key in the mutation's invalidation
    /// set stale. Either way, raise a notification. Failures are logged and
    /// swallowed: the caller gets `None`.
    pub async fn mutate<T, Fut>(&self, mutation: Mutation, run: Fut) -> Option<T>
    where
        Fut: Future<Output = Result<ApiResponse<T>, ApiError>>,
    {
        match run.await {
            Ok(response) => {
                for key in mutation.invalidates() {
                    self.cache.invalidate(&key);
                }
                let title = response
                    .message
                    .clone()
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| mutation.success_title().to_string());
                tracing::info!(mutation = mutation.label(), "mutation succeeded");
                self.notifier.notify(Notification::success(title));
                Some(response.into_data())
            }
            Err(error) => self.reject(&mutation, &error),
        }
    }

    /// Fail a mutation without sending it (or after it failed).
    pub(crate) fn reject<T>(&self, mutation: &Mutation, reason: &dyn std::fmt::Display) -> Option<T> {
        let detail = reason.to_string();
        tracing::error!(mutation = mutation.label(), %detail, "mutation failed");
        self.notifier
            .notify(Notification::error(mutation.failure_title(), detail));
        None
    }

    /// Drop idle cache entries. Returns how many were dropped.
    pub fn collect_garbage(&self) -> usize {
        self.cache.collect_garbage()
    }
}
