//! Process-wide keyed store of server snapshots.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lec_config::CacheConfig;

use crate::key::QueryKey;

type Snapshot = Arc<dyn Any + Send + Sync>;

#[derive(Debug)]
struct Entry {
    value: Option<Snapshot>,
    updated_at: Option<Instant>,
    last_used: Instant,
    stale: bool,
    generation: u64,
    invalidations: u64,
    in_flight: usize,
}

impl Entry {
    fn new(now: Instant) -> Self {
        Self {
            value: None,
            updated_at: None,
            last_used: now,
            stale: false,
            generation: 0,
            invalidations: 0,
            in_flight: 0,
        }
    }
}

/// Ticket handed out by [`QueryCache::begin_fetch`]. Only the newest ticket
/// for a key may write its result, and a result from a fetch that started
/// before an invalidation is stored as already stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    invalidations: u64,
}

/// Keyed cache of immutable snapshots.
///
/// Cloning yields another handle to the same store. The lock is only taken
/// inside these synchronous methods, never across an `.await`.
#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
    stale_time: Duration,
    gc_time: Duration,
}

impl QueryCache {
    #[must_use]
    pub fn new(stale_time: Duration, gc_time: Duration) -> Self {
        Self {
            entries: Arc::default(),
            stale_time,
            gc_time,
        }
    }

    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.stale_time(), config.gc_time())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached snapshot under `key`, if present and of type `T`.
    #[must_use]
    pub fn get<T: Any + Send + Sync>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let mut entries = self.lock();
        let entry = entries.get_mut(key)?;
        entry.last_used = Instant::now();
        entry.value.clone()?.downcast::<T>().ok()
    }

    /// Has a value that is neither invalidated nor older than the stale time.
    #[must_use]
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        self.lock().get(key).is_some_and(|entry| {
            entry.value.is_some()
                && !entry.stale
                && entry
                    .updated_at
                    .is_some_and(|at| at.elapsed() < self.stale_time)
        })
    }

    /// Inverse of [`is_fresh`](Self::is_fresh): the next read refetches.
    #[must_use]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        !self.is_fresh(key)
    }

    /// Whether a fetch for `key` is outstanding.
    #[must_use]
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.lock().get(key).is_some_and(|entry| entry.in_flight > 0)
    }

    /// Register a new fetch for `key`, superseding any earlier one.
    pub fn begin_fetch(&self, key: &QueryKey) -> FetchTicket {
        let now = Instant::now();
        let mut entries = self.lock();
        let entry = entries.entry(key.clone()).or_insert_with(|| Entry::new(now));
        entry.generation += 1;
        entry.in_flight += 1;
        entry.last_used = now;
        FetchTicket {
            generation: entry.generation,
            invalidations: entry.invalidations,
        }
    }

    /// Complete a fetch. `value` is written only if `ticket` is still the
    /// newest for `key`; returns whether it was. A `None` value (failed
    /// fetch) leaves the previous snapshot in place. If `key` was
    /// invalidated after the ticket was issued the value is kept but stays
    /// stale, since the server may have changed after it was read.
    pub fn finish_fetch<T: Any + Send + Sync>(
        &self,
        key: &QueryKey,
        ticket: FetchTicket,
        value: Option<Arc<T>>,
    ) -> bool {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return false;
        };
        entry.in_flight = entry.in_flight.saturating_sub(1);
        if ticket.generation != entry.generation {
            tracing::debug!(%key, "discarding superseded fetch result");
            return false;
        }
        if let Some(value) = value {
            let now = Instant::now();
            entry.value = Some(value);
            entry.updated_at = Some(now);
            entry.last_used = now;
            entry.stale = ticket.invalidations != entry.invalidations;
        }
        true
    }

    /// Release a fetch whose future was dropped before completing.
    pub fn abandon_fetch(&self, key: &QueryKey) {
        if let Some(entry) = self.lock().get_mut(key) {
            entry.in_flight = entry.in_flight.saturating_sub(1);
        }
    }

    /// Store a snapshot directly, as if freshly fetched.
    pub fn set<T: Any + Send + Sync>(&self, key: QueryKey, value: Arc<T>) {
        let now = Instant::now();
        let mut entries = self.lock();
        let entry = entries.entry(key).or_insert_with(|| Entry::new(now));
        entry.value = Some(value);
        entry.updated_at = Some(now);
        entry.last_used = now;
        entry.stale = false;
    }

    /// Mark every key starting with `prefix` stale. Snapshots stay readable
    /// until the refetch lands. Returns how many entries were marked.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut marked = 0;
        for (key, entry) in self.lock().iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                entry.invalidations += 1;
                marked += 1;
            }
        }
        if marked > 0 {
            tracing::debug!(%prefix, marked, "invalidated cache entries");
        }
        marked
    }

    /// Drop entries unused for longer than the GC time with no fetch in
    /// flight. Returns how many were dropped.
    pub fn collect_garbage(&self) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.in_flight > 0 || entry.last_used.elapsed() <= self.gc_time);
        before - entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All keys currently held, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<QueryKey> {
        let mut keys: Vec<_> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::Mutation;

    fn cache() -> QueryCache {
        QueryCache::new(Duration::from_secs(60), Duration::from_secs(300))
    }

    #[test]
    fn fresh_after_set_stale_after_invalidate() {
        let cache = cache();
        let key = QueryKey::course("c1");
        assert!(cache.is_stale(&key));

        cache.set(key.clone(), Arc::new(7_u32));
        assert!(cache.is_fresh(&key));
        assert_eq!(cache.get::<u32>(&key).as_deref(), Some(&7));

        assert_eq!(cache.invalidate(&QueryKey::new(["course"])), 1);
        assert!(cache.is_stale(&key));
        assert_eq!(
            cache.get::<u32>(&key).as_deref(),
            Some(&7),
            "stale data stays readable"
        );
    }

    #[test]
    fn zero_stale_time_is_never_fresh() {
        let cache = QueryCache::new(Duration::ZERO, Duration::from_secs(300));
        let key = QueryKey::reviews();
        cache.set(key.clone(), Arc::new("x".to_string()));
        assert!(cache.is_stale(&key));
    }

    #[test]
    fn wrong_type_reads_as_missing() {
        let cache = cache();
        cache.set(QueryKey::reviews(), Arc::new(1_u8));
        assert!(cache.get::<String>(&QueryKey::reviews()).is_none());
    }

    #[test]
    fn newer_fetch_supersedes_older() {
        let cache = cache();
        let key = QueryKey::course("c1");

        let first = cache.begin_fetch(&key);
        let second = cache.begin_fetch(&key);
        assert!(cache.is_fetching(&key));

        assert!(cache.finish_fetch(&key, second, Some(Arc::new("new"))));
        assert!(!cache.finish_fetch(&key, first, Some(Arc::new("old"))));

        assert!(!cache.is_fetching(&key));
        assert_eq!(cache.get::<&str>(&key).as_deref(), Some(&"new"));
    }

    #[test]
    fn failed_fetch_keeps_previous_snapshot() {
        let cache = cache();
        let key = QueryKey::lesson("l1");
        cache.set(key.clone(), Arc::new(1_i32));
        cache.invalidate(&key);

        let ticket = cache.begin_fetch(&key);
        assert!(cache.finish_fetch::<i32>(&key, ticket, None));
        assert_eq!(cache.get::<i32>(&key).as_deref(), Some(&1));
        assert!(cache.is_stale(&key));
    }

    #[test]
    fn fetch_started_before_invalidation_lands_stale() {
        let cache = cache();
        let key = QueryKey::reviews();
        cache.set(key.clone(), Arc::new("v0"));
        cache.invalidate(&key);

        let ticket = cache.begin_fetch(&key);
        for written in (Mutation::AddReview {
            course_id: "c1".into(),
            user_id: Some("u1".into()),
        })
        .invalidates()
        {
            cache.invalidate(&written);
        }
        assert!(cache.finish_fetch(&key, ticket, Some(Arc::new("pre-write"))));

        assert_eq!(cache.get::<&str>(&key).as_deref(), Some(&"pre-write"));
        assert!(cache.is_stale(&key), "result read before the write must refetch");

        let ticket = cache.begin_fetch(&key);
        assert!(cache.finish_fetch(&key, ticket, Some(Arc::new("post-write"))));
        assert!(cache.is_fresh(&key));
    }

    #[test]
    fn garbage_collection_spares_in_flight_entries() {
        let cache = QueryCache::new(Duration::from_secs(60), Duration::ZERO);
        cache.set(QueryKey::reviews(), Arc::new(1_u8));
        let _ticket = cache.begin_fetch(&QueryKey::announcements());
        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.collect_garbage(), 1);
        assert_eq!(cache.keys(), vec![QueryKey::announcements()]);
    }

    #[test]
    fn clones_share_the_store() {
        let cache = cache();
        let other = cache.clone();
        other.set(QueryKey::current_user(), Arc::new(()));
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }
}
