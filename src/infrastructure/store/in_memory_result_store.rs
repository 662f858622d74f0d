use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::task::JoinHandle;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::{JobKey, JobResult};

#[derive(Debug, Clone)]
struct StoredResult {
    result: JobResult,
    recorded_at: Instant,
}

/// Process-local result store. Entries optionally expire `ttl` after being recorded.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    entries: DashMap<JobKey, StoredResult>,
    ttl: Option<Duration>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Removes expired entries and returns how many were dropped.
    pub fn evict_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = Instant::now();
        let before = self.entries.len();
        self.entries
            .retain(|_, stored| !self.is_expired(stored, now));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, stored: &StoredResult, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.saturating_duration_since(stored.recorded_at) >= ttl)
    }
}

impl ResultStore for InMemoryResultStore {
    fn put(&self, key: JobKey, result: JobResult) -> Result<(), ResultStoreError> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Err(ResultStoreError::AlreadyCompleted(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(StoredResult {
                    result,
                    recorded_at: Instant::now(),
                });
                Ok(())
            }
        }
    }

    fn get(&self, key: &JobKey) -> Option<JobResult> {
        self.entries
            .get(key)
            .filter(|stored| !self.is_expired(stored, Instant::now()))
            .map(|stored| stored.result.clone())
    }
}

/// Periodically drops expired results. Does nothing useful when the store has no TTL.
pub fn spawn_eviction_task(store: Arc<InMemoryResultStore>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = store.evict_expired();
            if evicted > 0 {
                tracing::debug!(evicted, remaining = store.len(), "Evicted expired job results");
            }
        }
    })
}
