//! Shared Cache Handle
//!
//! Wraps [`CacheStore`] in a single mutex and owns the reaper lifecycle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::Duration;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reaper;

// == Cache ==
/// Thread-safe TTL response cache.
///
/// Cloning is cheap; all clones share one store and one reaper. Reads and
/// writes take the same lock, so a `get` never observes a partial `put`.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// The reaper sweeps once per `ttl` and runs until every handle to this
    /// cache is dropped. Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        spawn_reaper(Arc::downgrade(&store), ttl);
        Self { store }
    }

    // == Put ==
    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        self.lock().put(key, payload);
    }

    // == Get ==
    /// Returns the payload for `key`, or `None` if it was never stored or has
    /// already been reaped.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key)
    }

    pub fn ttl(&self) -> Duration {
        self.lock().ttl()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    fn lock(&self) -> MutexGuard<'_, CacheStore> {
        lock_store(&self.store)
    }
}

/// Acquires the store lock.
///
/// Every mutation is a single map call, so the map is consistent even after a
/// holder panicked. A poisoned lock is recovered, not propagated.
pub(crate) fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
