//! Cache Store Module
//!
//! The unsynchronized map behind [`Cache`](super::Cache). Every method here
//! assumes the caller already holds the cache lock.

use std::collections::HashMap;

use tokio::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to payload storage with a fixed time-to-live.
#[derive(Debug)]
pub struct CacheStore {
    /// Payloads keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Age past which the reaper removes an entry
    ttl: Duration,
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Inserts or overwrites the payload for `key`, stamping it with the
    /// current instant. Empty payloads are stored like any other.
    pub fn put(&mut self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), CacheEntry::new(payload.into()));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Presence alone decides the result: an entry older than the TTL is
    /// still returned until a sweep removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than the TTL as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Removes every entry older than the TTL right now.
    pub fn reap_expired(&mut self) -> usize {
        self.reap_expired_at(Instant::now())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
