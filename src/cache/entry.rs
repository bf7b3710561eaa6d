//! Cache Entry Module
//!
//! Defines a single cached response payload together with its insertion time.

use tokio::time::{Duration, Instant};

// == Cache Entry ==
/// A stored payload and the instant it was inserted.
///
/// The payload is opaque to the cache; it is never parsed or inspected.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes (may be empty)
    pub payload: Vec<u8>,
    /// Monotonic insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live.
    /// Only an age strictly greater than `ttl` counts as expired.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
