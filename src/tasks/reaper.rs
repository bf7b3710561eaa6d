//! Cache Reaper Task
//!
//! Background task that periodically removes cache entries older than the TTL.

use std::sync::{Mutex, Weak};

use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{lock_store, CacheStore};

/// Shortest sweep period; `tokio::time::interval` rejects a zero period.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns the reaper for a cache store.
///
/// The task sleeps for one `ttl`, then takes the store lock, drops every entry
/// whose age is strictly greater than `ttl`, releases the lock and sleeps
/// again. It holds only a weak reference to the store and returns once the
/// store has been dropped.
///
/// # Arguments
/// * `store` - Weak reference to the shared cache store
/// * `ttl` - Entry lifetime, also used as the sweep period
///
/// # Returns
/// A JoinHandle for the spawned task. Callers normally detach it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(300))));
/// spawn_reaper(Arc::downgrade(&store), Duration::from_secs(300));
/// ```
pub fn spawn_reaper(store: Weak<Mutex<CacheStore>>, ttl: Duration) -> JoinHandle<()> {
    let period = ttl.max(MIN_SWEEP_INTERVAL);

    tokio::spawn(async move {
        info!("Starting cache reaper with a period of {:?}", period);

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(store) = store.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };

            // Guard is scoped to the sweep
            let (removed, remaining) = {
                let mut guard = lock_store(&store);
                let removed = guard.reap_expired();
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Cache sweep: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Cache sweep: no expired entries ({} cached)", remaining);
            }
        }
    })
}
