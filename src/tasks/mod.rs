//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the cache.
//!
//! # Tasks
//! - Reaper: removes cache entries older than the TTL once per TTL period

mod reaper;

pub use reaper::{spawn_reaper, MIN_SWEEP_INTERVAL};
