//! Cache Module
//!
//! In-memory response cache keyed by request URL, with time-based reaping.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub(crate) use shared::lock_store;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default time-to-live for cached responses
pub const DEFAULT_TTL_SECS: u64 = 300;
