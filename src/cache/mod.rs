//! Cache Module
//!
//! Provides bounded in-memory caching with TTL expiration and FIFO eviction.

mod entry;
mod fifo;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, Ttl};
pub use store::CacheStore;
