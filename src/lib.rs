//! local_cache - A bounded in-process key-value cache
//!
//! Provides TTL expiration (lazy on read, eager via a background sweeper)
//! and FIFO eviction under capacity pressure.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheStore, Ttl};
pub use config::CacheConfig;
pub use engine::LocalCache;
pub use error::ConfigError;
pub use tasks::spawn_sweeper;
