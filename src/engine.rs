//! Cache Engine Module
//!
//! The concurrent public surface of the cache. `LocalCache` owns the store
//! behind a lock, spawns exactly one background sweeper at construction, and
//! exposes the set/get/remove/clear contract, safe to call from any number
//! of tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheStore, Ttl};
use crate::config::CacheConfig;
use crate::tasks::spawn_sweeper;

// == Local Cache ==
/// A bounded, concurrency-safe in-process cache with TTL expiration and
/// FIFO eviction.
///
/// Construct one per process (or per cache domain) and share it by
/// reference or inside an `Arc`; there is no global instance. Every
/// compound operation — the exists/evict/insert sequence in `set`, the
/// expired-then-remove sequence in `get` — runs under a single engine-wide
/// write lock, so callers racing on the same key cannot lose updates or
/// double-evict.
///
/// Must be created from within a Tokio runtime, since construction spawns
/// the sweeper task.
#[derive(Debug)]
pub struct LocalCache<V> {
    /// Shared store; the engine is its only owner
    store: Arc<RwLock<CacheStore<V>>>,
    /// Handle to the one background sweeper for this engine
    sweeper: JoinHandle<()>,
    /// Configuration frozen at construction
    config: CacheConfig,
}

impl<V> LocalCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates the engine and starts its background sweeper.
    ///
    /// The sweeper is spawned exactly once, here; constructing the engine is
    /// the one-time-initialization point, so no check-then-create race
    /// exists anywhere.
    pub fn new(config: CacheConfig) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(
            config.capacity,
            config.default_ttl,
        )));
        let sweeper = spawn_sweeper(store.clone(), config.sweep_interval);

        Self {
            store,
            sweeper,
            config,
        }
    }

    // == Set ==
    /// Stores `value` under `key` with the engine-wide default TTL.
    ///
    /// Existing keys are updated in place (value, TTL, and write timestamp);
    /// a brand-new key inserted into a full cache first evicts the entry
    /// with the oldest last-write timestamp.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.store.write().await.set(key.into(), value, Ttl::Default);
    }

    /// Stores `value` under `key` with an explicit TTL policy.
    ///
    /// `Ttl::Never` makes the entry immune to expiration, lazy and eager
    /// alike; it can still be evicted under capacity pressure.
    pub async fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Ttl) {
        self.store.write().await.set(key.into(), value, ttl);
    }

    // == Get ==
    /// Returns the value for `key`, or `None` if absent or expired.
    ///
    /// An expired entry is removed during the read, so a stale value is
    /// never observable even between sweeper passes.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key).cloned()
    }

    // == Remove ==
    /// Deletes the entry for `key`; removing a missing key is a no-op.
    pub async fn remove(&self, key: &str) {
        self.store.write().await.remove(key);
    }

    // == Clear ==
    /// Deletes all entries.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    // == TTL Remaining ==
    /// Remaining TTL for `key` in milliseconds; `None` if the key is absent,
    /// already stale, or never expires.
    pub async fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.store.read().await.ttl_remaining_ms(key)
    }

    // == Size ==
    /// Current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Configuration Accessors ==
    /// Maximum number of entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// TTL applied to `set` calls without an explicit policy.
    pub fn default_ttl(&self) -> Duration {
        self.config.default_ttl
    }

    /// Interval between background sweeper passes.
    pub fn sweep_interval(&self) -> Duration {
        self.config.sweep_interval
    }

    // == Shutdown ==
    /// Stops the background sweeper.
    ///
    /// The data-path operations remain usable afterwards; only eager
    /// expiration stops. Also invoked on drop, so tests tear down
    /// deterministically without leaking the task.
    pub fn shutdown(&self) {
        self.sweeper.abort();
    }
}

impl<V> Drop for LocalCache<V> {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
