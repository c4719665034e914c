//! Cache Store Module
//!
//! The single-threaded cache core: HashMap storage with FIFO eviction under
//! capacity pressure and TTL expiration. Concurrency is layered on top by
//! the engine, which wraps the store in a lock.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{fifo, CacheEntry, Ttl};

// == Cache Store ==
/// Bounded key-value storage with FIFO eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL applied to writes that use `Ttl::Default`
    default_ttl: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and default TTL.
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a key-value pair under the given TTL policy.
    ///
    /// If the key already exists the entry is rewritten in place: new value,
    /// new TTL, refreshed write timestamp. Updates never trigger eviction.
    ///
    /// If the key is new and the store is at capacity, exactly one FIFO
    /// victim (oldest last-write timestamp) is evicted before the insert, so
    /// the size bound holds as a postcondition of every `set`.
    pub fn set(&mut self, key: String, value: V, ttl: Ttl) {
        let resolved = self.resolve_ttl(ttl);

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.rewrite(value, resolved);
            return;
        }

        // Degenerate configuration: a zero-capacity store holds nothing.
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() >= self.capacity {
            // Selection scans the current entries; a victim that is somehow
            // already gone makes remove() a silent no-op.
            if let Some(victim) = fifo::select_victim(&self.entries) {
                self.entries.remove(&victim);
                debug!(key = %victim, "capacity reached, evicted oldest entry");
            }
        }

        self.entries.insert(key, CacheEntry::new(value, resolved));
    }

    // == Get ==
    /// Looks up a key, lazily reclaiming it if stale.
    ///
    /// Absent keys and expired entries both read as `None`; an expired entry
    /// is deleted during the read so callers never observe a stale value,
    /// even between sweeper passes.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return None,
        };

        if expired {
            self.entries.remove(key);
            debug!(key, "removed stale entry on read");
            return None;
        }

        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Unconditionally deletes the entry for `key`.
    ///
    /// Returns whether an entry was actually present; removing a missing key
    /// is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Deletes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Sweep Expired ==
    /// Removes all currently-stale entries (the eager expiration path).
    ///
    /// Snapshots the stale key set first, then deletes; entries with no TTL
    /// are exempt. Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let stale_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = stale_keys.len();

        for key in stale_keys {
            self.entries.remove(&key);
        }

        count
    }

    // == TTL Remaining ==
    /// Remaining TTL for a key in milliseconds: `None` if the key is absent,
    /// already stale, or never expires.
    ///
    /// A stale entry reads as absent here just as it does through `get`,
    /// whether or not lazy reclamation has deleted it yet.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(CacheEntry::ttl_remaining_ms)
    }

    // == Accessors ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the TTL applied to `Ttl::Default` writes.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Resolve TTL ==
    fn resolve_ttl(&self, ttl: Ttl) -> Option<Duration> {
        match ttl {
            Ttl::Default => Some(self.default_ttl),
            Ttl::After(duration) => Some(duration),
            Ttl::Never => None,
        }
    }
}
