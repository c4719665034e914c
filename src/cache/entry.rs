//! Cache Entry Module
//!
//! Defines the per-write TTL policy and the structure of individual cache
//! entries.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == TTL Policy ==
/// Expiration policy attached to a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Use the cache-wide default TTL.
    Default,
    /// Expire this long after the last write to the key.
    After(Duration),
    /// Never expire (the entry remains until removed, cleared, or evicted
    /// under capacity pressure).
    Never,
}

// == Cache Entry ==
/// A single cached record: the value plus the metadata the eviction and
/// expiration machinery needs.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Timestamp of the most recent write (Unix milliseconds). Refreshed on
    /// every update, so FIFO order is "oldest last-touched".
    pub written_at: u64,
    /// Resolved time-to-live; None = never expires
    pub ttl: Option<Duration>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry written "now" with an already-resolved TTL.
    pub fn new(value: V, ttl: Option<Duration>) -> Self {
        Self {
            value,
            written_at: current_timestamp_ms(),
            ttl,
        }
    }

    // == Rewrite ==
    /// Overwrites the value and TTL in place and refreshes the write
    /// timestamp, moving the entry to the back of the FIFO order.
    pub fn rewrite(&mut self, value: V, ttl: Option<Duration>) {
        self.value = value;
        self.ttl = ttl;
        self.written_at = current_timestamp_ms();
    }

    // == Is Expired ==
    /// Checks if the entry has gone stale.
    ///
    /// The staleness predicate is shared by the lazy (on-read) and eager
    /// (sweeper) paths: an entry with a TTL is stale once the time since its
    /// last write is greater than or equal to that TTL. An entry with no TTL
    /// is never stale.
    pub fn is_expired(&self) -> bool {
        match self.ttl {
            Some(ttl) => {
                let age = current_timestamp_ms().saturating_sub(self.written_at);
                age >= ttl.as_millis() as u64
            }
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None for a never-expiring
    /// entry.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired (TTL elapsed)
    /// - `Some(remaining_ms)` if the entry has TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.ttl.map(|ttl| {
            let age = current_timestamp_ms().saturating_sub(self.written_at);
            (ttl.as_millis() as u64).saturating_sub(age)
        })
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
