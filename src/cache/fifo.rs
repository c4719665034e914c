//! FIFO Victim Selection Module
//!
//! Picks the entry to evict when the cache is at capacity: the one with the
//! oldest last-write timestamp.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Select Victim ==
/// Returns the key of the entry with the minimum `written_at`, or None if
/// the map is empty.
///
/// Tie-break: among entries sharing the same timestamp, the
/// lexicographically smallest key wins. This keeps victim selection
/// deterministic even though `HashMap` iteration order is not.
///
/// The scan is O(n) over the current entries; capacity is small and bounded
/// by configuration.
pub(crate) fn select_victim<V>(entries: &HashMap<String, CacheEntry<V>>) -> Option<String> {
    entries
        .iter()
        .min_by(|(key_a, entry_a), (key_b, entry_b)| {
            entry_a
                .written_at
                .cmp(&entry_b.written_at)
                .then_with(|| key_a.cmp(key_b))
        })
        .map(|(key, _)| key.clone())
}
