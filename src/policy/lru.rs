//! LRU (Least Recently Used) cache replacement policy.
//!
//! Every write and every successful read marks a key as most recently used;
//! when a new key arrives at capacity the least recently used one is
//! discarded.
//!
//! ## Architecture
//!
//! ```text
//!   store: BoundedStore<K, V>          recency: KeyOrder<K>
//!
//!     front (LRU, EVICT)                       back (MRU)
//!      ▼                                         ▼
//!     ["a"] ◄──► ["b"] ◄──► ["c"] ◄──► ["d"]
//!
//!   insert(new key)      → evict front if full, append at back
//!   insert(existing key) → overwrite, move to back
//!   get(hit)             → move to back
//!   get(miss)            → no change
//! ```
//!
//! ## Operations
//!
//! | Operation  | Time | Notes                              |
//! |------------|------|------------------------------------|
//! | `insert`   | O(1) | May evict the least recently used  |
//! | `get`      | O(1) | Refreshes recency on hit           |
//! | `peek`     | O(1) | Does not refresh recency           |
//! | `peek_lru` | O(1) | Next eviction candidate            |
//!
//! ## Example
//!
//! ```
//! use evictkit::policy::lru::LruCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = LruCache::with_capacity(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");       // "b" is now least recently used
//! cache.insert("c", 3);  // evicts "b"
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```

use std::hash::Hash;

use crate::policy::ordered::{OrderRule, OrderedCache, VictimEnd};

/// Recency order, evicting the stale end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lru;

impl OrderRule for Lru {
    const NAME: &'static str = "lru";
    const TYPE_NAME: &'static str = "LruCache";
    const MOVE_ON_OVERWRITE: bool = true;
    const MOVE_ON_HIT: bool = true;
    const VICTIM: VictimEnd = VictimEnd::Front;
}

/// Bounded cache that evicts the least recently used key.
pub type LruCache<K, V> = OrderedCache<K, V, Lru>;

impl<K, V> LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Least recently used entry, without refreshing it.
    ///
    /// ```
    /// use evictkit::policy::lru::LruCache;
    /// use evictkit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::with_capacity(3);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.peek_lru(), Some((&2, &"two")));
    /// ```
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.peek_victim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CAPACITY;
    use crate::notify::EvictionRecorder;
    use crate::traits::{CoreCache, ReadOnlyCache};

    mod basic_operations {
        use super::*;

        #[test]
        fn default_matches_new() {
            let cache: LruCache<u8, u8> = LruCache::default();
            assert_eq!(cache.capacity(), Some(DEFAULT_CAPACITY));
        }

        #[test]
        fn peek_does_not_refresh() {
            let mut cache = LruCache::with_capacity(2);
            cache.insert("a", 1);
            cache.insert("b", 2);
            assert_eq!(cache.peek(&"a"), Some(&1));
            cache.insert("c", 3);

            assert!(!cache.contains(&"a"));
            cache.check_invariants().unwrap();
        }

        #[test]
        fn get_miss_changes_nothing() {
            let mut cache = LruCache::with_capacity(2);
            cache.insert("a", 1);
            cache.insert("b", 2);
            assert_eq!(cache.get(&"zzz"), None);
            assert_eq!(cache.keys(), vec![&"a", &"b"]);
        }
    }

    mod lru_behavior {
        use super::*;

        #[test]
        fn get_protects_entry_from_eviction() {
            let recorder = EvictionRecorder::new();
            let mut cache = LruCache::with_capacity(2).with_listener(recorder.clone());
            cache.insert("A", 1);
            cache.insert("B", 2);
            cache.get(&"A");
            cache.insert("C", 3);

            assert_eq!(recorder.evicted(), vec!["B"]);
            assert_eq!(cache.keys(), vec![&"A", &"C"]);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn overwrite_refreshes_recency() {
            let recorder = EvictionRecorder::new();
            let mut cache = LruCache::with_capacity(2).with_listener(recorder.clone());
            cache.insert("A", 1);
            cache.insert("B", 2);
            cache.insert("A", 11);
            assert!(recorder.is_empty());

            cache.insert("C", 3);
            assert_eq!(recorder.evicted(), vec!["B"]);
            assert_eq!(cache.peek(&"A"), Some(&11));
        }

        #[test]
        fn repeated_gets_are_idempotent() {
            let mut cache = LruCache::with_capacity(3);
            cache.insert(1, "x");
            cache.insert(2, "y");
            for _ in 0..5 {
                assert_eq!(cache.get(&1), Some(&"x"));
            }
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.keys(), vec![&2, &1]);
        }

        #[test]
        fn peek_lru_tracks_front() {
            let mut cache = LruCache::with_capacity(3);
            assert_eq!(cache.peek_lru(), None);
            cache.insert(1, 1);
            cache.insert(2, 2);
            assert_eq!(cache.peek_lru(), Some((&1, &1)));
            cache.get(&1);
            assert_eq!(cache.peek_lru(), Some((&2, &2)));
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn snapshot_counts_operations() {
            let mut cache = LruCache::with_capacity(1);
            cache.insert(1, 1);
            cache.insert(1, 2);
            cache.insert(2, 2);
            cache.get(&2);
            cache.get(&1);
            cache.put(None, Some(3));

            let snap = cache.metrics_snapshot();
            assert_eq!(snap.insert_new, 2);
            assert_eq!(snap.insert_updates, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.rejected_puts, 1);
            assert_eq!(snap.cache_len, 1);
            assert_eq!(snap.capacity, 1);
        }
    }
}
