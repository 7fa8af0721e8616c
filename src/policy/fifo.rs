//! FIFO (First In, First Out) cache replacement policy.
//!
//! Evicts the entry that arrived first, regardless of how often or how
//! recently it was read.
//!
//! ## Architecture
//!
//! ```text
//!   store: BoundedStore<K, V>           order: KeyOrder<K>
//!   ┌──────────┬─────────┐
//!   │   Key    │  Value  │              front (EVICT)          back (newest)
//!   ├──────────┼─────────┤               ▼                        ▼
//!   │  "a"     │   1     │              ["a"] ◄──► ["b"] ◄──► ["c"]
//!   │  "b"     │   2     │
//!   │  "c"     │   3     │
//!   └──────────┴─────────┘
//!
//!   insert(new key)      → evict front if full, append at back
//!   insert(existing key) → overwrite value, position unchanged
//!   get(key)             → value only, position unchanged
//! ```
//!
//! ## Operations
//!
//! | Operation     | Time | Notes                                   |
//! |---------------|------|-----------------------------------------|
//! | `insert`      | O(1) | May evict the oldest arrival            |
//! | `get`         | O(1) | Never reorders                          |
//! | `peek_oldest` | O(1) | Next eviction candidate                 |
//! | `keys`        | O(n) | Arrival order, oldest first             |
//!
//! ## Example
//!
//! ```
//! use evictkit::policy::fifo::FifoCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = FifoCache::with_capacity(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//!
//! // Reads do not save "a"
//! cache.get(&"a");
//! cache.insert("c", 3);
//!
//! assert!(!cache.contains(&"a"));
//! assert_eq!(cache.keys(), vec![&"b", &"c"]);
//! ```

use std::hash::Hash;

use crate::policy::ordered::{OrderRule, OrderedCache, VictimEnd};

/// Arrival order; nothing moves once inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl OrderRule for Fifo {
    const NAME: &'static str = "fifo";
    const TYPE_NAME: &'static str = "FifoCache";
    const MOVE_ON_OVERWRITE: bool = false;
    const MOVE_ON_HIT: bool = false;
    const VICTIM: VictimEnd = VictimEnd::Front;
}

/// Bounded cache that evicts in arrival order.
pub type FifoCache<K, V> = OrderedCache<K, V, Fifo>;

impl<K, V> FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// The oldest arrival, i.e. the next key to be evicted.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
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
        fn new_uses_default_capacity() {
            let cache: FifoCache<u32, u32> = FifoCache::new();
            assert_eq!(cache.capacity(), Some(DEFAULT_CAPACITY));
            assert!(cache.is_empty());
        }

        #[test]
        fn zero_capacity_is_rejected() {
            assert!(FifoCache::<u32, u32>::try_with_capacity(0).is_err());
        }

        #[test]
        #[should_panic(expected = "capacity")]
        fn with_capacity_zero_panics() {
            let _ = FifoCache::<u32, u32>::with_capacity(0);
        }

        #[test]
        fn insert_returns_previous_value() {
            let mut cache = FifoCache::with_capacity(2);
            assert_eq!(cache.insert("k", 1), None);
            assert_eq!(cache.insert("k", 2), Some(1));
            assert_eq!(cache.get(&"k"), Some(&2));
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn clear_resets_both_structures() {
            let recorder = EvictionRecorder::new();
            let mut cache = FifoCache::with_capacity(2).with_listener(recorder.clone());
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.clear();
            assert!(cache.is_empty());
            assert!(cache.keys().is_empty());
            assert!(recorder.is_empty());
            cache.check_invariants().unwrap();
        }
    }

    mod fifo_behavior {
        use super::*;

        #[test]
        fn evicts_oldest_arrival() {
            let recorder = EvictionRecorder::new();
            let mut cache = FifoCache::with_capacity(3).with_listener(recorder.clone());
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.insert("c", 3);
            cache.insert("d", 4);

            assert_eq!(recorder.evicted(), vec!["a"]);
            assert_eq!(cache.keys(), vec![&"b", &"c", &"d"]);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn get_does_not_protect_entry() {
            let mut cache = FifoCache::with_capacity(2);
            cache.insert("a", 1);
            cache.insert("b", 2);
            assert_eq!(cache.get(&"a"), Some(&1));
            cache.insert("c", 3);

            assert!(!cache.contains(&"a"));
            assert!(cache.contains(&"b"));
        }

        #[test]
        fn overwrite_keeps_arrival_position() {
            let recorder = EvictionRecorder::new();
            let mut cache = FifoCache::with_capacity(2).with_listener(recorder.clone());
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.insert("a", 10);
            assert!(recorder.is_empty());

            cache.insert("c", 3);
            assert_eq!(recorder.evicted(), vec!["a"]);
            assert_eq!(cache.peek_oldest(), Some((&"b", &2)));
        }

        #[test]
        fn one_eviction_per_insert() {
            let recorder = EvictionRecorder::new();
            let mut cache = FifoCache::with_capacity(2).with_listener(recorder.clone());
            for i in 0..10 {
                cache.insert(i, i);
                assert!(cache.len() <= 2);
            }
            assert_eq!(recorder.evicted(), (0..8).collect::<Vec<_>>());
        }
    }

    mod null_safety {
        use super::*;

        #[test]
        fn put_ignores_absent_parts() {
            let mut cache: FifoCache<&str, i32> = FifoCache::with_capacity(2);
            cache.put(None, Some(1));
            cache.put(Some("a"), None);
            assert!(cache.is_empty());
            assert_eq!(cache.get_opt(None), None);
            assert_eq!(cache.get_opt(Some(&"a")), None);
        }
    }
}
