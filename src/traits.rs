//! # Cache Trait Hierarchy
//!
//! One capability set shared by every eviction policy, split by mutability:
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │            ReadOnlyCache<K, V>               │
//!   │                                              │
//!   │  contains(&K) → bool                         │
//!   │  len() → usize / is_empty() → bool           │
//!   │  capacity() → Option<usize>                  │
//!   │  peek(&K) → Option<&V>      (no reorder)     │
//!   │  show() → FxHashMap<&K, &V> (diagnostic)     │
//!   └──────────────────────┬───────────────────────┘
//!                          │
//!                          ▼
//!   ┌──────────────────────────────────────────────┐
//!   │              CoreCache<K, V>                 │
//!   │                                              │
//!   │  insert(K, V) → Option<V>                    │
//!   │  get(&K) → Option<&V>       (may reorder)    │
//!   │  put(Option<K>, Option<V>)  (null-safe)      │
//!   │  get_opt(Option<&K>) → Option<&V>            │
//!   │  clear()                                     │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! Policies differ only in how `insert` and `get` update their auxiliary
//! structure and in which key they discard when a new key arrives at
//! capacity. Overwriting an existing key never evicts.
//!
//! ## Null-safe entry points
//!
//! `put` and `get_opt` accept `Option`s so callers holding possibly-absent
//! keys or values get the lenient contract: a missing key or value makes
//! `put` a silent no-op, and `get_opt(None)` is simply `None`.
//!
//! ```
//! use evictkit::policy::fifo::FifoCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = FifoCache::with_capacity(2);
//! cache.put(Some("a"), Some(1));
//! cache.put(None, Some(2));
//! cache.put(Some("b"), None);
//!
//! assert_eq!(cache.len(), 1);
//! assert_eq!(cache.get_opt(Some(&"a")), Some(&1));
//! assert_eq!(cache.get_opt(None), None);
//! ```

use rustc_hash::FxHashMap;

/// Read-only view of a cache. Nothing here changes eviction order.
pub trait ReadOnlyCache<K, V> {
    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, or `None` for an unbounded cache.
    fn capacity(&self) -> Option<usize>;

    /// Looks up a value without touching recency or frequency.
    fn peek(&self, key: &K) -> Option<&V>;

    /// Snapshot of the whole storage map, in no particular order.
    ///
    /// ```
    /// use evictkit::policy::lru::LruCache;
    /// use evictkit::traits::{CoreCache, ReadOnlyCache};
    ///
    /// let mut cache = LruCache::with_capacity(4);
    /// cache.insert("x", 1);
    /// cache.insert("y", 2);
    ///
    /// let map = cache.show();
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&"x"), Some(&&1));
    /// ```
    fn show(&self) -> FxHashMap<&K, &V>;
}

/// Core cache operations that all policies support.
///
/// # Example
///
/// ```
/// use evictkit::policy::lfu::LfuCache;
/// use evictkit::traits::{CoreCache, ReadOnlyCache};
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::with_capacity(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// A new key arriving at capacity first evicts exactly one entry chosen
    /// by the policy. Overwriting an existing key never evicts.
    ///
    /// ```
    /// use evictkit::policy::lifo::LifoCache;
    /// use evictkit::traits::CoreCache;
    ///
    /// let mut cache = LifoCache::with_capacity(10);
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update recency or frequency depending on the policy. Use
    /// [`peek`](ReadOnlyCache::peek) to look without touching.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Null-safe insert: does nothing if either `key` or `value` is `None`.
    fn put(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.insert(key, value);
        }
    }

    /// Null-safe lookup: `None` for an absent key.
    fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.get(key),
            None => None,
        }
    }

    /// Removes all entries. Not an eviction, so listeners are not called.
    fn clear(&mut self);
}

/// Marker trait for caches that are safe to share across threads.
///
/// ```
/// # #[cfg(feature = "concurrency")]
/// # {
/// use evictkit::policy::lru::LruCache;
/// use evictkit::sync::SharedCache;
/// use evictkit::traits::ConcurrentCache;
///
/// fn assert_concurrent<C: ConcurrentCache>(_: &C) {}
///
/// let shared: SharedCache<u32, u32, LruCache<u32, u32>> =
///     SharedCache::new(LruCache::with_capacity(8));
/// assert_concurrent(&shared);
/// # }
/// ```
pub trait ConcurrentCache: Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal map-backed cache to exercise the provided methods.
    struct MapCache {
        map: FxHashMap<u32, u32>,
        inserts: usize,
    }

    impl ReadOnlyCache<u32, u32> for MapCache {
        fn contains(&self, key: &u32) -> bool {
            self.map.contains_key(key)
        }
        fn len(&self) -> usize {
            self.map.len()
        }
        fn capacity(&self) -> Option<usize> {
            None
        }
        fn peek(&self, key: &u32) -> Option<&u32> {
            self.map.get(key)
        }
        fn show(&self) -> FxHashMap<&u32, &u32> {
            self.map.iter().collect()
        }
    }

    impl CoreCache<u32, u32> for MapCache {
        fn insert(&mut self, key: u32, value: u32) -> Option<u32> {
            self.inserts += 1;
            self.map.insert(key, value)
        }
        fn get(&mut self, key: &u32) -> Option<&u32> {
            self.map.get(key)
        }
        fn clear(&mut self) {
            self.map.clear();
        }
    }

    fn map_cache() -> MapCache {
        MapCache {
            map: FxHashMap::default(),
            inserts: 0,
        }
    }

    #[test]
    fn put_skips_missing_key_or_value() {
        let mut cache = map_cache();
        cache.put(None, Some(1));
        cache.put(Some(1), None);
        cache.put(None, None);
        assert_eq!(cache.inserts, 0);
        assert!(cache.is_empty());

        cache.put(Some(1), Some(10));
        assert_eq!(cache.inserts, 1);
        assert_eq!(cache.peek(&1), Some(&10));
    }

    #[test]
    fn get_opt_handles_absent_key() {
        let mut cache = map_cache();
        cache.insert(3, 30);
        assert_eq!(cache.get_opt(None), None);
        assert_eq!(cache.get_opt(Some(&4)), None);
        assert_eq!(cache.get_opt(Some(&3)), Some(&30));
    }

    #[test]
    fn show_borrows_every_entry() {
        let mut cache = map_cache();
        cache.insert(1, 10);
        cache.insert(2, 20);
        let shown = cache.show();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown.get(&2), Some(&&20));
    }
}
