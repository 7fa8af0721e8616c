//! LFU (Least Frequently Used) cache replacement policy.
//!
//! Keeps an access count per key and discards a key with the lowest count
//! when a new key arrives at capacity. Among keys sharing the lowest count,
//! the least recently used one goes first.
//!
//! ## Architecture
//!
//! ```text
//!   store: BoundedStore<K, V>      freq: FrequencyBuckets<K>
//!
//!   min_freq = 1
//!      │
//!      ▼
//!   freq=1: ["d"] ◄──► ["e"]      ← evict "d" (front of min bucket)
//!   freq=2: ["b"] ◄──► ["c"]
//!   freq=5: ["a"]
//!
//!   insert(new key)      → replace_min if full (else insert), freq 1, min_freq = 1
//!   insert(existing key) → overwrite, freq += 1
//!   get(hit)             → freq += 1
//! ```
//!
//! A key's count is 1 plus the number of overwrites and successful reads
//! since it was inserted. Emptied buckets are dropped and the minimum is
//! kept incrementally, so every operation is O(1) amortized.
//!
//! ## Example
//!
//! ```
//! use evictkit::policy::lfu::LfuCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = LfuCache::with_capacity(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");
//! cache.get(&"a");
//!
//! cache.insert("c", 3); // "b" has the lowest count
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.frequency(&"a"), Some(3));
//! assert_eq!(cache.frequency(&"c"), Some(1));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::DEFAULT_CAPACITY;
use crate::ds::FrequencyBuckets;
use crate::error::{ConfigError, InvariantError, validate_capacity};
#[cfg(feature = "metrics")]
use crate::metrics::CacheMetricsSnapshot;
use crate::notify::{BoxedListener, EvictionListener};
use crate::store::BoundedStore;
use crate::traits::{CoreCache, ReadOnlyCache};

/// Bounded cache that evicts the least frequently used key.
pub struct LfuCache<K, V> {
    store: BoundedStore<K, V>,
    freq: FrequencyBuckets<K>,
}

impl<K, V> LfuCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache bounded to [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache bounded to `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible constructor; returns [`ConfigError`] for a zero capacity.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self {
            store: BoundedStore::new("lfu", Some(capacity)),
            freq: FrequencyBuckets::with_capacity(capacity),
        })
    }

    /// Installs the listener notified of every evicted key.
    pub fn with_listener(mut self, listener: impl EvictionListener<K> + 'static) -> Self {
        self.store.set_listener(listener);
        self
    }

    pub(crate) fn set_listener(&mut self, listener: BoxedListener<K>) {
        self.store.set_boxed_listener(listener);
    }

    /// Access count of `key`, or `None` if it is not cached.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.freq.frequency(key)
    }

    /// Lowest access count currently present, or `None` when empty.
    pub fn min_frequency(&self) -> Option<u64> {
        self.freq.min_frequency()
    }

    /// Next eviction candidate: LRU key of the lowest-count bucket.
    ///
    /// ```
    /// use evictkit::policy::lfu::LfuCache;
    /// use evictkit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::with_capacity(3);
    /// cache.insert("x", 1);
    /// cache.insert("y", 2);
    /// cache.get(&"x");
    ///
    /// assert_eq!(cache.peek_lfu(), Some((&"y", &2)));
    /// ```
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        let (key, _) = self.freq.peek_min()?;
        self.store.peek(key).map(|value| (key, value))
    }

    /// Keys sharing access count `freq`, least recently used first.
    pub fn keys_with_frequency(&self, freq: u64) -> Vec<&K> {
        self.freq.keys_at(freq).collect()
    }

    /// Checks the capacity bound, map/frequency agreement and bucket contents.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.freq.check_invariants()?;
        self.store
            .check_against(self.freq.len(), |key| self.freq.contains(key))
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.store.metrics_snapshot()
    }
}

impl<K, V> Default for LfuCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for LfuCache<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .field("min_freq", &self.freq.min_frequency())
            .finish_non_exhaustive()
    }
}

impl<K, V> ReadOnlyCache<K, V> for LfuCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        self.store.capacity()
    }

    #[inline]
    fn peek(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
    }

    fn show(&self) -> FxHashMap<&K, &V> {
        self.store.show()
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.store.contains(&key) {
            if let Some(freq) = self.freq.touch(&key) {
                tracing::trace!(policy = "lfu", freq, "bumped frequency");
            }
            return self.store.replace(key, value);
        }

        if self.store.is_full() {
            if let Some((victim, freq)) = self.freq.replace_min(key.clone()) {
                tracing::trace!(policy = "lfu", freq, "selected victim");
                self.store.evict(victim);
            }
        } else {
            self.freq.insert(key.clone());
        }
        self.store.insert_new(key, value);
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(freq) = self.freq.touch(key) {
            tracing::trace!(policy = "lfu", freq, "bumped frequency");
        }
        self.store.lookup(key)
    }

    fn put(&mut self, key: Option<K>, value: Option<V>) {
        match (key, value) {
            (Some(key), Some(value)) => {
                self.insert(key, value);
            },
            _ => {
                #[cfg(feature = "metrics")]
                self.store.record_rejected_put();
            },
        }
    }

    fn clear(&mut self) {
        self.store.clear();
        self.freq.clear();
    }
}
