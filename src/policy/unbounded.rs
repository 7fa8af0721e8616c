//! Unbounded cache: a plain storage map with no capacity and no eviction.
//!
//! Shares the [`CoreCache`] contract with the bounded policies so it can be
//! swapped in where eviction is not wanted, for example as a baseline in
//! tests or benchmarks. Listeners are accepted for API symmetry but never
//! fire.
//!
//! ```
//! use evictkit::policy::unbounded::UnboundedCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = UnboundedCache::new();
//! for i in 0..1_000 {
//!     cache.insert(i, i * 2);
//! }
//! assert_eq!(cache.len(), 1_000);
//! assert_eq!(cache.capacity(), None);
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[cfg(feature = "metrics")]
use crate::metrics::CacheMetricsSnapshot;
use crate::error::InvariantError;
use crate::notify::{BoxedListener, EvictionListener};
use crate::store::BoundedStore;
use crate::traits::{CoreCache, ReadOnlyCache};

pub struct UnboundedCache<K, V> {
    store: BoundedStore<K, V>,
}

impl<K, V> UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            store: BoundedStore::new("unbounded", None),
        }
    }

    pub fn with_listener(mut self, listener: impl EvictionListener<K> + 'static) -> Self {
        self.store.set_listener(listener);
        self
    }

    pub(crate) fn set_listener(&mut self, listener: BoxedListener<K>) {
        self.store.set_boxed_listener(listener);
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> Vec<&K> {
        self.store.keys().collect()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.store.check_against(self.store.len(), |_| true)
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.store.metrics_snapshot()
    }
}

impl<K, V> Default for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for UnboundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnboundedCache")
            .field("store", &self.store)
            .finish()
    }
}

impl<K, V> ReadOnlyCache<K, V> for UnboundedCache<K, V>
where
    K: Eq + Hash,
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
        None
    }

    #[inline]
    fn peek(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
    }

    fn show(&self) -> FxHashMap<&K, &V> {
        self.store.show()
    }
}

impl<K, V> CoreCache<K, V> for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.store.contains(&key) {
            return self.store.replace(key, value);
        }
        self.store.insert_new(key, value);
        None
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
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
    }
}
