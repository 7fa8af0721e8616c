//! Storage map shared by every policy.
//!
//! [`BoundedStore`] owns the key → value map, the capacity bound, the
//! eviction listener and (with `metrics`) the operation counters. Policies
//! keep only their auxiliary ordering or frequency structure and delegate
//! the rest here, so the eviction hook behaves identically everywhere:
//!
//! ```text
//!   policy.insert(new key) at capacity
//!     │
//!     ├─ policy picks victim from its order/frequency structure
//!     │    (victim already unlinked from that structure)
//!     │
//!     └─ store.evict(victim)
//!          ├─ remove from map
//!          ├─ debug!("evicted", policy, len)
//!          ├─ metrics.record_evicted_entry()
//!          └─ listener.on_evict(&victim)
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot, CoreMetricsRecorder};
use crate::error::InvariantError;
use crate::notify::{BoxedListener, EvictionListener, NoopListener};

pub(crate) struct BoundedStore<K, V> {
    map: FxHashMap<K, V>,
    capacity: Option<usize>,
    listener: BoxedListener<K>,
    policy: &'static str,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V> BoundedStore<K, V>
where
    K: Eq + Hash,
{
    /// `capacity` is `None` for an unbounded store.
    pub(crate) fn new(policy: &'static str, capacity: Option<usize>) -> Self {
        let map = match capacity {
            Some(cap) => FxHashMap::with_capacity_and_hasher(cap, Default::default()),
            None => FxHashMap::default(),
        };
        Self {
            map,
            capacity,
            listener: Box::new(NoopListener),
            policy,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        }
    }

    pub(crate) fn set_listener(&mut self, listener: impl EvictionListener<K> + 'static) {
        self.listener = Box::new(listener);
    }

    pub(crate) fn set_boxed_listener(&mut self, listener: BoxedListener<K>) {
        self.listener = listener;
    }

    #[inline]
    pub(crate) fn policy(&self) -> &'static str {
        self.policy
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[inline]
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    pub(crate) fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// True when one more distinct key would exceed the capacity.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.map.len() >= cap)
    }

    /// Lookup that records a hit or miss.
    #[inline]
    pub(crate) fn lookup(&mut self, key: &K) -> Option<&V> {
        let value = self.map.get(key);
        #[cfg(feature = "metrics")]
        match value {
            Some(_) => self.metrics.record_get_hit(),
            None => self.metrics.record_get_miss(),
        }
        value
    }

    /// Overwrites the value of a key already present.
    pub(crate) fn replace(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_update();
        tracing::trace!(policy = self.policy, "updated entry");
        self.map.insert(key, value)
    }

    /// Stores a key the caller has already made room for.
    pub(crate) fn insert_new(&mut self, key: K, value: V) {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
        self.map.insert(key, value);
        tracing::trace!(policy = self.policy, len = self.map.len(), "inserted entry");
    }

    /// Eviction hook: drops `key` from the map and notifies the listener.
    ///
    /// The caller must already have removed `key` from its own structure.
    pub(crate) fn evict(&mut self, key: K) -> Option<V> {
        let value = self.map.remove(&key);
        if value.is_some() {
            tracing::debug!(policy = self.policy, len = self.map.len(), "evicted entry");
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
            self.listener.on_evict(&key);
        }
        value
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn record_rejected_put(&mut self) {
        self.metrics.record_rejected_put();
    }

    pub(crate) fn show(&self) -> FxHashMap<&K, &V> {
        self.map.iter().collect()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    /// Capacity bound plus "every map key is tracked" against `tracked`.
    pub(crate) fn check_against(
        &self,
        tracked_len: usize,
        is_tracked: impl Fn(&K) -> bool,
    ) -> Result<(), InvariantError> {
        if let Some(capacity) = self.capacity {
            if self.map.len() > capacity {
                return Err(InvariantError::OverCapacity {
                    policy: self.policy,
                    len: self.map.len(),
                    capacity,
                });
            }
        }
        if self.map.len() != tracked_len {
            return Err(InvariantError::LengthMismatch {
                policy: self.policy,
                stored: self.map.len(),
                tracked: tracked_len,
            });
        }
        if self.map.keys().any(|key| !is_tracked(key)) {
            return Err(InvariantError::UntrackedKey {
                policy: self.policy,
            });
        }
        Ok(())
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics
            .snapshot(self.map.len(), self.capacity.unwrap_or(usize::MAX))
    }
}

impl<K, V> fmt::Debug for BoundedStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStore")
            .field("policy", &self.policy)
            .field("len", &self.map.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
