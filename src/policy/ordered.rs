//! Shared engine for the order-based policies.
//!
//! FIFO, LIFO, LRU and MRU all keep one [`KeyOrder`] beside the storage map.
//! They differ in two things only: which operations move a key to the back,
//! and which end a victim is taken from. An [`OrderRule`] states both, and
//! [`OrderedCache`] does the rest.
//!
//! | Rule                       | Overwrite moves | Hit moves | Victim end |
//! |----------------------------|-----------------|-----------|------------|
//! | [`Fifo`](super::fifo::Fifo) | no             | no        | front      |
//! | [`Lifo`](super::lifo::Lifo) | yes            | no        | back       |
//! | [`Lru`](super::lru::Lru)    | yes            | yes       | front      |
//! | [`Mru`](super::mru::Mru)    | yes            | yes       | back       |
//!
//! The victim is taken before the new key is appended, so a new key is
//! never its own victim even when evicting from the back.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::DEFAULT_CAPACITY;
use crate::ds::KeyOrder;
use crate::error::{ConfigError, InvariantError, validate_capacity};
#[cfg(feature = "metrics")]
use crate::metrics::CacheMetricsSnapshot;
use crate::notify::{BoxedListener, EvictionListener};
use crate::store::BoundedStore;
use crate::traits::{CoreCache, ReadOnlyCache};

/// End of the key order a policy evicts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictimEnd {
    /// Oldest position.
    Front,
    /// Newest position.
    Back,
}

/// Reordering and victim selection for an [`OrderedCache`].
pub trait OrderRule {
    /// Short lowercase name used in logs and errors.
    const NAME: &'static str;
    /// Name shown by `Debug`.
    const TYPE_NAME: &'static str;
    /// Whether overwriting an existing key moves it to the back.
    const MOVE_ON_OVERWRITE: bool;
    /// Whether a successful `get` moves the key to the back.
    const MOVE_ON_HIT: bool;
    const VICTIM: VictimEnd;
}

/// Bounded cache that keeps its keys in one sequence and evicts from the
/// end chosen by `R`.
///
/// Use it through the aliases [`FifoCache`](super::fifo::FifoCache),
/// [`LifoCache`](super::lifo::LifoCache), [`LruCache`](super::lru::LruCache)
/// and [`MruCache`](super::mru::MruCache).
pub struct OrderedCache<K, V, R> {
    store: BoundedStore<K, V>,
    order: KeyOrder<K>,
    rule: PhantomData<fn() -> R>,
}

impl<K, V, R> OrderedCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: OrderRule,
{
    /// Creates a cache bounded to [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache bounded to `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use
    /// [`try_with_capacity`](Self::try_with_capacity) to handle that case.
    ///
    /// ```
    /// use evictkit::policy::lru::LruCache;
    /// use evictkit::traits::ReadOnlyCache;
    ///
    /// let cache: LruCache<String, i32> = LruCache::with_capacity(100);
    /// assert_eq!(cache.capacity(), Some(100));
    /// assert!(cache.is_empty());
    /// ```
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
            store: BoundedStore::new(R::NAME, Some(capacity)),
            order: KeyOrder::with_capacity(capacity),
            rule: PhantomData,
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

    /// The entry the next eviction would discard.
    pub fn peek_victim(&self) -> Option<(&K, &V)> {
        let key = match R::VICTIM {
            VictimEnd::Front => self.order.front()?,
            VictimEnd::Back => self.order.back()?,
        };
        self.store.peek(key).map(|value| (key, value))
    }

    /// Keys from the front of the order to the back.
    pub fn keys(&self) -> Vec<&K> {
        self.order.iter().collect()
    }

    /// Checks the capacity bound and that map and key order hold the same keys.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.order.check_invariants()?;
        self.store
            .check_against(self.order.len(), |key| self.order.contains(key))
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.store.metrics_snapshot()
    }

    fn take_victim(&mut self) -> Option<K> {
        match R::VICTIM {
            VictimEnd::Front => self.order.pop_front(),
            VictimEnd::Back => self.order.pop_back(),
        }
    }
}

impl<K, V, R> Default for OrderedCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: OrderRule,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, R> fmt::Debug for OrderedCache<K, V, R>
where
    K: Clone + Eq + Hash + fmt::Debug,
    R: OrderRule,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(R::TYPE_NAME)
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .field("next_victim", &self.peek_victim().map(|(key, _)| key))
            .finish_non_exhaustive()
    }
}

impl<K, V, R> ReadOnlyCache<K, V> for OrderedCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: OrderRule,
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

impl<K, V, R> CoreCache<K, V> for OrderedCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: OrderRule,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.store.contains(&key) {
            if R::MOVE_ON_OVERWRITE {
                self.order.move_to_back(&key);
            }
            return self.store.replace(key, value);
        }

        if self.store.is_full() {
            if let Some(victim) = self.take_victim() {
                self.store.evict(victim);
            }
        }

        self.order.push_back(key.clone());
        self.store.insert_new(key, value);
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if R::MOVE_ON_HIT && self.order.move_to_back(key) {
            tracing::trace!(policy = R::NAME, "touched entry");
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
        self.order.clear();
    }
}
