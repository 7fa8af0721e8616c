//! Thread-safe handle over a single cache instance (feature `concurrency`).
//!
//! Policies themselves are single-threaded. [`SharedCache`] puts one policy
//! instance behind its own `parking_lot::Mutex`, so two shared caches never
//! contend with each other. A mutex rather than a read-write lock, because
//! `get` reorders recency and frequency structures. Values come back cloned
//! since a reference cannot outlive the guard.
//!
//! ```
//! use std::thread;
//!
//! use evictkit::policy::lru::LruCache;
//! use evictkit::sync::SharedCache;
//!
//! let cache = SharedCache::new(LruCache::with_capacity(64));
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let cache = cache.clone();
//!         thread::spawn(move || {
//!             for i in 0..16 {
//!                 cache.insert(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().expect("worker panicked");
//! }
//!
//! assert_eq!(cache.len(), 64);
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::traits::{ConcurrentCache, CoreCache};

/// Cloneable, lock-protected handle to one cache.
pub struct SharedCache<K, V, C> {
    inner: Arc<Mutex<C>>,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<K, V, C> SharedCache<K, V, C>
where
    C: CoreCache<K, V>,
{
    pub fn new(cache: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
            _entries: PhantomData,
        }
    }

    /// Runs `f` with exclusive access to the underlying cache.
    ///
    /// Covers policy-specific calls such as `peek_lru` or
    /// `check_invariants` that the handle does not forward.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    pub fn put(&self, key: Option<K>, value: Option<V>) {
        self.inner.lock().put(key, value);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K, V, C> SharedCache<K, V, C>
where
    C: CoreCache<K, V>,
    V: Clone,
{
    /// Looks up `key` under the lock, applying the policy's touch.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    pub fn get_opt(&self, key: Option<&K>) -> Option<V> {
        self.inner.lock().get_opt(key).cloned()
    }

    pub fn peek(&self, key: &K) -> Option<V> {
        self.inner.lock().peek(key).cloned()
    }

    /// Owned copy of the storage map.
    pub fn show(&self) -> FxHashMap<K, V>
    where
        K: Clone + Eq + Hash,
    {
        self.inner
            .lock()
            .show()
            .into_iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V, C> Clone for SharedCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _entries: PhantomData,
        }
    }
}

impl<K, V, C: fmt::Debug> fmt::Debug for SharedCache<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

impl<K, V, C: Send> ConcurrentCache for SharedCache<K, V, C> {}
