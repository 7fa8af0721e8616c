//! Eviction notification.
//!
//! Every bounded policy reports each discarded key to an
//! [`EvictionListener`] exactly once, synchronously, before the `insert`
//! that caused the eviction returns. By the time the listener runs the
//! entry is already gone from both the storage map and the policy's
//! ordering or frequency structure.
//!
//! ## Stock listeners
//!
//! | Listener              | Behavior                                          |
//! |-----------------------|---------------------------------------------------|
//! | [`NoopListener`]      | Ignores evictions (the default)                   |
//! | [`EvictionRecorder`]  | Collects evicted keys behind a shared handle      |
//! | [`TracingListener`]   | Logs `DISCARD: <key>` through `tracing`           |
//! | any `FnMut(&K)`       | Closures are listeners                            |
//!
//! ## Example
//!
//! ```
//! use evictkit::notify::EvictionRecorder;
//! use evictkit::policy::fifo::FifoCache;
//! use evictkit::traits::CoreCache;
//!
//! let recorder = EvictionRecorder::new();
//! let mut cache = FifoCache::with_capacity(2).with_listener(recorder.clone());
//!
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3);
//!
//! assert_eq!(recorder.evicted(), vec!["a"]);
//! ```

use std::fmt::{self, Debug};
use std::sync::Arc;

use parking_lot::Mutex;

/// Observer for keys discarded by a policy.
pub trait EvictionListener<K>: Send {
    /// Called once per evicted key.
    fn on_evict(&mut self, key: &K);
}

impl<K, F> EvictionListener<K> for F
where
    F: FnMut(&K) + Send,
{
    #[inline]
    fn on_evict(&mut self, key: &K) {
        self(key)
    }
}

/// Boxed listener as stored inside a cache.
pub type BoxedListener<K> = Box<dyn EvictionListener<K>>;

/// Listener that ignores every eviction.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl<K> EvictionListener<K> for NoopListener {
    #[inline]
    fn on_evict(&mut self, _key: &K) {}
}

/// Collects evicted keys in eviction order.
///
/// Clones share the same buffer, so one clone can be handed to a cache
/// while another stays with the caller for assertions.
pub struct EvictionRecorder<K> {
    keys: Arc<Mutex<Vec<K>>>,
}

impl<K> EvictionRecorder<K> {
    pub fn new() -> Self {
        Self {
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of evictions seen so far.
    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.lock().is_empty()
    }

    /// Copy of the evicted keys, oldest eviction first.
    pub fn evicted(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.lock().clone()
    }

    /// Drains and returns the evicted keys.
    pub fn take(&self) -> Vec<K> {
        std::mem::take(&mut *self.keys.lock())
    }
}

impl<K> Clone for EvictionRecorder<K> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
        }
    }
}

impl<K> Default for EvictionRecorder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug> Debug for EvictionRecorder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvictionRecorder")
            .field("keys", &*self.keys.lock())
            .finish()
    }
}

impl<K> EvictionListener<K> for EvictionRecorder<K>
where
    K: Clone + Send,
{
    fn on_evict(&mut self, key: &K) {
        self.keys.lock().push(key.clone());
    }
}

/// Logs each eviction as `DISCARD: <key>` at INFO level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl<K> EvictionListener<K> for TracingListener
where
    K: Debug,
{
    fn on_evict(&mut self, key: &K) {
        tracing::info!(target: "evictkit::discard", "DISCARD: {:?}", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |key: &u32| seen.push(*key);
            EvictionListener::on_evict(&mut listener, &7u32);
            EvictionListener::on_evict(&mut listener, &9u32);
        }
        assert_eq!(seen, vec![7, 9]);
    }

    #[test]
    fn recorder_clones_share_buffer() {
        let recorder = EvictionRecorder::new();
        let mut handle = recorder.clone();
        handle.on_evict(&"a");
        handle.on_evict(&"b");

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.evicted(), vec!["a", "b"]);
        assert_eq!(recorder.take(), vec!["a", "b"]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn noop_and_tracing_listeners_accept_keys() {
        let mut noop = NoopListener;
        EvictionListener::<&str>::on_evict(&mut noop, &"a");
        let mut tracing_listener = TracingListener;
        tracing_listener.on_evict(&"a");
    }

    #[test]
    fn boxed_listener_dispatches() {
        let recorder = EvictionRecorder::new();
        let mut boxed: BoxedListener<u8> = Box::new(recorder.clone());
        boxed.on_evict(&3);
        assert_eq!(recorder.evicted(), vec![3]);
    }
}
