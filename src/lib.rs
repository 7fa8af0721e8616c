//! evictkit: in-memory key-value caches with interchangeable eviction policies.
//!
//! Every policy implements [`CoreCache`](traits::CoreCache): a bounded map
//! that discards exactly one entry, chosen by the policy, when a new key
//! arrives at capacity. Evictions are reported synchronously to an
//! [`EvictionListener`](notify::EvictionListener).
//!
//! ```
//! use evictkit::prelude::*;
//!
//! let recorder = EvictionRecorder::new();
//! let mut cache = LruCache::with_capacity(2).with_listener(recorder.clone());
//!
//! cache.put(Some("A"), Some(1));
//! cache.put(Some("B"), Some(2));
//! cache.get(&"A");
//! cache.put(Some("C"), Some(3));
//!
//! assert_eq!(recorder.evicted(), vec!["B"]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod notify;
pub mod policy;
pub mod prelude;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;
#[cfg(feature = "concurrency")]
pub mod sync;

mod store;

/// Capacity used by every bounded policy's `new()`.
pub const DEFAULT_CAPACITY: usize = 4;
