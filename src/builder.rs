//! Runtime policy selection.
//!
//! [`CacheBuilder`] constructs any policy behind one [`Cache`] type, so the
//! eviction strategy can come from configuration rather than from a type
//! parameter. [`CachePolicy`] parses from the usual short names.
//!
//! ```
//! use evictkit::builder::{CacheBuilder, CachePolicy};
//! use evictkit::notify::EvictionRecorder;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let policy: CachePolicy = "mru".parse().unwrap();
//! let recorder = EvictionRecorder::new();
//! let mut cache = CacheBuilder::new(2)
//!     .listener(recorder.clone())
//!     .build::<String>(policy);
//!
//! cache.insert(1u32, "one".to_string());
//! cache.insert(2, "two".to_string());
//! cache.insert(3, "three".to_string());
//!
//! assert_eq!(recorder.evicted(), vec![2]);
//! assert_eq!(cache.len(), 2);
//! ```

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::DEFAULT_CAPACITY;
use crate::error::{ConfigError, InvariantError, validate_capacity};
use crate::notify::{BoxedListener, EvictionListener};
use crate::policy::fifo::FifoCache;
use crate::policy::lfu::LfuCache;
use crate::policy::lifo::LifoCache;
use crate::policy::lru::LruCache;
use crate::policy::mru::MruCache;
use crate::policy::unbounded::UnboundedCache;
use crate::traits::{CoreCache, ReadOnlyCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachePolicy {
    Unbounded,
    Fifo,
    Lifo,
    #[default]
    Lru,
    Mru,
    Lfu,
}

impl CachePolicy {
    pub const ALL: [CachePolicy; 6] = [
        CachePolicy::Unbounded,
        CachePolicy::Fifo,
        CachePolicy::Lifo,
        CachePolicy::Lru,
        CachePolicy::Mru,
        CachePolicy::Lfu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CachePolicy::Unbounded => "unbounded",
            CachePolicy::Fifo => "fifo",
            CachePolicy::Lifo => "lifo",
            CachePolicy::Lru => "lru",
            CachePolicy::Mru => "mru",
            CachePolicy::Lfu => "lfu",
        }
    }

    pub fn is_bounded(self) -> bool {
        self != CachePolicy::Unbounded
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CachePolicy {
    type Err = ConfigError;

    /// Case-insensitive; also accepts `basic` for [`CachePolicy::Unbounded`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" | "basic" => Ok(CachePolicy::Unbounded),
            "fifo" => Ok(CachePolicy::Fifo),
            "lifo" => Ok(CachePolicy::Lifo),
            "lru" => Ok(CachePolicy::Lru),
            "mru" => Ok(CachePolicy::Mru),
            "lfu" => Ok(CachePolicy::Lfu),
            _ => Err(ConfigError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// Policy and capacity as loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub policy: CachePolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: CachePolicy::default(),
        }
    }
}

impl CacheConfig {
    pub fn new(policy: CachePolicy, capacity: usize) -> Self {
        Self { capacity, policy }
    }

    /// Bounded policies need a non-zero capacity; `Unbounded` ignores it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.is_bounded() {
            validate_capacity(self.capacity)?;
        }
        Ok(())
    }
}

/// Cache with the policy chosen at runtime.
pub struct Cache<K, V> {
    inner: CacheInner<K, V>,
}

enum CacheInner<K, V> {
    Unbounded(UnboundedCache<K, V>),
    Fifo(FifoCache<K, V>),
    Lifo(LifoCache<K, V>),
    Lru(LruCache<K, V>),
    Mru(MruCache<K, V>),
    Lfu(LfuCache<K, V>),
}

/// Forwards a call to whichever policy is inside.
macro_rules! dispatch {
    ($inner:expr, $cache:ident => $body:expr) => {
        match $inner {
            CacheInner::Unbounded($cache) => $body,
            CacheInner::Fifo($cache) => $body,
            CacheInner::Lifo($cache) => $body,
            CacheInner::Lru($cache) => $body,
            CacheInner::Mru($cache) => $body,
            CacheInner::Lfu($cache) => $body,
        }
    };
}

impl<K, V> Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn policy(&self) -> CachePolicy {
        match &self.inner {
            CacheInner::Unbounded(_) => CachePolicy::Unbounded,
            CacheInner::Fifo(_) => CachePolicy::Fifo,
            CacheInner::Lifo(_) => CachePolicy::Lifo,
            CacheInner::Lru(_) => CachePolicy::Lru,
            CacheInner::Mru(_) => CachePolicy::Mru,
            CacheInner::Lfu(_) => CachePolicy::Lfu,
        }
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        dispatch!(&self.inner, cache => cache.check_invariants())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> crate::metrics::CacheMetricsSnapshot {
        dispatch!(&self.inner, cache => cache.metrics_snapshot())
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.policy())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> ReadOnlyCache<K, V> for Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, key: &K) -> bool {
        dispatch!(&self.inner, cache => cache.contains(key))
    }

    fn len(&self) -> usize {
        dispatch!(&self.inner, cache => cache.len())
    }

    fn capacity(&self) -> Option<usize> {
        dispatch!(&self.inner, cache => cache.capacity())
    }

    fn peek(&self, key: &K) -> Option<&V> {
        dispatch!(&self.inner, cache => cache.peek(key))
    }

    fn show(&self) -> FxHashMap<&K, &V> {
        dispatch!(&self.inner, cache => cache.show())
    }
}

impl<K, V> CoreCache<K, V> for Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        dispatch!(&mut self.inner, cache => cache.insert(key, value))
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        dispatch!(&mut self.inner, cache => cache.get(key))
    }

    fn put(&mut self, key: Option<K>, value: Option<V>) {
        dispatch!(&mut self.inner, cache => cache.put(key, value))
    }

    fn clear(&mut self) {
        dispatch!(&mut self.inner, cache => cache.clear())
    }
}

/// Builds a [`Cache`] for a policy chosen at runtime.
pub struct CacheBuilder<K> {
    capacity: usize,
    listener: Option<BoxedListener<K>>,
}

impl<K> CacheBuilder<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            listener: None,
        }
    }

    /// Listener handed to the built cache.
    pub fn listener(mut self, listener: impl EvictionListener<K> + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// # Panics
    ///
    /// Panics if `policy` is bounded and the capacity is zero.
    pub fn build<V>(self, policy: CachePolicy) -> Cache<K, V> {
        match self.try_build(policy) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_build<V>(self, policy: CachePolicy) -> Result<Cache<K, V>, ConfigError> {
        CacheConfig::new(policy, self.capacity).validate()?;

        let capacity = self.capacity;
        let mut inner = match policy {
            CachePolicy::Unbounded => CacheInner::Unbounded(UnboundedCache::new()),
            CachePolicy::Fifo => CacheInner::Fifo(FifoCache::try_with_capacity(capacity)?),
            CachePolicy::Lifo => CacheInner::Lifo(LifoCache::try_with_capacity(capacity)?),
            CachePolicy::Lru => CacheInner::Lru(LruCache::try_with_capacity(capacity)?),
            CachePolicy::Mru => CacheInner::Mru(MruCache::try_with_capacity(capacity)?),
            CachePolicy::Lfu => CacheInner::Lfu(LfuCache::try_with_capacity(capacity)?),
        };

        if let Some(listener) = self.listener {
            dispatch!(&mut inner, cache => cache.set_listener(listener));
        }

        tracing::debug!(%policy, capacity, "built cache");
        Ok(Cache { inner })
    }

    /// Builds from a [`CacheConfig`], validating it first.
    pub fn from_config<V>(config: &CacheConfig) -> Result<Cache<K, V>, ConfigError> {
        CacheBuilder::new(config.capacity).try_build(config.policy)
    }
}

impl<K> fmt::Debug for CacheBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBuilder")
            .field("capacity", &self.capacity)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::EvictionRecorder;

    #[test]
    fn test_all_policies_basic_ops() {
        for policy in CachePolicy::ALL {
            let mut cache = CacheBuilder::new(10).build::<String>(policy);

            assert_eq!(cache.insert(1u64, "one".to_string()), None);
            assert_eq!(cache.insert(2, "two".to_string()), None);

            assert_eq!(cache.get(&1), Some(&"one".to_string()));
            assert_eq!(cache.get(&2), Some(&"two".to_string()));
            assert_eq!(cache.get(&3), None);

            assert!(cache.contains(&1));
            assert!(!cache.contains(&99));
            assert_eq!(cache.len(), 2);

            assert_eq!(cache.insert(1, "ONE".to_string()), Some("one".to_string()));
            assert_eq!(cache.peek(&1), Some(&"ONE".to_string()));
            assert_eq!(cache.policy(), policy);
            cache.check_invariants().unwrap();

            cache.clear();
            assert!(cache.is_empty());
        }
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = CacheBuilder::new(2).build::<String>(CachePolicy::Lru);

        cache.insert(1u64, "one".to_string());
        cache.insert(2, "two".to_string());
        cache.insert(3, "three".to_string());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn listener_reaches_every_bounded_policy() {
        for policy in CachePolicy::ALL.into_iter().filter(|p| p.is_bounded()) {
            let recorder = EvictionRecorder::new();
            let mut cache = CacheBuilder::new(1)
                .listener(recorder.clone())
                .build::<()>(policy);
            cache.insert(1u8, ());
            cache.insert(2, ());
            assert_eq!(recorder.evicted(), vec![1], "{policy}");
        }
    }

    #[test]
    fn unbounded_ignores_capacity() {
        let mut cache = CacheBuilder::new(0).build::<u32>(CachePolicy::Unbounded);
        for i in 0..10u32 {
            cache.insert(i, i);
        }
        assert_eq!(cache.len(), 10);
        assert_eq!(cache.capacity(), None);
    }

    #[test]
    fn zero_capacity_rejected_for_bounded() {
        let result = CacheBuilder::<u32>::new(0).try_build::<u32>(CachePolicy::Fifo);
        assert!(matches!(result, Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("LRU".parse::<CachePolicy>().unwrap(), CachePolicy::Lru);
        assert_eq!(" lfu ".parse::<CachePolicy>().unwrap(), CachePolicy::Lfu);
        assert_eq!("basic".parse::<CachePolicy>().unwrap(), CachePolicy::Unbounded);
        assert_eq!(
            "arc".parse::<CachePolicy>(),
            Err(ConfigError::UnknownPolicy("arc".into()))
        );

        for policy in CachePolicy::ALL {
            assert_eq!(policy.to_string().parse::<CachePolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn config_defaults_and_validation() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.policy, CachePolicy::Lru);
        assert!(config.validate().is_ok());

        assert!(CacheConfig::new(CachePolicy::Mru, 0).validate().is_err());
        assert!(CacheConfig::new(CachePolicy::Unbounded, 0).validate().is_ok());

        let cache = CacheBuilder::<&str>::from_config::<i32>(&config).unwrap();
        assert_eq!(cache.capacity(), Some(DEFAULT_CAPACITY));
    }
}
