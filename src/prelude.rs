pub use crate::DEFAULT_CAPACITY;
pub use crate::builder::{Cache, CacheBuilder, CacheConfig, CachePolicy};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::CacheMetricsSnapshot;
pub use crate::notify::{EvictionListener, EvictionRecorder, NoopListener, TracingListener};
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lfu::LfuCache;
pub use crate::policy::lifo::LifoCache;
pub use crate::policy::lru::LruCache;
pub use crate::policy::mru::MruCache;
pub use crate::policy::ordered::{OrderRule, OrderedCache};
pub use crate::policy::unbounded::UnboundedCache;
#[cfg(feature = "concurrency")]
pub use crate::sync::SharedCache;
pub use crate::traits::{ConcurrentCache, CoreCache, ReadOnlyCache};
