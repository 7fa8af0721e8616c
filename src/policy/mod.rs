//! Eviction policies.
//!
//! | Policy                          | Evicts                                   | `get` reorders |
//! |---------------------------------|------------------------------------------|----------------|
//! | [`UnboundedCache`]              | never                                    | no             |
//! | [`FifoCache`]                   | oldest arrival                           | no             |
//! | [`LifoCache`]                   | newest write                             | no             |
//! | [`LruCache`]                    | least recently used                      | yes            |
//! | [`MruCache`]                    | most recently used                       | yes            |
//! | [`LfuCache`]                    | lowest count, LRU among ties             | yes (count)    |
//!
//! FIFO, LIFO, LRU and MRU are one engine, [`OrderedCache`], run with
//! different [`OrderRule`]s. LFU keeps frequency buckets instead.
//!
//! [`OrderedCache`]: ordered::OrderedCache
//! [`OrderRule`]: ordered::OrderRule
//! [`UnboundedCache`]: unbounded::UnboundedCache
//! [`FifoCache`]: fifo::FifoCache
//! [`LifoCache`]: lifo::LifoCache
//! [`LruCache`]: lru::LruCache
//! [`MruCache`]: mru::MruCache
//! [`LfuCache`]: lfu::LfuCache

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod ordered;
pub mod unbounded;
