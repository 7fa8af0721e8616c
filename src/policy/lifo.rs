//! LIFO (Last In, First Out) cache replacement policy.
//!
//! Evicts the most recently written entry when capacity is reached. The
//! oldest entries stay resident for as long as the cache lives, which suits
//! workloads where the first items loaded are the ones worth keeping.
//!
//! ## Architecture
//!
//! ```text
//!   store: BoundedStore<K, V>        order: KeyOrder<K> (used as a stack)
//!
//!     bottom (kept)                         top (EVICT)
//!      ▼                                      ▼
//!     ["a"] ◄──► ["b"] ◄──► ["c"] ◄──► ["d"]
//!
//!   insert(new key)      → pop top if full, push new key on top
//!   insert(existing key) → overwrite, move key to top
//!   get(key)             → value only, position unchanged
//! ```
//!
//! Because an overwrite moves the key to the top, a key rewritten just
//! before a new arrival is the one discarded.
//!
//! ## Operations
//!
//! | Operation     | Time | Notes                               |
//! |---------------|------|-------------------------------------|
//! | `insert`      | O(1) | May evict the top of the stack      |
//! | `get`         | O(1) | Never reorders                      |
//! | `peek_newest` | O(1) | Next eviction candidate             |
//!
//! ## Example
//!
//! ```
//! use evictkit::policy::lifo::LifoCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = LifoCache::with_capacity(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3); // evicts "b", the top
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.peek_newest(), Some((&"c", &3)));
//! ```

use std::hash::Hash;

use crate::policy::ordered::{OrderRule, OrderedCache, VictimEnd};

/// Write order as a stack; an overwrite counts as a fresh push.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

impl OrderRule for Lifo {
    const NAME: &'static str = "lifo";
    const TYPE_NAME: &'static str = "LifoCache";
    const MOVE_ON_OVERWRITE: bool = true;
    const MOVE_ON_HIT: bool = false;
    const VICTIM: VictimEnd = VictimEnd::Back;
}

/// Bounded cache that evicts the most recently written key.
pub type LifoCache<K, V> = OrderedCache<K, V, Lifo>;

impl<K, V> LifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// The top of the stack, i.e. the next key to be evicted.
    pub fn peek_newest(&self) -> Option<(&K, &V)> {
        self.peek_victim()
    }
}
