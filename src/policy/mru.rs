//! MRU (Most Recently Used) cache replacement policy.
//!
//! Tracks recency exactly like LRU but discards from the other end: when a
//! new key arrives at capacity, the key touched most recently before it is
//! evicted. Useful for cyclic scans where the item just used is the one
//! least likely to be needed again soon.
//!
//! ## Architecture
//!
//! ```text
//!   store: BoundedStore<K, V>          recency: KeyOrder<K>
//!
//!     front (LRU, kept)                        back (MRU, EVICT)
//!      ▼                                         ▼
//!     ["a"] ◄──► ["b"] ◄──► ["c"] ◄──► ["d"]
//!
//!   insert(new key) at capacity:
//!     1. pop back          (previous most recently used)
//!     2. append new key    (new key becomes MRU only after eviction)
//!
//!   insert(existing key) → overwrite, move to back, never evicts
//!   get(hit)             → move to back
//! ```
//!
//! Ties resolve as "last move-to-back wins": whichever key was appended or
//! refreshed last sits at the back.
//!
//! ## Example
//!
//! ```
//! use evictkit::policy::mru::MruCache;
//! use evictkit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = MruCache::with_capacity(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3); // evicts "b", the most recently used
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.peek_mru(), Some((&"c", &3)));
//! ```

use std::hash::Hash;

use crate::policy::ordered::{OrderRule, OrderedCache, VictimEnd};

/// Recency order, evicting the fresh end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mru;

impl OrderRule for Mru {
    const NAME: &'static str = "mru";
    const TYPE_NAME: &'static str = "MruCache";
    const MOVE_ON_OVERWRITE: bool = true;
    const MOVE_ON_HIT: bool = true;
    const VICTIM: VictimEnd = VictimEnd::Back;
}

/// Bounded cache that evicts the most recently used key.
pub type MruCache<K, V> = OrderedCache<K, V, Mru>;

impl<K, V> MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Most recently used entry, i.e. the next key to be evicted.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.peek_victim()
    }
}
