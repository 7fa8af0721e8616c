//! Per-key access counts grouped into recency-ordered buckets.
//!
//! ```text
//!   counts: key → count             buckets: count → KeyOrder<K>
//!
//!     "a" → 5                         1: ["d"] ◄──► ["e"]      ◄── min_freq
//!     "b" → 2                         2: ["b"] ◄──► ["c"]
//!     "c" → 2                         5: ["a"]
//!     "d" → 1                            front = least recently touched
//!     "e" → 1
//! ```
//!
//! The victim is always the front of the `min_freq` bucket. `min_freq` is
//! kept as state:
//!
//! - a new key sets it to 1;
//! - touching the last key of the minimum bucket moves it up by one, since
//!   that key now sits exactly one count higher.
//!
//! Removal only happens through [`replace_min`](FrequencyBuckets::replace_min),
//! which admits a count-1 key in the same step, so the minimum never has to
//! be searched for.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::KeyOrder;
use crate::error::InvariantError;

/// Count bookkeeping for LFU with LRU order among equal counts.
///
/// ```
/// use evictkit::ds::FrequencyBuckets;
///
/// let mut freq = FrequencyBuckets::new();
/// freq.insert("a");
/// freq.insert("b");
/// freq.touch(&"a");
///
/// assert_eq!(freq.frequency(&"a"), Some(2));
/// assert_eq!(freq.peek_min(), Some((&"b", 1)));
///
/// // "b" goes, "c" comes in at count 1
/// assert_eq!(freq.replace_min("c"), Some(("b", 1)));
/// assert_eq!(freq.min_frequency(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyBuckets<K> {
    counts: FxHashMap<K, u64>,
    buckets: FxHashMap<u64, KeyOrder<K>>,
    /// 0 while empty.
    min_freq: u64,
}

impl<K> FrequencyBuckets<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
            buckets: FxHashMap::default(),
            min_freq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::default(),
            min_freq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    #[inline]
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Lowest count present, or `None` when empty.
    #[inline]
    pub fn min_frequency(&self) -> Option<u64> {
        (self.min_freq > 0).then_some(self.min_freq)
    }

    /// Next victim and its count, without removing it.
    pub fn peek_min(&self) -> Option<(&K, u64)> {
        let key = self.buckets.get(&self.min_freq)?.front()?;
        Some((key, self.min_freq))
    }

    /// Keys with count `freq`, least recently touched first.
    pub fn keys_at(&self, freq: u64) -> impl Iterator<Item = &K> {
        self.buckets.get(&freq).into_iter().flat_map(|bucket| bucket.iter())
    }

    /// Tracks `key` at count 1. Returns `false` if it was already tracked.
    pub fn insert(&mut self, key: K) -> bool {
        if self.counts.contains_key(&key) {
            return false;
        }
        self.counts.insert(key.clone(), 1);
        self.buckets.entry(1).or_default().push_back(key);
        self.min_freq = 1;
        true
    }

    /// Bumps the count of `key` and makes it the most recent in its new
    /// bucket. Returns the new count, or `None` if `key` is not tracked.
    pub fn touch(&mut self, key: &K) -> Option<u64> {
        let count = self.counts.get_mut(key)?;
        let old = *count;
        let new = old.saturating_add(1);
        *count = new;

        let bucket = self.buckets.get_mut(&old)?;
        let owned = bucket.unlink(key)?;
        if bucket.is_empty() {
            self.buckets.remove(&old);
            if self.min_freq == old {
                self.min_freq = new;
            }
        }
        self.buckets.entry(new).or_default().push_back(owned);
        Some(new)
    }

    /// Drops the least recently touched key of the lowest count and tracks
    /// `key` at count 1 in its place.
    ///
    /// Returns the dropped key with its final count, or `None` (after still
    /// tracking `key`) when nothing was tracked. A `key` that is already
    /// tracked is left alone and nothing is dropped.
    pub fn replace_min(&mut self, key: K) -> Option<(K, u64)> {
        if self.counts.contains_key(&key) {
            return None;
        }
        let freq = self.min_freq;
        let victim = match self.buckets.get_mut(&freq) {
            Some(bucket) => {
                let victim = bucket.pop_front();
                if bucket.is_empty() {
                    self.buckets.remove(&freq);
                }
                victim
            },
            None => None,
        };
        if let Some(victim) = &victim {
            self.counts.remove(victim);
        }
        self.insert(key);
        victim.map(|victim| (victim, freq))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }

    /// Checks that counts and buckets agree key for key, that no bucket is
    /// empty, and that `min_freq` names the lowest bucket.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut bucketed = 0usize;
        for (&freq, bucket) in &self.buckets {
            if bucket.is_empty() {
                return Err(InvariantError::corrupt(
                    "frequency buckets",
                    format!("bucket {freq} is empty"),
                ));
            }
            bucket.check_invariants()?;
            for key in bucket.iter() {
                if self.counts.get(key) != Some(&freq) {
                    return Err(InvariantError::corrupt(
                        "frequency buckets",
                        format!("key in bucket {freq} has a different count"),
                    ));
                }
            }
            bucketed += bucket.len();
        }
        if bucketed != self.counts.len() {
            return Err(InvariantError::corrupt(
                "frequency buckets",
                format!("{bucketed} keys bucketed, {} counted", self.counts.len()),
            ));
        }
        let lowest = self.buckets.keys().min().copied().unwrap_or(0);
        if self.min_freq != lowest {
            return Err(InvariantError::corrupt(
                "frequency buckets",
                format!("min_freq is {} but lowest bucket is {lowest}", self.min_freq),
            ));
        }
        Ok(())
    }
}

impl<K> Default for FrequencyBuckets<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
