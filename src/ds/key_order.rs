//! Ordered key sequence for order-based policies.
//!
//! `KeyOrder` is a doubly linked list whose links live in a hash map keyed
//! by the keys themselves: each key records its neighbours by value. Append,
//! refresh and unlink are a couple of map operations each, with no arena
//! and no handles to keep in sync.
//!
//! ```text
//!   head = "a"                                       tail = "c"
//!
//!   links: "a" → { prev: None,      next: Some("b") }
//!          "b" → { prev: Some("a"), next: Some("c") }
//!          "c" → { prev: Some("b"), next: None      }
//!
//!   front (oldest) ──►  "a" ◄──► "b" ◄──► "c"  ◄── back (newest)
//! ```
//!
//! The front is the oldest position and the back the newest. Each policy
//! decides what "old" means (arrival or last touch) and which end it evicts.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;

#[derive(Debug, Clone)]
struct Links<K> {
    prev: Option<K>,
    next: Option<K>,
}

#[derive(Debug, Clone)]
pub struct KeyOrder<K> {
    links: FxHashMap<K, Links<K>>,
    head: Option<K>,
    tail: Option<K>,
}

impl<K> KeyOrder<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            links: FxHashMap::default(),
            head: None,
            tail: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.links.contains_key(key)
    }

    #[inline]
    pub fn front(&self) -> Option<&K> {
        self.head.as_ref()
    }

    #[inline]
    pub fn back(&self) -> Option<&K> {
        self.tail.as_ref()
    }

    /// Appends `key` at the back. Returns `false` if it was already present.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.links.contains_key(&key) {
            return false;
        }
        let prev = self.tail.replace(key.clone());
        self.point_next(prev.as_ref(), Some(key.clone()));
        self.links.insert(key, Links { prev, next: None });
        true
    }

    /// Moves `key` to the back. Returns `false` if it is not present.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        if self.tail.as_ref() == Some(key) {
            return true;
        }
        match self.unlink(key) {
            Some(owned) => self.push_back(owned),
            None => false,
        }
    }

    /// Unlinks `key` wherever it sits, handing back the stored key.
    pub fn unlink(&mut self, key: &K) -> Option<K> {
        let (owned, Links { prev, next }) = self.links.remove_entry(key)?;
        self.point_next(prev.as_ref(), next.clone());
        self.point_prev(next.as_ref(), prev);
        Some(owned)
    }

    pub fn pop_front(&mut self) -> Option<K> {
        let head = self.head.clone()?;
        self.unlink(&head)
    }

    pub fn pop_back(&mut self) -> Option<K> {
        let tail = self.tail.clone()?;
        self.unlink(&tail)
    }

    /// Keys from front (oldest) to back (newest).
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            order: self,
            cursor: self.head.as_ref(),
            remaining: self.links.len(),
        }
    }

    pub fn clear(&mut self) {
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    /// Walks the list from the front, checking back-links, the tail, and
    /// that every linked key is reachable.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut prev: Option<&K> = None;
        let mut cursor = self.head.as_ref();
        let mut seen = 0usize;
        while let Some(key) = cursor {
            let links = self
                .links
                .get(key)
                .ok_or_else(|| InvariantError::corrupt("key order", "linked key has no entry"))?;
            if links.prev.as_ref() != prev {
                return Err(InvariantError::corrupt("key order", "back-link mismatch"));
            }
            seen += 1;
            if seen > self.links.len() {
                return Err(InvariantError::corrupt("key order", "cycle in links"));
            }
            prev = Some(key);
            cursor = links.next.as_ref();
        }
        if prev != self.tail.as_ref() {
            return Err(InvariantError::corrupt("key order", "tail is not the last key"));
        }
        if seen != self.links.len() {
            return Err(InvariantError::corrupt(
                "key order",
                format!("{seen} of {} keys reachable from the front", self.links.len()),
            ));
        }
        Ok(())
    }

    /// Sets the `next` link of `at`, or the head when `at` is `None`.
    fn point_next(&mut self, at: Option<&K>, next: Option<K>) {
        match at.and_then(|key| self.links.get_mut(key)) {
            Some(links) => links.next = next,
            None => self.head = next,
        }
    }

    /// Sets the `prev` link of `at`, or the tail when `at` is `None`.
    fn point_prev(&mut self, at: Option<&K>, prev: Option<K>) {
        match at.and_then(|key| self.links.get_mut(key)) {
            Some(links) => links.prev = prev,
            None => self.tail = prev,
        }
    }
}

impl<K> Default for KeyOrder<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`KeyOrder`].
pub struct Iter<'a, K> {
    order: &'a KeyOrder<K>,
    cursor: Option<&'a K>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: Eq + Hash,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.order.links.get(key).and_then(|l| l.next.as_ref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Eq + Hash> ExactSizeIterator for Iter<'_, K> {}
