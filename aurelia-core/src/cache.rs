//! Bounded memoization cache.
//!
//! [`MemoCache`] wraps an LRU map with a fixed maximum entry count. It is a
//! plain value owned by whichever layer wants memoization — there is no
//! process-wide implicit cache. Keys must capture the exact input tuple
//! (sequence content plus parameters), so a hit is always observably
//! identical to recomputation.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::{AureliaError, Result};

/// A bounded, least-recently-used memoization cache.
pub struct MemoCache<K: Hash + Eq, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V: Clone> MemoCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`AureliaError::InvalidParameter`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            AureliaError::InvalidParameter("cache capacity must be at least 1".into())
        })?;
        Ok(Self {
            inner: LruCache::new(capacity),
        })
    }

    /// Look up `key`, marking the entry as most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.inner.get(key).cloned()
    }

    /// Insert `value` under `key`, evicting the least recently used entry
    /// if the cache is full.
    pub fn put(&mut self, key: K, value: V) {
        self.inner.put(key, value);
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.inner.get(&key) {
            return hit.clone();
        }
        let value = compute();
        self.inner.put(key, value.clone());
        value
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.cap().get()
    }

    /// Drop every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K: Hash + Eq, V: Clone> std::fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
