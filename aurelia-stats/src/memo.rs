//! Cached statistics engine.
//!
//! [`StatsEngine`] owns a bounded LRU cache keyed by the SHA-256 content
//! hash of the (uppercased) input sequence. Identical inputs return the
//! cached [`SequenceStats`]; the cache changes latency, never results.
//! Validation failures are not cached.

use aurelia_core::{hash, MemoCache, Result};

use crate::composition::{comprehensive_stats, SequenceStats};

/// Default cache capacity.
const DEFAULT_CACHE_CAPACITY: usize = 128;

/// A composition-statistics engine with bounded memoization.
#[derive(Debug)]
pub struct StatsEngine {
    cache: MemoCache<String, SequenceStats>,
}

impl StatsEngine {
    /// Create an engine with the default cache capacity (128 entries).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY).expect("default capacity is non-zero")
    }

    /// Create an engine whose cache holds at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`aurelia_core::AureliaError::InvalidParameter`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            cache: MemoCache::new(capacity)?,
        })
    }

    /// Compute (or return cached) comprehensive statistics for `seq`.
    pub fn stats(&mut self, seq: &[u8]) -> Result<SequenceStats> {
        let normalized: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
        let key = hash::sha256(&normalized);

        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let stats = comprehensive_stats(&normalized)?;
        self.cache.put(key, stats.clone());
        Ok(stats)
    }

    /// Number of cached entries.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}
