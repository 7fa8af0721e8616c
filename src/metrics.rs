//! Operation counters for cache policies (feature `metrics`).
//!
//! Recording and snapshotting are split the same way across all policies:
//! the storage map shared by every policy owns a [`CacheMetrics`]
//! recorder, and each policy exposes `metrics_snapshot()` returning a
//! [`CacheMetricsSnapshot`] with the counters plus gauges captured at
//! snapshot time.
//!
//! ```
//! # #[cfg(feature = "metrics")]
//! # {
//! use evictkit::policy::lru::LruCache;
//! use evictkit::traits::CoreCache;
//!
//! let mut cache = LruCache::with_capacity(1);
//! cache.insert(1, "a");
//! cache.insert(2, "b");
//! cache.get(&1);
//!
//! let snap = cache.metrics_snapshot();
//! assert_eq!(snap.evicted_entries, 1);
//! assert_eq!(snap.get_misses, 1);
//! # }
//! ```

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_rejected_put(&mut self);
    fn record_evicted_entry(&mut self);
}

#[derive(Debug, Default, Clone)]
pub struct CacheMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub rejected_puts: u64,
    pub evicted_entries: u64,
}

impl CoreMetricsRecorder for CacheMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }
    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }
    fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }
    fn record_rejected_put(&mut self) {
        self.rejected_puts += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
}

impl CacheMetrics {
    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_updates: self.insert_updates,
            rejected_puts: self.rejected_puts,
            evicted_entries: self.evicted_entries,
            cache_len,
            capacity,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub rejected_puts: u64,

    pub evicted_entries: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl CacheMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `0.0` before the first `get`.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_updates_counters() {
        let mut metrics = CacheMetrics::default();
        metrics.record_get_hit();
        metrics.record_get_miss();
        metrics.record_get_hit();
        metrics.record_insert_new();
        metrics.record_insert_update();
        metrics.record_rejected_put();
        metrics.record_evicted_entry();

        let snap = metrics.snapshot(3, 4);
        assert_eq!(snap.get_calls, 3);
        assert_eq!(snap.get_hits, 2);
        assert_eq!(snap.insert_calls, 2);
        assert_eq!(snap.rejected_puts, 1);
        assert_eq!(snap.evicted_entries, 1);
        assert_eq!(snap.cache_len, 3);
        assert_eq!(snap.capacity, 4);
    }

    #[test]
    fn hit_rate_handles_zero_gets() {
        let snap = CacheMetricsSnapshot::default();
        assert_eq!(snap.hit_rate(), 0.0);

        let snap = CacheMetricsSnapshot {
            get_calls: 4,
            get_hits: 1,
            ..Default::default()
        };
        assert!((snap.hit_rate() - 0.25).abs() < f64::EPSILON);
    }
}
