//! Thread-safe suggestion cache with capacity and TTL eviction.
//!
//! Default: 500 entries, 1-hour TTL. Concurrent callers that miss on the
//! same key may compute redundantly; the fallback path is cheap enough
//! that no in-flight guard is needed.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use docsense_core::SuggestionResult;
use parking_lot::Mutex;
use tracing::debug;

struct CacheEntry {
    result: SuggestionResult,
    inserted_at: Instant,
}

impl CacheEntry {
    fn fresh(result: SuggestionResult) -> Self {
        Self {
            result,
            inserted_at: Instant::now(),
        }
    }

    fn is_live(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() < ttl
    }
}

/// Thread-safe memoization cache for suggestion results.
pub struct SuggestionCache {
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    /// Insertion/recency order, oldest key at the front.
    order: VecDeque<String>,
    max_size: usize,
    ttl: Duration,
}

impl CacheInner {
    /// Mark a key as most recently used.
    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        self.order.push_back(key.to_string());
    }

    fn drop_key(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.retain(|k| k != key);
    }

    fn evict_over_capacity(&mut self) {
        while self.entries.len() > self.max_size {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            debug!(key = %oldest, "cache at capacity, dropping oldest entry");
            self.entries.remove(&oldest);
        }
    }
}

impl SuggestionCache {
    /// Create a new cache with the given capacity and TTL.
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(max_size),
                order: VecDeque::with_capacity(max_size),
                max_size,
                ttl,
            }),
        }
    }

    /// Create a cache with default settings (500 entries, 1hr TTL).
    pub fn default_cache() -> Self {
        Self::new(500, Duration::from_secs(3600))
    }

    /// Get a cached result. Returns None on miss or expired entry.
    pub fn get(&self, key: &str) -> Option<SuggestionResult> {
        let mut inner = self.inner.lock();
        let ttl = inner.ttl;

        // Taking the entry out lets one lookup serve both the liveness
        // check and the expiry removal.
        let entry = inner.entries.remove(key)?;
        if !entry.is_live(ttl) {
            inner.drop_key(key);
            return None;
        }

        let result = entry.result.clone();
        inner.entries.insert(key.to_string(), entry);
        inner.touch(key);
        Some(result)
    }

    /// Insert a result into the cache.
    pub fn put(&self, key: String, result: SuggestionResult) {
        let mut inner = self.inner.lock();

        let replaced = inner
            .entries
            .insert(key.clone(), CacheEntry::fresh(result))
            .is_some();

        // A brand-new key may push the map over capacity; a replacement
        // cannot. Either way the key ends up most recently used.
        if !replaced {
            inner.evict_over_capacity();
        }
        inner.touch(&key);
    }

    /// Number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }
}
