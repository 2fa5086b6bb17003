//! In-memory component cache.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::fingerprint::Fingerprint;

/// Default capacity of both transform-layer caches.
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Bounded LRU cache mapping content fingerprints to finished component
/// strings.
///
/// Entries have no TTL and no explicit invalidation; they leave the cache
/// only through capacity eviction or process exit. A stored component is
/// immutable — the same string is served for every hit on its fingerprint.
#[derive(Debug)]
pub struct TransformCache {
    entries: LruCache<Fingerprint, String>,
}

impl TransformCache {
    /// Create a cache with the default capacity of 1000 entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up a cached component, promoting it to most-recently-used.
    pub fn get(&mut self, fingerprint: &Fingerprint) -> Option<&str> {
        self.entries.get(fingerprint).map(String::as_str)
    }

    /// Whether an entry exists, without touching recency.
    #[must_use]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains(fingerprint)
    }

    /// Store a component, evicting the least-recently-used entry when at
    /// capacity.
    pub fn put(&mut self, fingerprint: Fingerprint, component: String) {
        self.entries.put(fingerprint, component);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransformCache {
    fn default() -> Self {
        Self::new()
    }
}
