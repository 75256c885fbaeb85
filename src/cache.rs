use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::parser::parse_with;
use crate::registry::{self, SuffixRegistry, SuffixSet};
use crate::types::ParsedDomain;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Domain parser with LRU caching of results.
///
/// Results are keyed by the raw input, so `"WWW.EXAMPLE.COM"` and
/// `"www.example.com"` occupy separate entries with equal values.
pub struct CachedParser<R = &'static SuffixSet> {
    registry: R,
    cache: Mutex<LruCache<String, Option<ParsedDomain>>>,
}

impl CachedParser {
    /// Create a cached parser over the built-in registry
    pub fn new() -> Self {
        Self::with_registry(registry::builtin(), DEFAULT_CACHE_SIZE)
    }
}

impl Default for CachedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SuffixRegistry> CachedParser<R> {
    /// Create a cached parser over the given registry.
    /// A capacity of zero is treated as one.
    pub fn with_registry(registry: R, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            registry,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Set cache size, dropping least recently used entries if shrinking
    pub fn with_capacity(self, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        self.cache.lock().resize(cache_size);
        self
    }

    /// Parse a domain, consulting the cache first
    pub fn parse<T: AsRef<str>>(&self, domain: T) -> Option<ParsedDomain> {
        let domain = domain.as_ref();
        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(domain) {
            return cached.clone();
        }

        // Parsing is CPU-only, so computing under the lock is fine
        let result = parse_with(domain, &self.registry);
        cache.put(domain.to_string(), result.clone());
        result
    }

    /// Underlying registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Number of cached entries
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}
