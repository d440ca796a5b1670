//! Date pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use tracing::trace;

use crate::ast::DatePattern;
use crate::error::PatternError;

/// Global cache for parsed date patterns.
static CACHE: Mutex<Option<LruCache<String, DatePattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a date pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<DatePattern, PatternError> {
    // A poisoned cache holds only fully parsed patterns, so it stays usable
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        trace!(pattern, "date pattern cache hit");
        return Ok(parsed.clone());
    }

    trace!(pattern, "date pattern cache miss");
    let parsed = DatePattern::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_parse_matches_direct_parse() {
        let first = get_or_parse("yyyy-MM-dd").unwrap();
        let second = get_or_parse("yyyy-MM-dd").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, DatePattern::parse("yyyy-MM-dd").unwrap());
    }

    #[test]
    fn test_errors_are_not_cached() {
        assert!(get_or_parse("'open").is_err());
        assert!(get_or_parse("'open").is_err());
    }
}
