//! In-process TTL cache.
//!
//! A small read-through cache for expensive responses. Entries expire lazily:
//! an expired entry is evicted the next time it is read, there is no
//! background sweeper. All operations are infallible; a cache problem must
//! never fail the request that touched it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

/// Default entry lifetime when the caller does not pass one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    /// None means the entry never expires.
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}

/// Thread-safe TTL cache keyed by string.
///
/// Cloning is cheap and clones share the same underlying map, so a single
/// instance constructed at startup can be carried in application state and
/// handed to every handler.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
    default_ttl: Duration,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            default_ttl: self.default_ttl,
        }
    }
}

impl<V: Clone> TtlCache<V> {
    /// Creates a cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
        }
    }

    /// Returns the live value for `key`, if any.
    ///
    /// An expired entry is removed on this access and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();

        // Fast path: read lock only
        {
            let entries = self.read_entries();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {} // expired, fall through to evict
                None => return None,
            }
        }

        // Evict under the write lock; re-check since another thread may have
        // replaced the entry in the meantime
        let mut entries = self.write_entries();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` under `key` with the default TTL.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, Some(self.default_ttl));
    }

    /// Stores `value` under `key` with an explicit TTL.
    ///
    /// `None` stores an entry that never expires.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.write_entries().insert(key.into(), entry);
    }

    /// Removes the entry stored under exactly `key`.
    ///
    /// Returns whether an entry was present.
    pub fn remove(&self, key: &str) -> bool {
        self.write_entries().remove(key).is_some()
    }

    /// Removes every entry whose key starts with `prefix` and returns how
    /// many were dropped.
    ///
    /// This is the invalidation primitive for grouped keys: writers that
    /// change the underlying data call this with the group prefix instead of
    /// trying to enumerate every key shape a reader may have cached.
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.write_entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.write_entries().clear();
    }

    // A poisoned lock only means some thread panicked mid-operation; the map
    // itself is still usable, so recover the guard instead of propagating.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn cache() -> TtlCache<String> {
        TtlCache::new(Duration::from_secs(300))
    }

    // ===========================================
    // Basic Get/Set Tests
    // ===========================================

    #[test]
    fn test_miss_then_populate_then_hit() {
        let cache = cache();

        assert_eq!(cache.get("students:list:?page=1"), None);

        cache.set("students:list:?page=1", "payload".to_string());
        assert_eq!(
            cache.get("students:list:?page=1"),
            Some("payload".to_string())
        );
    }

    #[test]
    fn test_set_overwrites() {
        let cache = cache();
        cache.set("k", "v1".to_string());
        cache.set("k", "v2".to_string());
        assert_eq!(cache.get("k"), Some("v2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_len_and_clear() {
        let cache = cache();
        assert!(cache.is_empty());
        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    // ===========================================
    // Expiry Tests
    // ===========================================

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = cache();
        cache.set_with_ttl("k", "v".to_string(), Some(Duration::from_secs(1)));

        assert_eq!(cache.get("k"), Some("v".to_string()));

        sleep(Duration::from_millis(1100));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_expired_entry_evicted_on_access() {
        let cache = cache();
        cache.set_with_ttl("k", "v".to_string(), Some(Duration::from_millis(10)));
        sleep(Duration::from_millis(30));

        assert_eq!(cache.len(), 1, "no sweeper; entry lingers until read");
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.len(), 0, "read evicts the expired entry");
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let cache = cache();
        cache.set_with_ttl("k", "v".to_string(), None);
        sleep(Duration::from_millis(50));
        assert_eq!(cache.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_overwrite_resets_deadline() {
        let cache = cache();
        cache.set_with_ttl("k", "v1".to_string(), Some(Duration::from_millis(10)));
        cache.set_with_ttl("k", "v2".to_string(), Some(Duration::from_secs(60)));
        sleep(Duration::from_millis(30));
        assert_eq!(cache.get("k"), Some("v2".to_string()));
    }

    // ===========================================
    // Invalidation Tests
    // ===========================================

    #[test]
    fn test_remove_exact_key() {
        let cache = cache();
        cache.set("k", "v".to_string());

        assert!(cache.remove("k"));
        assert!(!cache.remove("k"));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_invalidate_prefix() {
        let cache = cache();
        cache.set("students:list:?page=1", "a".to_string());
        cache.set("students:list:?page=2", "b".to_string());
        cache.set("students:detail:42", "c".to_string());
        cache.set("analytics:performance", "d".to_string());

        let dropped = cache.invalidate_prefix("students:");

        assert_eq!(dropped, 3);
        assert_eq!(cache.get("students:list:?page=1"), None);
        assert_eq!(cache.get("students:detail:42"), None);
        assert_eq!(cache.get("analytics:performance"), Some("d".to_string()));
    }

    #[test]
    fn test_invalidate_prefix_no_matches() {
        let cache = cache();
        cache.set("analytics:grades", "a".to_string());
        assert_eq!(cache.invalidate_prefix("students:"), 0);
        assert_eq!(cache.len(), 1);
    }

    // ===========================================
    // Sharing Tests
    // ===========================================

    #[test]
    fn test_clones_share_entries() {
        let cache = cache();
        let clone = cache.clone();

        cache.set("k", "v".to_string());
        assert_eq!(clone.get("k"), Some("v".to_string()));

        clone.invalidate_prefix("k");
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_concurrent_access() {
        let cache: TtlCache<i64> = TtlCache::new(Duration::from_secs(300));
        let mut handles = Vec::new();

        for i in 0..8 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                for j in 0..50 {
                    cache.set(format!("k:{}:{}", i, j), j);
                    cache.get(&format!("k:{}:{}", i, j));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 400);
        assert_eq!(cache.invalidate_prefix("k:"), 400);
    }
}
