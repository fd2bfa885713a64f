//! Freshness cache
//!
//! Keyed cache with a fixed TTL. Entries are replaced atomically as whole
//! records; readers always observe a consistent snapshot. A stale entry is
//! still served (stale-while-revalidate) — callers check `is_fresh` to
//! decide whether to refetch, and the in-flight set gives the
//! at-most-one-fetch-per-key discipline.

use dashmap::DashMap;
use shared::{Timestamp, util::now_millis};
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// One cached entry
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    data: Arc<V>,
    fetched_at: Timestamp,
}

/// A read out of the cache, fresh or stale
#[derive(Debug, Clone)]
pub struct CacheRead<V> {
    pub data: Arc<V>,
    pub fetched_at: Timestamp,
    pub is_fresh: bool,
}

/// TTL cache keyed by category (or any other key)
pub struct FreshnessCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    in_flight: DashMap<K, ()>,
    ttl: Duration,
}

impl<K: Eq + Hash + Clone, V> FreshnessCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            in_flight: DashMap::new(),
            ttl,
        }
    }

    /// Read the cached entry, if any, and whether it is still fresh
    pub fn read(&self, key: &K) -> Option<CacheRead<V>> {
        let entry = self.entries.get(key)?;
        let age = now_millis().saturating_sub(entry.fetched_at);
        Some(CacheRead {
            data: Arc::clone(&entry.data),
            fetched_at: entry.fetched_at,
            is_fresh: (age as u128) < self.ttl.as_millis(),
        })
    }

    /// True when the key has a fresh entry
    pub fn is_fresh(&self, key: &K) -> bool {
        self.read(key).is_some_and(|r| r.is_fresh)
    }

    /// Replace the key's entry as a whole record
    pub fn insert(&self, key: K, data: V) -> Arc<V> {
        let data = Arc::new(data);
        self.entries.insert(
            key,
            CacheEntry {
                data: Arc::clone(&data),
                fetched_at: now_millis(),
            },
        );
        data
    }

    /// Drop the key's entry
    pub fn invalidate(&self, key: &K) {
        self.entries.remove(key);
    }

    /// Claim the in-flight slot for a key
    ///
    /// Returns false when a fetch for this key is already running.
    pub fn begin(&self, key: K) -> bool {
        match self.in_flight.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(());
                true
            }
        }
    }

    /// Release the in-flight slot
    pub fn finish(&self, key: &K) {
        self.in_flight.remove(key);
    }

    /// True when a fetch for this key is in flight
    pub fn is_in_flight(&self, key: &K) -> bool {
        self.in_flight.contains_key(key)
    }
}
