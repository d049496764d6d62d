use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Returns `true` when both handles point at the same shared instance.
///
/// Flyweights compare by identity, not by value: two `Arc`s holding equal
/// values are still two allocations.
pub fn is_same_instance<V: ?Sized>(a: &Arc<V>, b: &Arc<V>) -> bool {
    Arc::ptr_eq(a, b)
}

/// Hit/miss counters for a [`FlyweightCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl CacheStats {
    pub fn requests(&self) -> usize {
        self.hits + self.misses
    }

    /// `None` until the first request.
    pub fn hit_ratio(&self) -> Option<f64> {
        match self.requests() {
            0 => None,
            total => Some(self.hits as f64 / total as f64),
        }
    }
}

/// Get-or-create cache of shared, immutable instances.
///
/// Each distinct key maps to exactly one `Arc<V>`. The lookup-or-insert runs
/// under the shard lock of that key, so concurrent first requests for the
/// same key still end up with a single instance.
pub struct FlyweightCache<K, V> {
    entries: DashMap<K, Arc<V>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K, V> FlyweightCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FlyweightCache {
            entries: DashMap::with_capacity(capacity),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Returns the shared instance for `key`, building it on first sight.
    ///
    /// `build` runs at most once per key while the entry is cached, and it
    /// runs with the key's shard locked: it must not call back into this
    /// cache.
    pub fn get_or_create<F>(&self, key: K, build: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(key = ?entry.key(), "reusing flyweight");
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let instance = Arc::new(build(entry.key()));
                tracing::debug!(key = ?entry.key(), "created flyweight");
                Arc::clone(entry.insert(instance).value())
            }
        }
    }

    /// Lookup without creating. Not counted as a hit or miss.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct cached instances.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry for which `keep` returns `false`.
    ///
    /// Handles already given out stay valid; a later request for a dropped
    /// key builds a fresh instance. `keep` runs with each shard locked in
    /// turn: it must not call back into this cache.
    pub fn retain<F>(&self, mut keep: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut removed = 0;
        self.entries.retain(|key, value| {
            let kept = keep(key, &**value);
            if !kept {
                removed += 1;
            }
            kept
        });
        tracing::debug!(removed, remaining = self.entries.len(), "pruned flyweights");
        removed
    }

    pub fn clear(&self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "cleared flyweight cache");
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    /// Point-in-time copy of the cached entries, in no particular order.
    pub fn snapshot(&self) -> Vec<(K, Arc<V>)> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect()
    }

    /// Visits a point-in-time copy of the cached entries.
    ///
    /// No lock is held while `visit` runs, so it may call back into this
    /// cache. Entries it adds are not visited.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self.snapshot() {
            visit(&key, &value);
        }
    }
}

impl<K, V> Default for FlyweightCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for FlyweightCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlyweightCache")
            .field("stats", &self.stats())
            .finish()
    }
}
