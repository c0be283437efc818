//! Cache Store Module
//!
//! HashMap-backed byte store plus the concurrent `Cache` handle that owns
//! the background sweep task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::cache::{CacheEntry, CacheStats};
use crate::tasks::spawn_sweep_task;

// == Cache Store ==
/// Key-to-bytes storage with a fixed entry lifetime.
///
/// The store itself is synchronous and single-owner; concurrent access
/// goes through [`Cache`], which wraps it in a mutex. The raw map is
/// never exposed.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Entry lifetime, which is also the sweep cadence
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with a fresh creation
    /// timestamp.
    ///
    /// There is no capacity limit and no rejection policy; the call always
    /// succeeds. The boolean result exists purely for API symmetry with
    /// possible future failure modes and is always `true`.
    pub fn add(&mut self, key: String, value: Vec<u8>) -> bool {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Get ==
    /// Returns the stored bytes for `key`, or `None` if absent.
    ///
    /// Deliberately does NOT check expiry: eviction belongs to the sweep
    /// alone, so a logically expired entry is still returned until the
    /// next sweep pass removes it. This keeps the read path O(1) and the
    /// staleness window bounded by the sweep interval.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes all entries older than the configured lifetime.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();

        self.stats.record_evictions(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Cache Handle ==
/// Concurrency-safe TTL cache with an autonomous background sweep.
///
/// Constructing a `Cache` spawns the sweep task as a side effect; there is
/// no separate start call. The task runs until the handle is dropped,
/// which in the shell means until process exit. Dropping the handle aborts
/// the sweep, giving tests a deterministic way to stop it.
#[derive(Debug)]
pub struct Cache {
    /// Shared entry store, guarded by a single mutex
    store: Arc<Mutex<CacheStore>>,
    /// Handle of the background sweep task
    sweeper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates a new cache whose entries expire after `interval`, and
    /// starts the background sweep at the same cadence.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let sweeper = spawn_sweep_task(store.clone(), interval);
        Self { store, sweeper }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`. Always returns `true`.
    ///
    /// The store mutex is held only for the map write; no I/O happens
    /// under the lock.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) -> bool {
        self.store.lock().await.add(key.into(), value)
    }

    // == Get ==
    /// Returns the stored bytes for `key`, or `None` if absent.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
