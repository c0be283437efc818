//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cached payload with its creation timestamp.
///
/// Entries are immutable once created: overwriting a key replaces the
/// whole entry, which also resets its age for expiry purposes.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored raw bytes (canonical JSON of a catalog response)
    pub value: Vec<u8>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with a freshly captured creation timestamp.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's age exceeds the given lifetime.
    ///
    /// Boundary condition: the entry is expired only when
    /// `created_at + ttl` is strictly before the current time, so an entry
    /// exactly at the boundary survives until the next sweep pass.
    ///
    /// Note that nothing on the read path calls this: expiry is solely
    /// the background sweep's responsibility, which is what bounds the
    /// documented staleness window to one sweep interval.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at + (ttl.as_millis() as u64) < current_timestamp_ms()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
