//! Cache Module
//!
//! Provides the in-memory TTL response cache and the fetch-cache gateway
//! that sits between the shell's command handlers and the remote catalog
//! client.

mod entry;
mod gateway;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use gateway::fetch_with_cache;
pub use stats::CacheStats;
pub use store::{Cache, CacheStore};
