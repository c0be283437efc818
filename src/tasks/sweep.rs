//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the sweep interval
/// between passes. Each pass acquires the store mutex only for the
/// duration of the scan, so a slow fetch elsewhere never blocks it.
///
/// # Arguments
/// * `store` - Shared reference to the entry store
/// * `interval` - Sweep cadence, equal to the entry lifetime
///
/// # Returns
/// A JoinHandle for the spawned task. `Cache` aborts it on drop; tests can
/// abort it directly to stop the sweep deterministically.
pub fn spawn_sweep_task(store: Arc<Mutex<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire the lock and remove entries older than the interval
            let (removed, stats) = {
                let mut store_guard = store.lock().await;
                (store_guard.sweep_expired(), store_guard.stats())
            };

            if removed > 0 {
                info!(
                    "TTL sweep: removed {} expired entries, {} remain (hit rate {:.2})",
                    removed,
                    stats.total_entries,
                    stats.hit_rate()
                );
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
