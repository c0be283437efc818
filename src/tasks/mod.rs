//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries at the configured cadence

mod sweep;

pub use sweep::spawn_sweep_task;
