//! Pokédex - An interactive catalog shell
//!
//! Pages through PokeAPI location areas, explores them, and catches
//! Pokémon, with a TTL response cache between the shell and the network.

mod cache;
mod client;
mod config;
mod error;
mod models;
mod repl;
mod tasks;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use repl::Shell;

/// Main entry point for the Pokédex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shell, which builds the catalog client and the TTL cache
///    (spawning the background sweep task as a side effect)
/// 4. Run the interactive loop until `exit` or end-of-input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pokedex shell");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, http_timeout={}s",
        config.base_url, config.cache_interval_secs, config.http_timeout_secs
    );

    // The shell owns the client, the cache, and the caught collection;
    // dropping it at the end aborts the sweep task.
    let mut shell = Shell::new(&config);
    shell.run().await?;

    info!("Shell closed");
    Ok(())
}
