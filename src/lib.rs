//! Pokédex - An interactive catalog shell
//!
//! Pages through PokeAPI location areas, explores them, and catches
//! Pokémon, with a TTL response cache between the shell and the network.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::{fetch_with_cache, Cache};
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{Error, Result};
pub use repl::Shell;
