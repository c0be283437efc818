//! Configuration Module
//!
//! Handles loading and managing shell configuration from environment
//! variables.

use std::env;

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI catalog service
    pub base_url: String,
    /// Cache entry lifetime and sweep cadence, in seconds
    pub cache_interval_secs: u64,
    /// HTTP request timeout, in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - Catalog base URL (default: `https://pokeapi.co/api/v2`)
    /// - `CACHE_INTERVAL_SECS` - Cache TTL / sweep cadence in seconds (default: 60)
    /// - `HTTP_TIMEOUT_SECS` - HTTP timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "https://pokeapi.co/api/v2".to_string()),
            cache_interval_secs: env::var("CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            cache_interval_secs: 60,
            http_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval_secs, 60);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_INTERVAL_SECS");
        env::remove_var("HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval_secs, 60);
        assert_eq!(config.http_timeout_secs, 30);
    }
}
