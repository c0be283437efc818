//! Catalog Client Module
//!
//! Thin HTTP client for the PokeAPI catalog service. Every method fetches
//! one resource by URL; command handlers wrap these calls in closures and
//! hand them to the fetch-cache gateway, so the client itself knows
//! nothing about caching.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon, PokemonSpecies};

// == Client ==
/// HTTP client for the PokeAPI REST API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a new client from the shell configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.http_timeout_secs))
                .build()
                .expect("reqwest client"),
        }
    }

    // == URL Builders ==
    /// URL of the first page of the location-area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// URL of a single location area's detail.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single Pokémon's detail.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Typed Fetches ==
    /// Fetches one page of the location-area listing. `url` is either the
    /// listing base URL or a `next`/`previous` URL from an earlier page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.get_json(url).await
    }

    /// Fetches the detail of a single location area.
    pub async fn location_area(&self, url: &str) -> Result<LocationArea> {
        self.get_json(url).await
    }

    /// Fetches a single Pokémon.
    pub async fn pokemon(&self, url: &str) -> Result<Pokemon> {
        self.get_json(url).await
    }

    /// Fetches a Pokémon species (carries the capture rate).
    pub async fn pokemon_species(&self, url: &str) -> Result<PokemonSpecies> {
        self.get_json(url).await
    }

    // == Get JSON ==
    /// Performs a GET request and decodes the JSON body into `T`.
    ///
    /// Non-success statuses are surfaced with the response body attached,
    /// since PokeAPI puts the useful diagnostics there.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            key: url.to_string(),
            source,
        })
    }
}
