//! PokeAPI client
//!
//! Fetches JSON records and keeps the raw response bytes in the shared
//! [`Cache`], keyed by the fully-qualified request URL.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Where a fetched record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

/// A decoded record plus its origin.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    pub fn is_cached(&self) -> bool {
        self.source == Source::Cache
    }
}

/// Client for the PokeAPI REST endpoints
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Cache,
    /// Base URL without a trailing slash
    base_url: String,
}

impl PokeApiClient {
    /// Create a client with a default HTTP client
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), cache, base_url)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(http: Client, cache: Cache, base_url: impl Into<String>) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration, applying the HTTP timeout.
    pub fn from_config(config: &Config, cache: Cache) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout_duration())
            .build()?;
        Ok(Self::with_client(http, cache, config.api_base.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of location areas
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// Fetch a page of location areas from an absolute page URL
    ///
    /// Page URLs come from the API's own `next`/`previous` links, so they are
    /// used verbatim as cache keys.
    pub async fn location_areas(&self, url: &str) -> Result<Fetched<LocationAreaPage>> {
        self.fetch_json(url).await
    }

    /// Fetch one location area by name or id
    pub async fn location_area(&self, name: &str) -> Result<Fetched<LocationArea>> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetch one pokemon by name or id
    pub async fn pokemon(&self, name: &str) -> Result<Fetched<Pokemon>> {
        self.fetch_json(&self.pokemon_url(name)).await
    }

    /// Fetch `url` and decode it as `T`, serving from the cache when possible.
    ///
    /// Only a success response that also decodes as `T` is cached. Transport
    /// errors, non-2xx statuses and malformed bodies never enter the cache.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        if let Some(bytes) = self.cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(Fetched {
                value: serde_json::from_slice(&bytes)?,
                source: Source::Cache,
            });
        }

        debug!(url, "Cache miss, fetching");
        let bytes = self.download(url).await?;
        let value = serde_json::from_slice(&bytes)?;
        self.cache.put(url, bytes);

        Ok(Fetched {
            value,
            source: Source::Network,
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url, %status, "API returned non-success status");
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
