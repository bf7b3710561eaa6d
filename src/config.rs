//! Configuration Module
//!
//! Loads client configuration from environment variables and applies
//! command-line overrides on top.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::cli::Cli;

/// Default PokeAPI root
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of cached responses, also the reaper period, in seconds
    pub cache_ttl: u64,
    /// PokeAPI base URL without a trailing slash
    pub api_base: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_API_BASE` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds, must be positive (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            api_base: env::var("POKEDEX_API_BASE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base(&v))
                .unwrap_or(defaults.api_base),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Applies command-line flags, which win over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(ttl) = cli.cache_ttl {
            self.cache_ttl = ttl;
        }
        if let Some(base) = &cli.api_base {
            self.api_base = normalize_base(base);
        }
        self
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn http_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: 10,
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
