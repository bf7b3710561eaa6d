//! Pokedex - an interactive PokeAPI client
//!
//! Browses location areas and catches pokemon from a REPL backed by a TTL
//! response cache.

use std::io;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::commands::State;
use pokedex::{repl, Cache, Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Parse command-line flags
/// 3. Load configuration from environment variables, flags taking precedence
/// 4. Create the response cache, which starts its reaper
/// 5. Create the PokeAPI client
/// 6. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the REPL, override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_cli(&cli);
    info!(
        "Configuration loaded: cache_ttl={}s, api_base={}, http_timeout={}s",
        config.cache_ttl, config.api_base, config.http_timeout
    );

    let cache = Cache::new(config.cache_ttl_duration());
    info!("Response cache initialized");

    let api = PokeApiClient::from_config(&config, cache.clone())
        .context("failed to build HTTP client")?;

    let mut state = State::new(api);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    repl::run(&mut state, stdin, &mut stdout)
        .await
        .context("terminal I/O failed")?;

    let stats = cache.stats();
    info!(
        "Cache stats: hits={}, misses={}, reaped={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.total_entries,
        stats.hit_rate()
    );

    Ok(())
}
