//! Command-line interface parsing for the Pokedex CLI
//!
//! Flags here override the matching environment variables in [`Config`](crate::Config).

use clap::Parser;

/// Pokedex - browse PokeAPI location areas and catch pokemon from a REPL
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached API response is kept before the reaper removes it
    #[arg(long, value_name = "SECONDS")]
    pub cache_ttl: Option<u64>,

    /// PokeAPI base URL, e.g. https://pokeapi.co/api/v2
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}
