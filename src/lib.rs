//! Pokedex - an interactive PokeAPI client
//!
//! Browses location areas and catches pokemon from a REPL. API responses are
//! kept in an in-memory cache whose entries a background reaper removes once
//! they outlive the configured TTL.

pub mod api;
pub mod cache;
pub mod capture;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod session;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::spawn_reaper;
