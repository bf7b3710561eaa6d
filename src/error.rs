//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror. The cache itself is
//! infallible; these cover the network, decoding and command layers.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned non-OK status {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// Response body was not the JSON shape we expected
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// First word of the input line is not a known command
    #[error("Sorry I don't understand '{0}', type 'help' for commands")]
    UnknownCommand(String),

    /// Command needs an argument that was not given
    #[error("Incorrect format - use: {0}")]
    MissingArgument(&'static str),

    /// Pokemon is already in the collection
    #[error("Don't be greedy! You already caught {0}, one per trainer")]
    AlreadyCaught(String),

    /// Pokemon is not in the collection
    #[error("You have not caught {0}!")]
    NotCaught(String),
}

impl PokedexError {
    /// Returns true for a 404 from the API, usually a typo in a name.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PokedexError::Status { status, .. } if *status == StatusCode::NOT_FOUND
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
