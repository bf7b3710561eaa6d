//! PokeAPI response models
//!
//! Only the fields the commands read are modelled; serde ignores the rest of
//! each payload.

pub mod location;
pub mod pokemon;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` reference, PokeAPI's universal link shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
