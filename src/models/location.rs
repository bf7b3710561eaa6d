//! Location area models
//!
//! A paginated listing (`/location-area`) and a single area's detail record
//! (`/location-area/{name}/`).

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of location areas.
///
/// `next` and `previous` are absolute URLs, or null at either end of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of areas across all pages
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail record for one location area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A pokemon that can be encountered in an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of the pokemon found in this area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
