//! Caught pokemon collection

use std::collections::BTreeMap;

use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

/// The trainer's box: at most one pokemon per name, listed alphabetically.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Adds a caught pokemon. Fails if one with the same name is already held.
    pub fn insert(&mut self, pokemon: Pokemon) -> Result<()> {
        if self.contains(&pokemon.name) {
            return Err(PokedexError::AlreadyCaught(pokemon.name));
        }
        self.caught.insert(pokemon.name.clone(), pokemon);
        Ok(())
    }

    /// Removes and returns a pokemon by name.
    pub fn release(&mut self, name: &str) -> Result<Pokemon> {
        self.caught
            .remove(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&Pokemon> {
        self.caught
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.caught.values()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
