//! Command handlers
//!
//! Each handler writes its user-facing output to the supplied writer and
//! returns whether the REPL should keep going.

use std::io::Write;

use tracing::debug;

use super::{Command, COMMANDS};
use crate::api::{Fetched, PokeApiClient};
use crate::capture::{self, CaptureOutcome};
use crate::error::{PokedexError, Result};
use crate::pokedex::Pokedex;
use crate::session::BrowseSession;

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a command can read or change.
pub struct State {
    pub api: PokeApiClient,
    pub browse: BrowseSession,
    pub pokedex: Pokedex,
    roller: Box<dyn FnMut() -> u32 + Send>,
}

impl State {
    /// Creates fresh session state that rolls captures with the thread RNG.
    pub fn new(api: PokeApiClient) -> Self {
        Self {
            api,
            browse: BrowseSession::new(),
            pokedex: Pokedex::new(),
            roller: Box::new(|| capture::roll(&mut rand::rng())),
        }
    }

    /// Replaces the capture roll source.
    pub fn with_roller(mut self, roller: impl FnMut() -> u32 + Send + 'static) -> Self {
        self.roller = Box::new(roller);
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Back,
}

/// Runs one command.
pub async fn execute<W: Write>(state: &mut State, command: Command, out: &mut W) -> Result<Flow> {
    debug!(?command, "Executing command");

    match command {
        Command::Help => help(out)?,
        Command::Exit => {
            writeln!(out, "Exiting Pokedex!")?;
            return Ok(Flow::Exit);
        }
        Command::MapForward => map_page(state, Direction::Forward, out).await?,
        Command::MapBack => map_page(state, Direction::Back, out).await?,
        Command::Explore(area) => explore(state, &area, out).await?,
        Command::Catch(name) => catch(state, &name, out).await?,
        Command::Release(name) => {
            let released = state.pokedex.release(&name)?;
            writeln!(out, "{} was released. Bye, {}!", released.name, released.name)?;
        }
        Command::Inspect(name) => inspect(&state.pokedex, &name, out)?,
        Command::Pokedex => list_pokedex(&state.pokedex, out)?,
    }

    Ok(Flow::Continue)
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    for (_, usage, description) in COMMANDS {
        writeln!(out, "  {:<20} {}", usage, description)?;
    }
    Ok(())
}

fn report_source<T, W: Write>(fetched: &Fetched<T>, out: &mut W) -> Result<()> {
    if fetched.is_cached() {
        writeln!(out, "Using Cached Data")?;
    } else {
        writeln!(out, "Fetching New Data")?;
    }
    Ok(())
}

async fn map_page<W: Write>(state: &mut State, direction: Direction, out: &mut W) -> Result<()> {
    let first_page = state.api.location_areas_url();
    let url = match direction {
        Direction::Forward => state.browse.next_url(&first_page),
        Direction::Back => state.browse.previous_url(&first_page),
    };

    let Some(url) = url else {
        match direction {
            Direction::Forward => writeln!(out, "Last Page!")?,
            Direction::Back => writeln!(out, "First Page!")?,
        }
        return Ok(());
    };

    let fetched = state.api.location_areas(&url).await?;
    report_source(&fetched, out)?;

    writeln!(out, "Areas:")?;
    writeln!(out, "--------------")?;
    for area in &fetched.value.results {
        writeln!(out, "{}", area.name)?;
    }

    state.browse.advance(fetched.value);
    Ok(())
}

async fn explore<W: Write>(state: &State, area: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Exploring {}...", area)?;
    let fetched = state.api.location_area(area).await?;
    report_source(&fetched, out)?;

    writeln!(out, "Local Pokemon:")?;
    writeln!(out, "--------------")?;
    for name in fetched.value.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

async fn catch<W: Write>(state: &mut State, name: &str, out: &mut W) -> Result<()> {
    // Duplicate check precedes the fetch
    if state.pokedex.contains(name) {
        return Err(PokedexError::AlreadyCaught(name.to_string()));
    }

    let pokemon = state.api.pokemon(name).await?.value;
    // Lookups by id resolve to the canonical name the collection is keyed by
    if state.pokedex.contains(&pokemon.name) {
        return Err(PokedexError::AlreadyCaught(pokemon.name));
    }
    writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

    let roll = (state.roller)();
    let outcome = capture::resolve(roll, pokemon.base_experience);
    debug!(
        name = %pokemon.name,
        roll,
        base_experience = pokemon.base_experience,
        ?outcome,
        "Capture roll"
    );

    match outcome {
        CaptureOutcome::Caught => {
            writeln!(out, ".\n.\n.")?;
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            state.pokedex.insert(pokemon)?;
        }
        CaptureOutcome::CloseEscape => {
            writeln!(out, ".\n.")?;
            writeln!(out, "{} escaped! So close!", pokemon.name)?;
        }
        CaptureOutcome::Escaped => {
            writeln!(out, ".")?;
            writeln!(out, "{} immediately escaped!", pokemon.name)?;
        }
    }
    Ok(())
}

fn inspect<W: Write>(pokedex: &Pokedex, name: &str, out: &mut W) -> Result<()> {
    let pokemon = pokedex.get(name)?;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    Ok(())
}

fn list_pokedex<W: Write>(pokedex: &Pokedex, out: &mut W) -> Result<()> {
    if pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty. Go catch some pokemon!")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for pokemon in pokedex.iter() {
        writeln!(out, " - {} {}", pokemon.id, pokemon.name)?;
    }
    Ok(())
}
