//! Commands Module
//!
//! Parses REPL input lines into [`Command`]s and runs them against the
//! session state.
//!
//! # Commands
//! - `help` - Print the command list
//! - `exit` - Leave the REPL
//! - `mapf` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List the pokemon found in an area
//! - `catch <pokemon>` - Throw a ball; a catch is stored in the pokedex
//! - `release <pokemon>` - Remove a caught pokemon
//! - `inspect <pokemon>` - Show a caught pokemon's stats
//! - `pokedex` - List caught pokemon

pub mod handlers;

pub use handlers::{execute, Flow, State};

use crate::error::{PokedexError, Result};

/// Name, usage and description of every command, in help order.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("help", "help", "Displays this help message"),
    ("exit", "exit", "Exits the Pokedex"),
    ("mapf", "mapf", "Shows the next 20 location areas"),
    ("mapb", "mapb", "Shows the previous 20 location areas"),
    ("explore", "explore <area>", "Lists the pokemon found in an area"),
    ("catch", "catch <pokemon>", "Attempts to catch a pokemon"),
    ("release", "release <pokemon>", "Releases a caught pokemon"),
    ("inspect", "inspect <pokemon>", "Prints a caught pokemon's stats"),
    ("pokedex", "pokedex", "Lists the pokemon you have caught"),
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    MapForward,
    MapBack,
    Explore(String),
    Catch(String),
    Release(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Words are case-insensitive and only
    /// the first argument is used; extra words are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let name = name.to_lowercase();
        let arg = words.next().map(str::to_lowercase);

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "mapf" => Command::MapForward,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(require(arg, "explore <area>")?),
            "catch" => Command::Catch(require(arg, "catch <pokemon>")?),
            "release" => Command::Release(require(arg, "release <pokemon>")?),
            "inspect" => Command::Inspect(require(arg, "inspect <pokemon>")?),
            "pokedex" => Command::Pokedex,
            _ => return Err(PokedexError::UnknownCommand(name)),
        };
        Ok(Some(command))
    }
}

fn require(arg: Option<String>, usage: &'static str) -> Result<String> {
    arg.ok_or(PokedexError::MissingArgument(usage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("  EXIT ").unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse("mapf").unwrap(), Some(Command::MapForward));
        assert_eq!(Command::parse("mapb").unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse("pokedex").unwrap(), Some(Command::Pokedex));
    }

    #[test]
    fn test_parse_argument_commands() {
        assert_eq!(
            Command::parse("explore pastoria-city-area").unwrap(),
            Some(Command::Explore("pastoria-city-area".to_string()))
        );
        assert_eq!(
            Command::parse("catch Pikachu extra words").unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse("release pikachu").unwrap(),
            Some(Command::Release("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse("inspect pikachu").unwrap(),
            Some(Command::Inspect("pikachu".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        let result = Command::parse("catch");
        assert!(matches!(
            result,
            Err(PokedexError::MissingArgument("catch <pokemon>"))
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        let result = Command::parse("fly cerulean");
        assert!(matches!(result, Err(PokedexError::UnknownCommand(name)) if name == "fly"));
    }

    #[test]
    fn test_every_listed_command_parses() {
        for (name, _, _) in COMMANDS {
            let line = format!("{} arg", name);
            assert!(Command::parse(&line).unwrap().is_some(), "{} should parse", name);
        }
    }
}
