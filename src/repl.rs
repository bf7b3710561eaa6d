//! Interactive read loop
//!
//! Reads one command per line until `exit` or end of input. Command failures
//! are printed and the loop carries on.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::commands::{execute, Command, Flow, State};
use crate::error::{PokedexError, Result};

pub const PROMPT: &str = "pokedex > ";

/// Runs the REPL over `input`, writing prompts and command output to `out`.
///
/// Returns an error only when the terminal itself fails.
pub async fn run<R, W>(state: &mut State, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Type 'help' if you need guidance!")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            info!("End of input, leaving REPL");
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                report(&err, out)?;
                continue;
            }
        };

        match execute(state, command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(PokedexError::Io(err)) => return Err(PokedexError::Io(err)),
            Err(err) => report(&err, out)?,
        }
    }

    Ok(())
}

fn report<W: Write>(err: &PokedexError, out: &mut W) -> Result<()> {
    writeln!(out, "{}", err)?;
    if err.is_not_found() {
        writeln!(out, "Check for typos!")?;
    }
    Ok(())
}
