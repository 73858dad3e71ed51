//! Interactive and scripted console sessions

use crate::commands::{execute, Command};
use crate::error::Result;
use jukebox_playback::Jukebox;
use std::io::{BufRead, Write};

const PROMPT: &str = "jukebox> ";

/// The scripted tour of the front panel
const DEMO_STEPS: &[(&str, &str)] = &[
    ("Powering on the jukebox", "power-on"),
    ("Displaying playlist", "playlist"),
    ("Displaying album collection", "collection"),
    ("Playing first track", "play"),
    ("Playing next track", "next"),
    ("Pausing playback", "play"),
    ("Resuming playback", "play"),
    ("Shuffling playlist", "shuffle"),
    ("Displaying shuffled playlist", "playlist"),
    ("Unshuffling playlist", "shuffle"),
    ("Displaying playlist", "playlist"),
    ("Stopping playback", "stop"),
    ("Final status check", "status"),
    ("Powering off jukebox", "power-off"),
];

/// Read commands line by line until `quit` or end of input
///
/// Failures are reported on `output` and the session carries on.
pub fn run_repl<R, W>(jukebox: &mut Jukebox, input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Jukebox console. Type 'help' for commands.")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() {
            match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    writeln!(output, "{}", execute(jukebox, Command::Quit)?)?;
                    return Ok(());
                }
                Ok(command) => match execute(jukebox, command) {
                    Ok(message) => writeln!(output, "{message}")?,
                    Err(err) => writeln!(output, "Error: {err}")?,
                },
                Err(err) => writeln!(output, "Error: {err}")?,
            }
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

/// Run commands in order, stopping at the first failure
///
/// Each item may hold several commands separated by `;`.
pub fn run_script<S, W>(jukebox: &mut Jukebox, script: &[S], output: &mut W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    let lines = script
        .iter()
        .flat_map(|item| item.as_ref().split(';'))
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for line in lines {
        let command: Command = line.parse()?;
        if command == Command::Quit {
            break;
        }
        tracing::debug!(command = line, "Executing");
        let message = execute(jukebox, command)?;
        writeln!(output, "{message}")?;
    }

    Ok(())
}

/// Walk through the front panel with narration
pub fn run_demo<W: Write>(jukebox: &mut Jukebox, output: &mut W) -> Result<()> {
    writeln!(output, "Digital Jukebox Demo")?;
    writeln!(output)?;

    for (narration, line) in DEMO_STEPS {
        writeln!(output, "Demo: {narration}...")?;
        let message = execute(jukebox, line.parse()?)?;
        writeln!(output, "{message}")?;
        writeln!(output)?;
    }

    writeln!(output, "Demo completed!")?;
    Ok(())
}
