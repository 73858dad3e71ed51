//! Text commands for the jukebox front panel
//!
//! A command line is a name followed by whitespace-separated arguments.
//! Albums are addressed by their 1-based index in the collection listing,
//! tracks by their position on the album.

use crate::error::{ConsoleError, Result};
use jukebox_core::{Album, JukeboxError, Track};
use jukebox_playback::{Jukebox, PlayerState, Selector};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  power-on                 Switch the jukebox on
  power-off                Stop playback and switch off
  play                     Play, pause or resume
  pause                    Pause playback
  resume                   Resume paused playback
  stop                     Stop playback
  next | prev              Skip forward or back (wraps around)
  shuffle                  Toggle shuffle
  add <album> <pos>        Append an album track to the playlist
  remove <album> <pos>     Remove an album track from the playlist
  play-track <album> <pos> Play a playlist track
  load <album>             Load an album
  eject                    Eject the loaded album
  remove-album <album>     Remove an album and its playlist tracks
  status                   Show player status
  playlist                 Show the playlist
  collection               Show the album collection
  help                     Show this help
  quit                     Leave the console";

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PowerOn,
    PowerOff,
    PlayPause,
    Pause,
    Resume,
    Stop,
    Next,
    Prev,
    Shuffle,
    Add { album: usize, position: u32 },
    Remove { album: usize, position: u32 },
    PlayTrack { album: usize, position: u32 },
    Load { album: usize },
    Eject,
    RemoveAlbum { album: usize },
    Status,
    Playlist,
    Collection,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ConsoleError::Usage("empty command".to_string()));
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_lowercase().as_str() {
            "power-on" | "on" => Command::PowerOn,
            "power-off" | "off" => Command::PowerOff,
            "play" | "play-pause" => Command::PlayPause,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "stop" => Command::Stop,
            "next" => Command::Next,
            "prev" | "previous" => Command::Prev,
            "shuffle" => Command::Shuffle,
            "add" => {
                let (album, position) = album_and_position(&args, "add <album> <pos>")?;
                return Ok(Command::Add { album, position });
            }
            "remove" => {
                let (album, position) = album_and_position(&args, "remove <album> <pos>")?;
                return Ok(Command::Remove { album, position });
            }
            "play-track" => {
                let (album, position) = album_and_position(&args, "play-track <album> <pos>")?;
                return Ok(Command::PlayTrack { album, position });
            }
            "load" => {
                let album = single_album(&args, "load <album>")?;
                return Ok(Command::Load { album });
            }
            "eject" => Command::Eject,
            "remove-album" => {
                let album = single_album(&args, "remove-album <album>")?;
                return Ok(Command::RemoveAlbum { album });
            }
            "status" => Command::Status,
            "playlist" => Command::Playlist,
            "collection" | "albums" => Command::Collection,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ConsoleError::UnknownCommand(name.to_string())),
        };

        if !args.is_empty() {
            return Err(ConsoleError::Usage(format!("{name} takes no arguments")));
        }
        Ok(command)
    }
}

fn album_and_position(args: &[&str], usage: &str) -> Result<(usize, u32)> {
    match args {
        [album, position] => Ok((parse_index(album, usage)?, parse_index(position, usage)?)),
        _ => Err(ConsoleError::Usage(usage.to_string())),
    }
}

fn single_album(args: &[&str], usage: &str) -> Result<usize> {
    match args {
        [album] => parse_index(album, usage),
        _ => Err(ConsoleError::Usage(usage.to_string())),
    }
}

/// Parse a 1-based number
fn parse_index<T>(value: &str, usage: &str) -> Result<T>
where
    T: FromStr + PartialEq + Default,
{
    match value.parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(ConsoleError::Usage(format!(
            "{usage} (expected a number from 1, got '{value}')"
        ))),
    }
}

/// Run a command against the jukebox and describe the outcome
pub fn execute(jukebox: &mut Jukebox, command: Command) -> Result<String> {
    let message = match command {
        Command::PowerOn => {
            if jukebox.power_on() {
                "Jukebox powered on".to_string()
            } else {
                "Jukebox is already powered on".to_string()
            }
        }
        Command::PowerOff => {
            if jukebox.power_off() {
                "Jukebox powered off".to_string()
            } else {
                "Jukebox is already powered off".to_string()
            }
        }
        Command::PlayPause => match jukebox.play_pause()? {
            PlayerState::Playing => now_playing(jukebox),
            PlayerState::Paused => format!("Paused: {}", playing_title(jukebox)),
            PlayerState::Stopped => "Stopped".to_string(),
        },
        Command::Pause => {
            if jukebox.pause()? {
                format!("Paused: {}", playing_title(jukebox))
            } else {
                format!("Nothing to pause ({})", jukebox.player().state())
            }
        }
        Command::Resume => {
            if jukebox.resume()? {
                now_playing(jukebox)
            } else {
                format!("Nothing to resume ({})", jukebox.player().state())
            }
        }
        Command::Stop => {
            jukebox.stop()?;
            "Playback stopped".to_string()
        }
        Command::Next => {
            jukebox.next_track()?;
            now_playing(jukebox)
        }
        Command::Prev => {
            jukebox.prev_track()?;
            now_playing(jukebox)
        }
        Command::Shuffle => {
            if jukebox.toggle_shuffle()? {
                "Playlist shuffled".to_string()
            } else {
                "Playlist restored to album order".to_string()
            }
        }
        Command::Add { album, position } => {
            let track = resolve_track(jukebox, album, position)?;
            let title = track.title().to_string();
            if jukebox.add_to_playlist(track)? {
                format!("Added '{title}' to playlist")
            } else {
                format!("'{title}' is already in playlist")
            }
        }
        Command::Remove { album, position } => {
            let track = resolve_track(jukebox, album, position)?;
            if jukebox.remove_from_playlist(&track)? {
                format!("Removed '{}' from playlist", track.title())
            } else {
                format!("'{}' is not in playlist", track.title())
            }
        }
        Command::PlayTrack { album, position } => {
            let track = resolve_track(jukebox, album, position)?;
            jukebox.play_track(&track)?;
            now_playing(jukebox)
        }
        Command::Load { album } => {
            let album = resolve_album(jukebox, album)?;
            jukebox.load_album(&album.id())?;
            format!("Loaded album '{}'", album.title())
        }
        Command::Eject => {
            if jukebox.eject_album()? {
                "Album ejected".to_string()
            } else {
                "No album to eject".to_string()
            }
        }
        Command::RemoveAlbum { album } => {
            let album = resolve_album(jukebox, album)?;
            jukebox.remove_album(&album.id())?;
            format!("Removed album '{}' from collection", album.title())
        }
        Command::Status => jukebox.status()?,
        Command::Playlist => jukebox.playlist_listing()?,
        Command::Collection => jukebox.collection_listing()?,
        Command::Help => HELP.to_string(),
        Command::Quit => "Goodbye".to_string(),
    };

    for event in jukebox.drain_events() {
        tracing::debug!(?event, "Player event");
    }

    Ok(message)
}

fn now_playing(jukebox: &Jukebox) -> String {
    match jukebox.player().currently_playing() {
        Some(track) => format!("Now playing: {track}"),
        None => "Nothing is playing".to_string(),
    }
}

fn playing_title(jukebox: &Jukebox) -> String {
    jukebox
        .player()
        .currently_playing()
        .map_or_else(String::new, |t| t.title().to_string())
}

/// Look up an album by its 1-based collection index
///
/// Checks power first so a powered-off jukebox reports that rather than a
/// lookup failure.
fn resolve_album(jukebox: &Jukebox, index: usize) -> Result<Album> {
    jukebox.ensure_powered()?;
    index
        .checked_sub(1)
        .and_then(|i| jukebox.player().albums().get(i))
        .cloned()
        .ok_or_else(|| {
            JukeboxError::not_found(format!("No album at index {index} in collection")).into()
        })
}

fn resolve_track(jukebox: &Jukebox, album: usize, position: u32) -> Result<Track> {
    let album = resolve_album(jukebox, album)?;
    album.track(position).cloned().ok_or_else(|| {
        JukeboxError::not_found(format!(
            "'{}' has no track at position {position}",
            album.title()
        ))
        .into()
    })
}
