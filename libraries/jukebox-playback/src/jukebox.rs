//! Power-gated jukebox facade
//!
//! Translates button presses into player calls. Every operation except
//! the power switch fails with `IllegalOperation` while powered off.

use crate::{player::Player, selector::Selector, types::PlayerState, PlayerEvent};
use jukebox_core::{Album, AlbumId, JukeboxError, Result, Track};

const RULE_WIDE: usize = 50;
const RULE_NARROW: usize = 40;

/// Jukebox front panel
#[derive(Debug)]
pub struct Jukebox {
    player: Player,
    powered_on: bool,
}

impl Jukebox {
    /// Wrap a player; the jukebox starts powered off
    pub fn new(player: Player) -> Self {
        Self {
            player,
            powered_on: false,
        }
    }

    // ===== Power =====

    /// Returns `false` if already on
    pub fn power_on(&mut self) -> bool {
        if self.powered_on {
            tracing::info!("Jukebox is already powered on");
            return false;
        }
        self.powered_on = true;
        tracing::info!("Jukebox powered on");
        true
    }

    /// Stops playback and powers off; returns `false` if already off
    pub fn power_off(&mut self) -> bool {
        if !self.powered_on {
            tracing::info!("Jukebox is already powered off");
            return false;
        }
        if !self.player.is_stopped() {
            self.player.stop();
        }
        self.powered_on = false;
        tracing::info!("Jukebox powered off");
        true
    }

    pub fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    // ===== Buttons =====

    /// Resume if paused, pause if playing, otherwise start playing
    ///
    /// Starting plays the playlist's current track. Returns the resulting
    /// state.
    pub fn play_pause(&mut self) -> Result<PlayerState> {
        self.ensure_powered()?;

        match self.player.state() {
            PlayerState::Playing => {
                self.player.pause();
            }
            PlayerState::Paused => {
                self.player.resume();
            }
            PlayerState::Stopped => {
                if self.player.playlist().is_empty() {
                    return Err(JukeboxError::invalid_argument(
                        "Cannot play: playlist is empty",
                    ));
                }
                match self.player.playlist().current_track().cloned() {
                    Some(track) => self.player.play_track(&track)?,
                    None => self.player.play_next()?,
                }
            }
        }

        Ok(self.player.state())
    }

    /// Pause playback; returns `false` unless something was playing
    pub fn pause(&mut self) -> Result<bool> {
        self.ensure_powered()?;
        Ok(self.player.pause())
    }

    /// Resume playback; returns `false` unless something was paused
    pub fn resume(&mut self) -> Result<bool> {
        self.ensure_powered()?;
        Ok(self.player.resume())
    }

    pub fn stop(&mut self) -> Result<()> {
        self.ensure_powered()?;
        self.player.stop();
        Ok(())
    }

    /// Play a specific playlist track
    pub fn play_track(&mut self, track: &Track) -> Result<()> {
        self.ensure_powered()?;
        self.player.play_track(track)
    }

    /// Returns `false` if the album was already in the collection
    pub fn add_album(&mut self, album: Album) -> Result<bool> {
        self.ensure_powered()?;
        Ok(self.player.add_album(album))
    }

    /// Returns `false` if the album was not in the collection
    pub fn remove_album(&mut self, album_id: &AlbumId) -> Result<bool> {
        self.ensure_powered()?;
        Ok(self.player.remove_album(album_id))
    }

    pub fn load_album(&mut self, album_id: &AlbumId) -> Result<()> {
        self.ensure_powered()?;
        self.player.load_album(album_id)
    }

    /// Returns `false` if no album was loaded
    pub fn eject_album(&mut self) -> Result<bool> {
        self.ensure_powered()?;
        Ok(self.player.eject_album())
    }

    // ===== Display =====

    /// Player status block
    pub fn status(&self) -> Result<String> {
        self.ensure_powered()?;

        let player = &self.player;
        let album = match (player.loaded_album(), player.loaded_album_id()) {
            (Some(album), _) => album.title().to_string(),
            (None, Some(_)) => "(not in collection)".to_string(),
            (None, None) => "None".to_string(),
        };
        let playing = player
            .currently_playing()
            .map_or_else(|| "None".to_string(), |t| t.title().to_string());
        let rule = "=".repeat(RULE_WIDE);

        let lines = [
            rule.clone(),
            "JUKEBOX STATUS".to_string(),
            rule.clone(),
            format!("State: {}", player.state()),
            format!("Current album: {album}"),
            format!("Now playing: {playing}"),
            format!(
                "Playlist: {} ({} songs)",
                player.playlist().name(),
                player.playlist().len()
            ),
            format!("Albums in collection: {}", player.albums().len()),
            rule,
        ];
        Ok(lines.join("\n"))
    }

    /// Playlist with the current track marked
    pub fn playlist_listing(&self) -> Result<String> {
        self.ensure_powered()?;

        let playlist = self.player.playlist();
        let current = playlist.current_track();
        let rule = "-".repeat(RULE_NARROW);

        let mut lines = vec![playlist.to_string(), rule.clone()];
        if playlist.is_empty() {
            lines.push("No songs in playlist".to_string());
        } else {
            lines.extend(playlist.tracks().iter().enumerate().map(|(i, track)| {
                let marker = if Some(track) == current { "► " } else { "  " };
                format!("{marker}{:>2}. {track}", i + 1)
            }));
        }
        lines.push(rule);
        Ok(lines.join("\n"))
    }

    /// Album collection with the loaded album marked
    pub fn collection_listing(&self) -> Result<String> {
        self.ensure_powered()?;

        let loaded = self.player.loaded_album_id();
        let rule = "-".repeat(RULE_NARROW);

        let mut lines = vec!["ALBUM COLLECTION".to_string(), rule.clone()];
        if self.player.albums().is_empty() {
            lines.push("No albums in collection".to_string());
        } else {
            lines.extend(self.player.albums().iter().enumerate().map(|(i, album)| {
                let marker = if Some(album.id()) == loaded { "► " } else { "  " };
                format!("{marker}{:>2}. {album}", i + 1)
            }));
        }
        lines.push(rule);
        Ok(lines.join("\n"))
    }

    // ===== Accessors =====

    /// Read-only view of the player, available regardless of power
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.player.drain_events()
    }

    /// Fails with `IllegalOperation` while powered off
    pub fn ensure_powered(&self) -> Result<()> {
        if self.powered_on {
            Ok(())
        } else {
            Err(JukeboxError::illegal_operation(
                "Jukebox is powered off, power on first",
            ))
        }
    }
}

impl Selector for Jukebox {
    fn next_track(&mut self) -> Result<()> {
        self.ensure_powered()?;
        self.player.play_next()
    }

    fn prev_track(&mut self) -> Result<()> {
        self.ensure_powered()?;
        self.player.play_prev()
    }

    fn add_to_playlist(&mut self, track: Track) -> Result<bool> {
        self.ensure_powered()?;
        let title = track.title().to_string();
        let added = self.player.add_to_playlist(track);
        if added {
            tracing::info!(track = %title, "Track added to playlist");
        } else {
            tracing::info!(track = %title, "Track already in playlist");
        }
        Ok(added)
    }

    fn remove_from_playlist(&mut self, track: &Track) -> Result<bool> {
        self.ensure_powered()?;
        let removed = self.player.remove_from_playlist(track);
        if removed {
            tracing::info!(track = %track.title(), "Track removed from playlist");
        } else {
            tracing::info!(track = %track.title(), "Track not found in playlist");
        }
        Ok(removed)
    }

    fn toggle_shuffle(&mut self) -> Result<bool> {
        self.ensure_powered()?;
        if self.player.playlist().is_empty() {
            return Err(JukeboxError::invalid_argument(
                "Cannot shuffle: playlist is empty",
            ));
        }
        Ok(self.player.toggle_shuffle())
    }
}
