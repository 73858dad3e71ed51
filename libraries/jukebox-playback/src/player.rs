//! Player - playback state machine
//!
//! Coordinates the album collection, the playlist and the playback state

use crate::{
    events::PlayerEvent,
    playlist::Playlist,
    types::{PlayerConfig, PlayerState},
};
use jukebox_core::{Album, AlbumId, JukeboxError, Result, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Playback state together with the track it applies to
///
/// A track exists exactly in the playing and paused states.
#[derive(Debug, Clone, Default, PartialEq)]
enum Transport {
    #[default]
    Stopped,
    Playing(Track),
    Paused(Track),
}

impl Transport {
    fn state(&self) -> PlayerState {
        match self {
            Transport::Stopped => PlayerState::Stopped,
            Transport::Playing(_) => PlayerState::Playing,
            Transport::Paused(_) => PlayerState::Paused,
        }
    }

    fn track(&self) -> Option<&Track> {
        match self {
            Transport::Stopped => None,
            Transport::Playing(track) | Transport::Paused(track) => Some(track),
        }
    }
}

/// Central playback management
///
/// Owns the playlist and the album collection. The playing track, when
/// there is one, is always the playlist's current track; playlist changes
/// therefore go through the player rather than the playlist directly.
///
/// Not thread-safe: wrap the player in a mutex to share it.
#[derive(Debug)]
pub struct Player {
    // State
    transport: Transport,
    loaded_album: Option<AlbumId>,

    // Collection and playlist
    albums: Vec<Album>,
    playlist: Playlist,

    rng: StdRng,

    // Event queue for front-end synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create a player with an empty album collection
    pub fn new(playlist: Playlist, config: PlayerConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            transport: Transport::Stopped,
            loaded_album: None,
            albums: Vec::new(),
            playlist,
            rng,
            pending_events: Vec::new(),
        }
    }

    /// Create a player with an initial album collection
    ///
    /// Albums sharing an id are collapsed to the first one.
    pub fn with_albums(
        playlist: Playlist,
        albums: impl IntoIterator<Item = Album>,
        config: PlayerConfig,
    ) -> Self {
        let mut player = Self::new(playlist, config);
        for album in albums {
            if !player.albums.contains(&album) {
                player.albums.push(album);
            }
        }
        player
    }

    // ===== Playback Control =====

    /// Play a track from the playlist
    pub fn play_track(&mut self, track: &Track) -> Result<()> {
        if !self.playlist.contains(track) {
            return Err(JukeboxError::invalid_argument(format!(
                "'{}' is not in current playlist",
                track.title()
            )));
        }

        self.playlist.set_current_track(track)?;
        self.set_loaded_album(Some(track.album_id()));
        self.transition(Transport::Playing(track.clone()));
        tracing::info!(track = %track, "Now playing");
        Ok(())
    }

    /// Advance the playlist and play the track it lands on
    pub fn play_next(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            tracing::info!("Playlist is empty, cannot play next track");
            return Ok(());
        }

        match self.playlist.next_track().cloned() {
            Some(track) => self.play_track(&track),
            None => Ok(()),
        }
    }

    /// Step the playlist back and play the track it lands on
    pub fn play_prev(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            tracing::info!("Playlist is empty, cannot play previous track");
            return Ok(());
        }

        match self.playlist.prev_track().cloned() {
            Some(track) => self.play_track(&track),
            None => Ok(()),
        }
    }

    /// Pause playback
    ///
    /// Returns `false` without changing anything unless playing.
    pub fn pause(&mut self) -> bool {
        match &self.transport {
            Transport::Playing(track) => {
                tracing::info!(track = %track.title(), "Playback paused");
                let track = track.clone();
                self.transition(Transport::Paused(track));
                true
            }
            _ => {
                tracing::info!(state = %self.state(), "No track is playing to pause");
                false
            }
        }
    }

    /// Resume paused playback
    ///
    /// Returns `false` without changing anything unless paused.
    pub fn resume(&mut self) -> bool {
        match &self.transport {
            Transport::Paused(track) => {
                tracing::info!(track = %track.title(), "Resuming playback");
                let track = track.clone();
                self.transition(Transport::Playing(track));
                true
            }
            _ => {
                tracing::info!(state = %self.state(), "No paused track to resume");
                false
            }
        }
    }

    /// Stop playback
    ///
    /// Keeps the playlist position and the loaded album.
    pub fn stop(&mut self) {
        self.transition(Transport::Stopped);
        tracing::info!("Playback stopped");
    }

    // ===== Album Collection =====

    /// Add an album to the collection
    ///
    /// Returns `false` if an album with the same id is already present.
    pub fn add_album(&mut self, album: Album) -> bool {
        if self.albums.contains(&album) {
            tracing::debug!(album = %album.title(), "Album already in collection");
            return false;
        }

        tracing::info!(album = %album.title(), "Album added to collection");
        let album_id = album.id();
        self.albums.push(album);
        self.emit(PlayerEvent::AlbumAdded { album_id });
        true
    }

    /// Remove an album and every playlist track it owns
    ///
    /// Removing the loaded album stops playback and clears it. Returns
    /// whether the album was in the collection.
    pub fn remove_album(&mut self, album_id: &AlbumId) -> bool {
        if self.loaded_album.as_ref() == Some(album_id) {
            self.stop();
            self.set_loaded_album(None);
        }

        let removed = match self.albums.iter().position(|a| a.id() == *album_id) {
            Some(index) => {
                let album = self.albums.remove(index);
                tracing::info!(album = %album.title(), "Album removed from collection");
                self.emit(PlayerEvent::AlbumRemoved {
                    album_id: *album_id,
                });
                true
            }
            None => false,
        };

        if self
            .currently_playing()
            .is_some_and(|track| track.album_id() == *album_id)
        {
            self.stop();
        }
        let dropped = self.playlist.remove_where(|track| track.album_id() == *album_id);
        if !dropped.is_empty() {
            self.emit(PlayerEvent::PlaylistChanged {
                len: self.playlist.len(),
            });
        }

        removed
    }

    /// Load an album from the collection
    pub fn load_album(&mut self, album_id: &AlbumId) -> Result<()> {
        let Some(album) = self.album(album_id) else {
            return Err(JukeboxError::invalid_argument(
                "Album not in collection, add it first",
            ));
        };

        tracing::info!(album = %album.title(), "Album loaded");
        self.set_loaded_album(Some(*album_id));
        Ok(())
    }

    /// Eject the loaded album, stopping playback first if needed
    ///
    /// Returns `false` if no album was loaded.
    pub fn eject_album(&mut self) -> bool {
        if self.loaded_album.is_none() {
            tracing::info!("No album to eject");
            return false;
        }

        if !self.is_stopped() {
            self.stop();
        }
        self.set_loaded_album(None);
        true
    }

    // ===== Playlist =====

    /// Append a track to the playlist
    ///
    /// Returns `false` if it was already there.
    pub fn add_to_playlist(&mut self, track: Track) -> bool {
        let added = self.playlist.add_track(track);
        if added {
            self.emit(PlayerEvent::PlaylistChanged {
                len: self.playlist.len(),
            });
        }
        added
    }

    /// Remove a track from the playlist
    ///
    /// Removing the playing track stops playback. Returns whether the
    /// track was in the playlist.
    pub fn remove_from_playlist(&mut self, track: &Track) -> bool {
        if self.currently_playing() == Some(track) {
            self.stop();
        }

        let removed = self.playlist.remove_track(track);
        if removed {
            self.emit(PlayerEvent::PlaylistChanged {
                len: self.playlist.len(),
            });
        }
        removed
    }

    /// Shuffle the playlist with the player's RNG
    pub fn shuffle_playlist(&mut self) {
        self.playlist.shuffle_with(&mut self.rng);
        if self.playlist.is_shuffled() {
            self.emit(PlayerEvent::ShuffleChanged { shuffled: true });
        }
    }

    /// Put the playlist back in album order
    pub fn unshuffle_playlist(&mut self) {
        self.playlist.unshuffle();
        self.emit(PlayerEvent::ShuffleChanged { shuffled: false });
    }

    /// Shuffle if in album order, otherwise unshuffle
    ///
    /// Returns the new shuffled flag.
    pub fn toggle_shuffle(&mut self) -> bool {
        if self.playlist.is_shuffled() {
            self.unshuffle_playlist();
        } else {
            self.shuffle_playlist();
        }
        self.playlist.is_shuffled()
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn state(&self) -> PlayerState {
        self.transport.state()
    }

    /// Track that is playing or paused
    pub fn currently_playing(&self) -> Option<&Track> {
        self.transport.track()
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlayerState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.state() == PlayerState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == PlayerState::Stopped
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Albums in the order they were added
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, album_id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| a.id() == *album_id)
    }

    pub fn loaded_album_id(&self) -> Option<AlbumId> {
        self.loaded_album
    }

    /// Loaded album, if it is part of the collection
    pub fn loaded_album(&self) -> Option<&Album> {
        self.loaded_album.as_ref().and_then(|id| self.album(id))
    }

    // ===== Events =====

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    /// Single entry point for state changes
    fn transition(&mut self, next: Transport) {
        let previous_state = self.transport.state();
        let track_changed = match next.track() {
            Some(track) => self.transport.track() != Some(track),
            None => false,
        };

        self.transport = next;

        if track_changed {
            if let Some(track) = self.transport.track().cloned() {
                self.emit(PlayerEvent::TrackChanged { track });
            }
        }

        let state = self.transport.state();
        if state != previous_state {
            tracing::debug!(from = %previous_state, to = %state, "Player state changed");
            self.emit(PlayerEvent::StateChanged { state });
        }
    }

    fn set_loaded_album(&mut self, album_id: Option<AlbumId>) {
        if self.loaded_album == album_id {
            return;
        }

        let previous = std::mem::replace(&mut self.loaded_album, album_id);
        if let Some(album_id) = previous {
            self.emit(PlayerEvent::AlbumEjected { album_id });
        }
        if let Some(album_id) = album_id {
            self.emit(PlayerEvent::AlbumLoaded { album_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jukebox_core::{CreateAlbum, CreateTrack};
    use std::time::Duration;

    fn album(title: &str, count: u32) -> Album {
        let mut album = Album::new(CreateAlbum::new(
            title,
            "Test Artist",
            NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
            "Rock",
        ))
        .unwrap();
        for position in 1..=count {
            album
                .add_track(CreateTrack::new(
                    format!("{title} {position}"),
                    "Test Artist",
                    Duration::from_secs(180),
                    position,
                ))
                .unwrap();
        }
        album
    }

    fn player_with(albums: &[Album]) -> Player {
        let tracks = albums.iter().flat_map(|a| a.tracks().iter().cloned());
        let playlist = Playlist::with_tracks("Test", tracks).unwrap();
        Player::with_albums(
            playlist,
            albums.iter().cloned(),
            PlayerConfig {
                shuffle_seed: Some(9),
            },
        )
    }

    fn assert_invariant(player: &Player) {
        assert_eq!(
            player.currently_playing().is_some(),
            matches!(player.state(), PlayerState::Playing | PlayerState::Paused)
        );
        if let Some(track) = player.currently_playing() {
            assert_eq!(player.playlist().current_track(), Some(track));
        }
    }

    #[test]
    fn starts_stopped() {
        let player = player_with(&[album("X", 2)]);
        assert_eq!(player.state(), PlayerState::Stopped);
        assert!(player.currently_playing().is_none());
        assert!(player.loaded_album().is_none());
    }

    #[test]
    fn play_track_sets_state_cursor_and_album() {
        let x = album("X", 3);
        let mut player = player_with(&[x.clone()]);
        let track = x.tracks()[2].clone();

        player.play_track(&track).unwrap();

        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.currently_playing(), Some(&track));
        assert_eq!(player.playlist().current_index(), Some(2));
        assert_eq!(player.loaded_album_id(), Some(x.id()));
        assert_invariant(&player);
    }

    #[test]
    fn play_track_outside_playlist_fails() {
        let mut player = player_with(&[album("X", 1)]);
        let stranger = album("Y", 1).tracks()[0].clone();

        let err = player.play_track(&stranger).unwrap_err();
        assert!(matches!(
            err,
            JukeboxError::InvalidArgument(ref m) if m.contains("not in current playlist")
        ));
        assert!(player.is_stopped());
    }

    #[test]
    fn pause_and_resume_from_stopped_are_noops() {
        let mut player = player_with(&[album("X", 2)]);
        assert!(!player.pause());
        assert!(!player.resume());
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn pause_resume_cycle() {
        let x = album("X", 2);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[0]).unwrap();

        assert!(player.pause());
        assert_eq!(player.state(), PlayerState::Paused);
        assert_eq!(player.currently_playing(), Some(&x.tracks()[0]));
        assert!(!player.pause());

        assert!(player.resume());
        assert_eq!(player.state(), PlayerState::Playing);
        assert!(!player.resume());
        assert_invariant(&player);
    }

    #[test]
    fn stop_is_idempotent() {
        let x = album("X", 2);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[1]).unwrap();

        player.stop();
        player.stop();

        assert!(player.is_stopped());
        assert!(player.currently_playing().is_none());
        assert_eq!(player.playlist().current_index(), Some(1));
    }

    #[test]
    fn play_next_and_prev_wrap() {
        let x = album("X", 2);
        let mut player = player_with(&[x.clone()]);

        player.play_next().unwrap();
        assert_eq!(player.currently_playing(), Some(&x.tracks()[1]));
        player.play_next().unwrap();
        assert_eq!(player.currently_playing(), Some(&x.tracks()[0]));
        player.play_prev().unwrap();
        assert_eq!(player.currently_playing(), Some(&x.tracks()[1]));
        assert_invariant(&player);
    }

    #[test]
    fn play_next_on_empty_playlist_is_noop() {
        let mut player = Player::new(Playlist::new("Empty").unwrap(), PlayerConfig::default());
        player.play_next().unwrap();
        player.play_prev().unwrap();
        assert!(player.is_stopped());
    }

    #[test]
    fn add_album_has_set_semantics() {
        let x = album("X", 1);
        let mut player = Player::new(Playlist::new("Test").unwrap(), PlayerConfig::default());
        assert!(player.add_album(x.clone()));
        assert!(!player.add_album(x));
        assert_eq!(player.albums().len(), 1);
    }

    #[test]
    fn load_album_requires_membership() {
        let x = album("X", 1);
        let mut player = Player::new(Playlist::new("Test").unwrap(), PlayerConfig::default());

        let err = player.load_album(&x.id()).unwrap_err();
        assert!(matches!(
            err,
            JukeboxError::InvalidArgument(ref m) if m.contains("not in collection")
        ));

        player.add_album(x.clone());
        player.load_album(&x.id()).unwrap();
        assert_eq!(player.loaded_album(), Some(&x));
    }

    #[test]
    fn remove_loaded_playing_album_stops_and_purges_playlist() {
        let x = album("X", 2);
        let y = album("Y", 2);
        let mut player = player_with(&[x.clone(), y.clone()]);
        player.play_track(&x.tracks()[1]).unwrap();

        assert!(player.remove_album(&x.id()));

        assert!(player.is_stopped());
        assert!(player.loaded_album_id().is_none());
        assert_eq!(player.albums(), &[y.clone()]);
        assert_eq!(player.playlist().tracks(), y.tracks());
        assert_invariant(&player);
    }

    #[test]
    fn remove_other_album_keeps_playing() {
        let x = album("X", 2);
        let y = album("Y", 2);
        let mut player = player_with(&[x.clone(), y.clone()]);
        player.play_track(&y.tracks()[0]).unwrap();

        assert!(player.remove_album(&x.id()));

        assert!(player.is_playing());
        assert_eq!(player.currently_playing(), Some(&y.tracks()[0]));
        assert_eq!(player.playlist().len(), 2);
        assert_invariant(&player);
    }

    #[test]
    fn remove_unknown_album_returns_false() {
        let mut player = player_with(&[album("X", 1)]);
        assert!(!player.remove_album(&album("Y", 1).id()));
        assert_eq!(player.albums().len(), 1);
    }

    #[test]
    fn eject_stops_playback() {
        let x = album("X", 2);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[0]).unwrap();
        player.pause();

        assert!(player.eject_album());
        assert!(player.is_stopped());
        assert!(player.loaded_album_id().is_none());
        assert!(!player.eject_album());
    }

    #[test]
    fn removing_playing_track_stops() {
        let x = album("X", 3);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[1]).unwrap();

        assert!(player.remove_from_playlist(&x.tracks()[1]));
        assert!(player.is_stopped());
        assert_eq!(player.playlist().len(), 2);
    }

    #[test]
    fn removing_other_track_keeps_invariant() {
        let x = album("X", 3);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[2]).unwrap();

        assert!(player.remove_from_playlist(&x.tracks()[0]));
        assert!(player.is_playing());
        assert_invariant(&player);
    }

    #[test]
    fn toggle_shuffle_keeps_playing_track() {
        let x = album("X", 6);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[3]).unwrap();

        assert!(player.toggle_shuffle());
        assert_invariant(&player);
        assert!(!player.toggle_shuffle());
        assert_eq!(player.playlist().tracks(), x.tracks());
        assert_invariant(&player);
    }

    #[test]
    fn events_follow_transitions() {
        let x = album("X", 2);
        let mut player = player_with(&[x.clone()]);
        player.play_track(&x.tracks()[0]).unwrap();
        player.pause();
        player.stop();

        let events = player.drain_events();
        assert_eq!(
            events,
            vec![
                PlayerEvent::AlbumLoaded { album_id: x.id() },
                PlayerEvent::TrackChanged {
                    track: x.tracks()[0].clone()
                },
                PlayerEvent::StateChanged {
                    state: PlayerState::Playing
                },
                PlayerEvent::StateChanged {
                    state: PlayerState::Paused
                },
                PlayerEvent::StateChanged {
                    state: PlayerState::Stopped
                },
            ]
        );
        assert!(player.drain_events().is_empty());
    }
}
