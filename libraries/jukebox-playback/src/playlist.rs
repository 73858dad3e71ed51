//! Cursor-tracked playlist
//!
//! An ordered sequence of tracks with a current position:
//! - Next/previous navigation wraps around in both directions
//! - Shuffle and unshuffle keep the current track selected
//! - Removal keeps the cursor in the same neighbourhood

use crate::shuffle::{shuffle_tracks, sort_album_order};
use jukebox_core::{format_duration, total_duration, JukeboxError, Result, Track};
use rand::Rng;
use std::fmt;
use std::time::Duration;

/// Playlist with a navigation cursor
///
/// Structure:
/// ```text
/// Playlist: Rock Classics (shuffled = false)
/// ─────────────────────────────
///   0. Come Together
/// ► 1. Something          <- cursor
///   2. Breathe
/// ```
///
/// The cursor is `None` exactly when the playlist is empty. Each track
/// appears at most once, compared by value.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Display name (never blank)
    name: String,

    /// Tracks in playback order
    tracks: Vec<Track>,

    /// Index of the current track
    current: Option<usize>,

    /// Whether the order came from `shuffle`
    shuffled: bool,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(JukeboxError::invalid_argument(
                "Playlist name cannot be empty",
            ));
        }

        Ok(Self {
            name: trimmed.to_string(),
            tracks: Vec::new(),
            current: None,
            shuffled: false,
        })
    }

    /// Create a playlist pre-populated with `tracks`
    ///
    /// Duplicates are dropped; the cursor starts on the first track.
    pub fn with_tracks(
        name: impl Into<String>,
        tracks: impl IntoIterator<Item = Track>,
    ) -> Result<Self> {
        let mut playlist = Self::new(name)?;
        for track in tracks {
            playlist.add_track(track);
        }
        Ok(playlist)
    }

    /// Append a track
    ///
    /// Returns `false` (and changes nothing) if the track is already present.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.contains(&track) {
            return false;
        }

        self.tracks.push(track);
        if self.current.is_none() {
            self.current = Some(0);
        }
        true
    }

    /// Remove a track, returning whether it was present
    pub fn remove_track(&mut self, track: &Track) -> bool {
        let Some(index) = self.index_of(track) else {
            return false;
        };

        self.tracks.remove(index);

        if self.tracks.is_empty() {
            self.current = None;
        } else if let Some(current) = self.current {
            let len = self.tracks.len();
            if index < current || current >= len {
                self.current = Some(current.saturating_sub(1).min(len - 1));
            }
        }

        true
    }

    /// Track under the cursor
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|index| self.tracks.get(index))
    }

    /// Advance the cursor (wrapping to the start) and return the new track
    pub fn next_track(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let next = self.current.map_or(0, |current| (current + 1) % len);
        self.current = Some(next);
        self.tracks.get(next)
    }

    /// Move the cursor back (wrapping to the end) and return the new track
    pub fn prev_track(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let prev = self.current.map_or(len - 1, |current| (current + len - 1) % len);
        self.current = Some(prev);
        self.tracks.get(prev)
    }

    /// Move the cursor onto `track`
    pub fn set_current_track(&mut self, track: &Track) -> Result<()> {
        let index = self.index_of(track).ok_or_else(|| {
            JukeboxError::not_found(format!(
                "'{}' is not in playlist '{}'",
                track.title(),
                self.name
            ))
        })?;
        self.current = Some(index);
        Ok(())
    }

    /// Shuffle using the thread-local RNG
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle with the given RNG, keeping the current track selected
    ///
    /// Playlists with fewer than two tracks are left untouched, including
    /// the shuffled flag.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.tracks.len() <= 1 {
            return;
        }

        let current = self.current_track().cloned();
        shuffle_tracks(&mut self.tracks, rng);
        self.shuffled = true;
        self.relocate(current.as_ref());
    }

    /// Restore album order (album title, then position)
    ///
    /// The current track stays selected at its new index.
    pub fn unshuffle(&mut self) {
        let current = self.current_track().cloned();
        self.shuffled = false;
        sort_album_order(&mut self.tracks);
        self.relocate(current.as_ref());
    }

    /// Whether `track` is in the playlist
    pub fn contains(&self, track: &Track) -> bool {
        self.tracks.contains(track)
    }

    /// Remove every track matching `predicate`, returning the removed tracks
    pub(crate) fn remove_where(
        &mut self,
        mut predicate: impl FnMut(&Track) -> bool,
    ) -> Vec<Track> {
        let doomed: Vec<Track> = self
            .tracks
            .iter()
            .filter(|&t| predicate(t))
            .cloned()
            .collect();
        for track in &doomed {
            self.remove_track(track);
        }
        doomed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tracks in playback order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Cursor position, `None` when empty
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Navigation is circular, so there is a next track whenever there is any
    pub fn has_next(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Sum of all track durations
    pub fn total_duration(&self) -> Duration {
        total_duration(&self.tracks)
    }

    /// Total duration as `M:SS`
    pub fn formatted_total_duration(&self) -> String {
        format_duration(self.total_duration())
    }

    fn index_of(&self, track: &Track) -> Option<usize> {
        self.tracks.iter().position(|t| t == track)
    }

    fn relocate(&mut self, track: Option<&Track>) {
        if let Some(track) = track {
            self.current = self.index_of(track);
        }
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Playlist {}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Playlist: {} [{} songs, {}]",
            self.name,
            self.len(),
            self.formatted_total_duration()
        )?;
        if self.shuffled {
            f.write_str(" (shuffled)")?;
        }
        Ok(())
    }
}
