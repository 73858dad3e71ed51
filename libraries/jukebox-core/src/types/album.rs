//! Album types

use super::{AlbumId, CreateTrack, Track};
use crate::error::{require_non_blank, JukeboxError, Result};
use crate::format::{format_duration, total_duration};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// An album and the tracks it owns
///
/// Tracks are kept sorted by position and no two share a position.
#[derive(Debug, Clone, Serialize)]
pub struct Album {
    id: AlbumId,
    title: String,
    artist: String,
    release_date: NaiveDate,
    genre: String,
    tracks: Vec<Track>,
}

impl Album {
    /// Create an empty album
    pub fn new(data: CreateAlbum) -> Result<Self> {
        let title = require_non_blank(data.title, "Album title")?;
        let artist = require_non_blank(data.artist, "Artist")?;
        let genre = require_non_blank(data.genre, "Genre")?;

        Ok(Self {
            id: AlbumId::derive(&title, &artist, data.release_date),
            title,
            artist,
            release_date: data.release_date,
            genre,
            tracks: Vec::new(),
        })
    }

    /// Add a track at its position
    ///
    /// Fails if the position is already taken or the track data is invalid.
    pub fn add_track(&mut self, data: CreateTrack) -> Result<&Track> {
        let index = match self
            .tracks
            .binary_search_by_key(&data.position, Track::position)
        {
            Ok(_) => {
                return Err(JukeboxError::invalid_argument(format!(
                    "Track position {} already exists on '{}'",
                    data.position, self.title
                )))
            }
            Err(index) => index,
        };

        let track = Track::new(data, self.id, &self.title)?;
        self.tracks.insert(index, track);
        Ok(&self.tracks[index])
    }

    /// Remove the track at `position`, returning whether one was there
    pub fn remove_track(&mut self, position: u32) -> bool {
        match self.tracks.binary_search_by_key(&position, Track::position) {
            Ok(index) => {
                self.tracks.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Look up a track by position
    pub fn track(&self, position: u32) -> Option<&Track> {
        self.tracks
            .binary_search_by_key(&position, Track::position)
            .ok()
            .map(|index| &self.tracks[index])
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn id(&self) -> AlbumId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Sum of all track durations
    pub fn total_duration(&self) -> Duration {
        total_duration(&self.tracks)
    }

    /// Total duration as `M:SS`
    pub fn formatted_total_duration(&self) -> String {
        format_duration(self.total_duration())
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Album {}

impl Hash for Album {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) [{} tracks, {}]",
            self.title,
            self.artist,
            self.release_date.year(),
            self.track_count(),
            self.formatted_total_duration()
        )
    }
}

/// Data for creating a new album
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAlbum {
    pub title: String,
    pub artist: String,
    pub release_date: NaiveDate,
    pub genre: String,
}

impl CreateAlbum {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        release_date: NaiveDate,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            release_date,
            genre: genre.into(),
        }
    }
}
