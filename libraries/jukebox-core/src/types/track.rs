/// Track domain type
use super::AlbumId;
use crate::error::{require_non_blank, JukeboxError, Result};
use crate::format::format_duration;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// A single playable item on an album
///
/// Tracks are immutable once created and are only ever built by their
/// owning [`Album`](super::Album). They keep the album's id and title as a
/// read-only back-reference; there is no path from a track back into the
/// album's mutable state.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    title: String,
    artist: String,
    album: String,
    duration: Duration,
    position: u32,
    album_id: AlbumId,
    album_title: String,
}

impl Track {
    pub(crate) fn new(
        data: CreateTrack,
        album_id: AlbumId,
        album_title: &str,
    ) -> Result<Self> {
        if data.position == 0 {
            return Err(JukeboxError::invalid_argument(
                "Track position must be positive",
            ));
        }

        let album = match data.album {
            Some(album) => require_non_blank(album, "Album")?,
            None => album_title.to_string(),
        };

        Ok(Self {
            title: require_non_blank(data.title, "Title")?,
            artist: require_non_blank(data.artist, "Artist")?,
            album,
            duration: data.duration,
            position: data.position,
            album_id,
            album_title: album_title.to_string(),
        })
    }

    /// Track title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Performing artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Album title as tagged on the track
    pub fn album(&self) -> &str {
        &self.album
    }

    /// Playing time
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Position on the owning album (1-based, unique per album)
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Identity of the owning album
    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    /// Title of the owning album
    pub fn album_title(&self) -> &str {
        &self.album_title
    }

    /// Duration as `M:SS`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

// Duration and the owner's title are not part of a track's identity.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.album_id == other.album_id
            && self.title == other.title
            && self.artist == other.artist
            && self.album == other.album
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.artist.hash(state);
        self.album.hash(state);
        self.position.hash(state);
        self.album_id.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - {} ({}) [{}]",
            self.position,
            self.title,
            self.artist,
            self.album,
            self.formatted_duration()
        )
    }
}

/// Data for adding a track to an album
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTrack {
    pub title: String,
    pub artist: String,
    /// Album tag; defaults to the owning album's title
    pub album: Option<String>,
    pub duration: Duration,
    pub position: u32,
}

impl CreateTrack {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: Duration,
        position: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration,
            position,
        }
    }

    /// Tag the track with an album title other than its owner's
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn album_id() -> AlbumId {
        AlbumId::generate()
    }

    fn track(title: &str, position: u32, id: AlbumId) -> Track {
        Track::new(
            CreateTrack::new(title, "The Beatles", Duration::from_secs(259), position),
            id,
            "Abbey Road",
        )
        .unwrap()
    }

    #[test]
    fn album_tag_defaults_to_owner_title() {
        let t = track("Come Together", 1, album_id());
        assert_eq!(t.album(), "Abbey Road");
        assert_eq!(t.album_title(), "Abbey Road");
    }

    #[test]
    fn explicit_album_tag_is_kept() {
        let t = Track::new(
            CreateTrack::new("Something", "The Beatles", Duration::from_secs(183), 2)
                .with_album("Abbey Road (Remastered)"),
            album_id(),
            "Abbey Road",
        )
        .unwrap();
        assert_eq!(t.album(), "Abbey Road (Remastered)");
        assert_eq!(t.album_title(), "Abbey Road");
    }

    #[test]
    fn zero_position_is_rejected() {
        let err = Track::new(
            CreateTrack::new("Intro", "Someone", Duration::ZERO, 0),
            album_id(),
            "Album",
        )
        .unwrap_err();
        assert!(matches!(err, JukeboxError::InvalidArgument(_)));
    }

    #[test]
    fn blank_artist_is_rejected() {
        let err = Track::new(
            CreateTrack::new("Intro", "  ", Duration::ZERO, 1),
            album_id(),
            "Album",
        )
        .unwrap_err();
        assert_eq!(
            err,
            JukeboxError::InvalidArgument("Artist cannot be empty".to_string())
        );
    }

    #[test]
    fn equality_ignores_duration() {
        let id = album_id();
        let a = track("Come Together", 1, id);
        let b = Track::new(
            CreateTrack::new("Come Together", "The Beatles", Duration::from_secs(1), 1),
            id,
            "Abbey Road",
        )
        .unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn equality_includes_owning_album() {
        assert_ne!(track("Come Together", 1, album_id()), track("Come Together", 1, album_id()));
    }

    #[test]
    fn display_format() {
        let t = track("Come Together", 1, album_id());
        assert_eq!(t.to_string(), "1. Come Together - The Beatles (Abbey Road) [4:19]");
    }

    #[test]
    fn serializes_public_metadata() {
        let t = track("Come Together", 1, album_id());
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["title"], "Come Together");
        assert_eq!(json["position"], 1);
    }
}
