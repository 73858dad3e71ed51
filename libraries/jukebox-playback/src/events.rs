//! Player events
//!
//! The player queues an event at every observable change so front-ends can
//! react without polling:
//! - State changes (play/pause/stop)
//! - Track changes
//! - Album collection and loaded-album changes
//! - Playlist contents and shuffle changes

use crate::types::PlayerState;
use jukebox_core::{AlbumId, Track};
use serde::Serialize;

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlayerEvent {
    /// Playback state changed
    StateChanged {
        /// The new state
        state: PlayerState,
    },

    /// A different track is now playing
    TrackChanged {
        /// The track now playing
        track: Track,
    },

    /// Album added to the collection
    AlbumAdded {
        album_id: AlbumId,
    },

    /// Album removed from the collection
    AlbumRemoved {
        album_id: AlbumId,
    },

    /// Album loaded into the player
    AlbumLoaded {
        album_id: AlbumId,
    },

    /// Loaded album ejected
    AlbumEjected {
        album_id: AlbumId,
    },

    /// Tracks were added to or removed from the playlist
    PlaylistChanged {
        /// Playlist length after the change
        len: usize,
    },

    /// Playlist was shuffled or restored to album order
    ShuffleChanged {
        shuffled: bool,
    },
}
