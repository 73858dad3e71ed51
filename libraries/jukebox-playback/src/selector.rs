//! Capability interface for jukebox front-ends

use jukebox_core::{Result, Track};

/// The track-selection buttons every front-end exposes
///
/// [`Jukebox`](crate::Jukebox) implements this over a [`Player`](crate::Player);
/// alternative front-ends implement the same set independently.
pub trait Selector {
    /// Skip to and play the next playlist track
    fn next_track(&mut self) -> Result<()>;

    /// Go back to and play the previous playlist track
    fn prev_track(&mut self) -> Result<()>;

    /// Append a track to the playlist, returning whether it was added
    fn add_to_playlist(&mut self, track: Track) -> Result<bool>;

    /// Remove a track from the playlist, returning whether it was present
    fn remove_from_playlist(&mut self, track: &Track) -> Result<bool>;

    /// Shuffle or unshuffle the playlist, returning the new shuffled flag
    fn toggle_shuffle(&mut self) -> Result<bool>;
}
