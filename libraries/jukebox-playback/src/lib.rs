//! Jukebox - Playback Management
//!
//! Playlist navigation and the playback state machine behind the jukebox
//! front panel.
//!
//! This crate provides:
//! - Cursor-tracked playlists with circular next/previous navigation
//! - Shuffle that keeps the current track selected, and a deterministic
//!   unshuffle back to album order
//! - A STOPPED/PLAYING/PAUSED player over an album collection
//! - A power-gated [`Jukebox`] facade implementing [`Selector`]
//!
//! Everything is synchronous and single-owner; no operation blocks.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jukebox_core::{Album, CreateAlbum, CreateTrack};
//! use jukebox_playback::{Jukebox, Player, PlayerConfig, PlayerState, Playlist, Selector};
//! use std::time::Duration;
//!
//! let mut album = Album::new(CreateAlbum::new(
//!     "Abbey Road",
//!     "The Beatles",
//!     NaiveDate::from_ymd_opt(1969, 9, 26).unwrap(),
//!     "Rock",
//! ))?;
//! album.add_track(CreateTrack::new("Come Together", "The Beatles", Duration::from_secs(259), 1))?;
//! album.add_track(CreateTrack::new("Something", "The Beatles", Duration::from_secs(183), 2))?;
//!
//! let playlist = Playlist::with_tracks("Rock Classics", album.tracks().to_vec())?;
//! let player = Player::with_albums(playlist, [album], PlayerConfig::default());
//! let mut jukebox = Jukebox::new(player);
//!
//! // Buttons do nothing until the jukebox is switched on
//! assert!(jukebox.play_pause().is_err());
//!
//! jukebox.power_on();
//! assert_eq!(jukebox.play_pause()?, PlayerState::Playing);
//! jukebox.next_track()?;
//! assert_eq!(jukebox.player().currently_playing().unwrap().title(), "Something");
//! # Ok::<(), jukebox_core::JukeboxError>(())
//! ```
//!
//! # Example: Reproducible Shuffle
//!
//! ```rust
//! use jukebox_playback::{Player, PlayerConfig, Playlist};
//!
//! let config = PlayerConfig { shuffle_seed: Some(42) };
//! let mut player = Player::new(Playlist::new("Mix")?, config);
//! player.toggle_shuffle();
//! # Ok::<(), jukebox_core::JukeboxError>(())
//! ```

mod events;
mod jukebox;
mod player;
mod playlist;
mod selector;
pub mod shuffle;
pub mod types;

// Public exports
pub use events::PlayerEvent;
pub use jukebox::Jukebox;
pub use jukebox_core::{JukeboxError, Result};
pub use player::Player;
pub use playlist::Playlist;
pub use selector::Selector;
pub use types::{PlayerConfig, PlayerState};
