//! Jukebox Core
//!
//! Value types shared by every part of the jukebox: albums, the tracks they
//! own, and the error type used across the workspace.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jukebox_core::{Album, CreateAlbum, CreateTrack};
//! use std::time::Duration;
//!
//! let mut album = Album::new(CreateAlbum::new(
//!     "Abbey Road",
//!     "The Beatles",
//!     NaiveDate::from_ymd_opt(1969, 9, 26).unwrap(),
//!     "Rock",
//! ))?;
//!
//! album.add_track(CreateTrack::new(
//!     "Come Together",
//!     "The Beatles",
//!     Duration::from_secs(259),
//!     1,
//! ))?;
//!
//! // Positions are unique per album
//! assert!(album
//!     .add_track(CreateTrack::new("Something", "The Beatles", Duration::from_secs(183), 1))
//!     .is_err());
//! # Ok::<(), jukebox_core::JukeboxError>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{JukeboxError, Result};
pub use format::{format_duration, total_duration};
pub use types::{Album, AlbumId, CreateAlbum, CreateTrack, Track};
