//! Core domain types

mod album;
mod ids;
mod track;

pub use album::{Album, CreateAlbum};
pub use ids::AlbumId;
pub use track::{CreateTrack, Track};
