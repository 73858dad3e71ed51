/// ID types for jukebox entities
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Album identifier
///
/// Tracks carry this as their back-reference to the owning album instead
/// of a pointer, so an album can be dropped without dangling tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(Uuid);

impl AlbumId {
    /// Derive the identity of an album from its title, artist and release date
    ///
    /// The same triple always yields the same id.
    pub fn derive(title: &str, artist: &str, release_date: NaiveDate) -> Self {
        let key = format!("{title}\u{1f}{artist}\u{1f}{release_date}");
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()))
    }

    /// Random id for tests that need distinct albums
    #[cfg(test)]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn derived_ids_are_stable() {
        let a = AlbumId::derive("Abbey Road", "The Beatles", date(1969, 9, 26));
        let b = AlbumId::derive("Abbey Road", "The Beatles", date(1969, 9, 26));
        assert_eq!(a, b);
    }

    #[test]
    fn derived_ids_differ_by_release_date() {
        let a = AlbumId::derive("Abbey Road", "The Beatles", date(1969, 9, 26));
        let b = AlbumId::derive("Abbey Road", "The Beatles", date(2019, 9, 27));
        assert_ne!(a, b);
    }

    #[test]
    fn derived_ids_are_name_based_uuids() {
        let id = AlbumId::derive("Abbey Road", "The Beatles", date(1969, 9, 26));
        let parsed = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(parsed.get_version_num(), 5);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(AlbumId::generate(), AlbumId::generate());
    }
}
