//! Shuffle and unshuffle orderings for playlists
//!
//! Shuffling is a uniform Fisher-Yates permutation driven by a caller
//! supplied RNG. Unshuffling is a deterministic sort, not a restore of
//! the previous order.

use jukebox_core::Track;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Apply a uniform random permutation to `tracks`
pub fn shuffle_tracks<R: Rng + ?Sized>(tracks: &mut [Track], rng: &mut R) {
    tracks.shuffle(rng);
}

/// Sort `tracks` by owning album title, then by position on the album
///
/// Albums that share a title are separated by their id so the result only
/// depends on which tracks are present, never on their incoming order.
pub fn sort_album_order(tracks: &mut [Track]) {
    tracks.sort_by(album_order);
}

fn album_order(a: &Track, b: &Track) -> Ordering {
    a.album_title()
        .cmp(b.album_title())
        .then_with(|| a.album_id().cmp(&b.album_id()))
        .then_with(|| a.position().cmp(&b.position()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jukebox_core::{Album, CreateAlbum, CreateTrack};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::time::Duration;

    fn album_tracks(title: &str, count: u32) -> Vec<Track> {
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
        album.tracks().to_vec()
    }

    fn titles(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(Track::title).collect()
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = album_tracks("Album", 8);
        let mut b = a.clone();

        shuffle_tracks(&mut a, &mut StdRng::seed_from_u64(7));
        shuffle_tracks(&mut b, &mut StdRng::seed_from_u64(7));

        assert_eq!(titles(&a), titles(&b));
    }

    #[test]
    fn shuffle_preserves_all_tracks() {
        let original = album_tracks("Album", 10);
        let mut tracks = original.clone();

        shuffle_tracks(&mut tracks, &mut StdRng::seed_from_u64(42));

        let before: HashSet<&Track> = original.iter().collect();
        let after: HashSet<&Track> = tracks.iter().collect();
        assert_eq!(before, after);
        assert_eq!(tracks.len(), 10);
    }

    #[test]
    fn shuffle_reorders_some_seed() {
        let original = album_tracks("Album", 10);
        let moved = (0..16u64).any(|seed| {
            let mut tracks = original.clone();
            shuffle_tracks(&mut tracks, &mut StdRng::seed_from_u64(seed));
            tracks != original
        });
        assert!(moved);
    }

    #[test]
    fn sort_groups_by_album_title_then_position() {
        let mut tracks = album_tracks("Zebra", 2);
        tracks.extend(album_tracks("Apple", 3));
        tracks.reverse();

        sort_album_order(&mut tracks);

        assert_eq!(
            titles(&tracks),
            vec!["Apple 1", "Apple 2", "Apple 3", "Zebra 1", "Zebra 2"]
        );
    }

    #[test]
    fn sort_is_independent_of_input_order() {
        let mut a = album_tracks("Same", 3);
        let mut other = Album::new(CreateAlbum::new(
            "Same",
            "Other Artist",
            NaiveDate::from_ymd_opt(1990, 5, 5).unwrap(),
            "Jazz",
        ))
        .unwrap();
        other
            .add_track(CreateTrack::new("Other 1", "Other Artist", Duration::from_secs(60), 1))
            .unwrap();
        a.extend(other.tracks().iter().cloned());

        let mut b = a.clone();
        b.reverse();

        sort_album_order(&mut a);
        sort_album_order(&mut b);
        assert_eq!(a, b);
    }
}
