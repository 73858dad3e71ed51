//! Duration formatting shared by tracks, albums and playlists

use crate::types::Track;
use std::time::Duration;

/// Format a duration as `M:SS`
///
/// Minutes are unbounded (an hour-long playlist renders as `60:00`),
/// seconds are zero-padded and sub-second precision is dropped.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

/// Sum the durations of `tracks`
pub fn total_duration<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Duration {
    tracks.into_iter().map(Track::duration).sum()
}
