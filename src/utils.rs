use url::Url;

use crate::types::TrackDescriptor;

/// Tag assigned to an input string by the link classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    SpotifyTrack,
    SpotifyAlbum,
    SpotifyPlaylist,
    SpotifyArtist,
    YouTube,
    SoundCloud,
    Unknown,
}

pub fn is_youtube_link(link: &str) -> bool {
    ["youtube.com/watch", "youtu.be/", "youtube.com/playlist"]
        .iter()
        .any(|domain| link.contains(domain))
}

pub fn is_soundcloud_link(link: &str) -> bool {
    link.contains("soundcloud.com")
}

/// Classifies an input string by substring matching.
///
/// YouTube and SoundCloud domains are tested before the Spotify entity
/// keywords so that e.g. a SoundCloud URL containing the word "track" or a
/// YouTube playlist URL containing "playlist" is not misclassified. An
/// unrecognized string maps to [`LinkKind::Unknown`]; there are no error
/// conditions.
pub fn classify_link(link: &str) -> LinkKind {
    if is_youtube_link(link) {
        LinkKind::YouTube
    } else if is_soundcloud_link(link) {
        LinkKind::SoundCloud
    } else if link.contains("track") {
        LinkKind::SpotifyTrack
    } else if link.contains("album") {
        LinkKind::SpotifyAlbum
    } else if link.contains("playlist") {
        LinkKind::SpotifyPlaylist
    } else if link.contains("artist") {
        LinkKind::SpotifyArtist
    } else {
        LinkKind::Unknown
    }
}

/// Rewrites a watch-style YouTube link to carry only the `v` parameter.
///
/// Returns `None` when the link cannot be parsed or has no usable `v`
/// parameter; callers fall back to stripping the whole query string. The
/// rewrite exists to avoid shell-quoting issues downstream and has no
/// semantic effect on resolution.
pub fn clean_watch_link(link: &str) -> Option<String> {
    let mut parsed = Url::parse(link).ok()?;
    let video_id = parsed
        .query_pairs()
        .find(|(key, value)| key == "v" && !value.is_empty())
        .map(|(_, value)| value.into_owned())?;
    parsed
        .query_pairs_mut()
        .clear()
        .append_pair("v", &video_id);
    Some(parsed.to_string())
}

/// Drops everything after the first `?` of a link.
pub fn strip_query(link: &str) -> String {
    match link.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => link.to_string(),
    }
}

/// Extracts the entity ID from a Spotify link: the last path segment with
/// any query string removed.
pub fn spotify_id(link: &str) -> Option<String> {
    let path = link.split('?').next().unwrap_or(link);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Derives a filesystem-safe file name from a display title by retaining
/// only alphanumerics, spaces and the characters `.`, `-`, `_`.
///
/// The derivation is idempotent: applying it to its own output yields the
/// same string.
pub fn safe_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '-' | '_'))
        .collect()
}

/// Truncates a track list to at most `limit` elements, preserving the
/// original order. `None` leaves the list untouched.
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<u64>) -> Vec<T> {
    if let Some(n) = limit {
        items.truncate(n as usize);
    }
    items
}

/// Builds the display title used for table-less output and for the
/// downloaded file name: `contributor - title`, or just the title when no
/// contributor is known.
pub fn display_title(track: &TrackDescriptor) -> String {
    if track.contributor.is_empty() {
        track.title.clone()
    } else {
        format!("{} - {}", track.contributor, track.title)
    }
}
