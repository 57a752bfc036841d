use spotgrab::types::TrackDescriptor;
use spotgrab::utils::*;

// Helper function to create a test track descriptor
fn create_test_track(title: &str, contributor: &str) -> TrackDescriptor {
    TrackDescriptor {
        title: title.to_string(),
        contributor: contributor.to_string(),
        source_url: None,
    }
}

#[test]
fn test_classify_spotify_links() {
    assert_eq!(
        classify_link("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        LinkKind::SpotifyTrack
    );
    assert_eq!(
        classify_link("https://open.spotify.com/album/6ohgtfo6GdyGi68N8JBCwi"),
        LinkKind::SpotifyAlbum
    );
    assert_eq!(
        classify_link("https://open.spotify.com/playlist/6ohgtfo6GdyGi68N8JBCwi?si=abc"),
        LinkKind::SpotifyPlaylist
    );
    assert_eq!(
        classify_link("https://open.spotify.com/artist/0TnOYISbd1XYRBk9myaseg"),
        LinkKind::SpotifyArtist
    );
}

#[test]
fn test_classify_media_links() {
    assert_eq!(
        classify_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        LinkKind::YouTube
    );
    assert_eq!(
        classify_link("https://youtu.be/dQw4w9WgXcQ"),
        LinkKind::YouTube
    );
    assert_eq!(
        classify_link("https://www.youtube.com/playlist?list=PLabc"),
        LinkKind::YouTube
    );
    assert_eq!(
        classify_link("https://soundcloud.com/artist/some-song"),
        LinkKind::SoundCloud
    );
}

#[test]
fn test_classify_precedence() {
    // A SoundCloud URL that happens to contain Spotify entity keywords must
    // still classify as SoundCloud
    assert_eq!(
        classify_link("https://soundcloud.com/artist/track-one"),
        LinkKind::SoundCloud
    );

    // A YouTube playlist link contains "playlist" but is a video collection
    assert_eq!(
        classify_link("https://www.youtube.com/playlist?list=PLxyz"),
        LinkKind::YouTube
    );
}

#[test]
fn test_classify_unknown() {
    assert_eq!(classify_link("just some words"), LinkKind::Unknown);
    assert_eq!(classify_link("https://example.com/page"), LinkKind::Unknown);
    assert_eq!(classify_link(""), LinkKind::Unknown);
}

#[test]
fn test_clean_watch_link_keeps_only_video_id() {
    let cleaned = clean_watch_link(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLabc&index=3&t=42s",
    )
    .unwrap();
    assert_eq!(cleaned, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
}

#[test]
fn test_clean_watch_link_without_video_id() {
    // No v= parameter at all
    assert!(clean_watch_link("https://www.youtube.com/watch?list=PLabc").is_none());

    // Empty v= parameter is not usable either
    assert!(clean_watch_link("https://www.youtube.com/watch?v=&list=PLabc").is_none());

    // Unparseable input
    assert!(clean_watch_link("not a url").is_none());
}

#[test]
fn test_strip_query() {
    assert_eq!(
        strip_query("https://soundcloud.com/artist/song?in=playlists%3A123"),
        "https://soundcloud.com/artist/song"
    );
    assert_eq!(
        strip_query("https://open.spotify.com/track/abc?si=xyz&utm=1"),
        "https://open.spotify.com/track/abc"
    );

    // Links without a query string are untouched
    assert_eq!(
        strip_query("https://soundcloud.com/artist/song"),
        "https://soundcloud.com/artist/song"
    );
}

#[test]
fn test_spotify_id() {
    assert_eq!(
        spotify_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        Some("4uLU6hMCjMI75M1A2tKUQC".to_string())
    );

    // Query strings are ignored
    assert_eq!(
        spotify_id("https://open.spotify.com/playlist/6ohgtfo6GdyGi68N8JBCwi?si=3859e40c"),
        Some("6ohgtfo6GdyGi68N8JBCwi".to_string())
    );

    // Trailing slashes are tolerated
    assert_eq!(
        spotify_id("https://open.spotify.com/album/abc123/"),
        Some("abc123".to_string())
    );
}

#[test]
fn test_safe_filename_charset() {
    let safe = safe_filename("AC/DC - T.N.T. (Live!) [2024]");
    assert_eq!(safe, "ACDC - T.N.T. Live 2024");

    // Only alphanumerics, spaces, '.', '-', '_' survive
    assert!(
        safe.chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '-' | '_'))
    );
}

#[test]
fn test_safe_filename_idempotent() {
    let once = safe_filename("Sigur Rós – Svefn-g-englar?*");
    let twice = safe_filename(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_safe_filename_keeps_unicode_letters() {
    // Unicode letters count as alphanumeric and are retained
    assert_eq!(safe_filename("Beyoncé - Déjà Vu"), "Beyoncé - Déjà Vu");
}

#[test]
fn test_apply_limit_truncates_preserving_order() {
    let tracks = vec![1, 2, 3, 4, 5];
    assert_eq!(apply_limit(tracks.clone(), Some(2)), vec![1, 2]);

    // Limit larger than the list leaves it untouched
    assert_eq!(apply_limit(tracks.clone(), Some(10)), vec![1, 2, 3, 4, 5]);

    // No limit means no truncation
    assert_eq!(apply_limit(tracks, None), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_display_title() {
    let track = create_test_track("Believer", "Imagine Dragons");
    assert_eq!(display_title(&track), "Imagine Dragons - Believer");

    // Missing contributor falls back to the bare title
    let anonymous = create_test_track("Believer", "");
    assert_eq!(display_title(&anonymous), "Believer");
}
