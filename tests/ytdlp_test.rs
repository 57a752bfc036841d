use std::path::Path;

use spotgrab::types::{ExtractedEntry, ExtractedInfo, SearchEntry};
use spotgrab::ytdlp::download::{AUDIO_CODEC, target_path};
use spotgrab::ytdlp::extract::{flatten_info, is_collection_link};
use spotgrab::ytdlp::search::{entry_descriptor, parse_search_page};

// Helper function to create an extraction entry
fn create_test_entry(id: &str, title: &str, uploader: Option<&str>) -> ExtractedEntry {
    ExtractedEntry {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        uploader: uploader.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_is_collection_link() {
    assert!(is_collection_link(
        "https://www.youtube.com/playlist?list=PLabc"
    ));
    assert!(is_collection_link(
        "https://www.youtube.com/watch?v=abc&list=PLabc"
    ));
    assert!(!is_collection_link("https://www.youtube.com/watch?v=abc"));
    assert!(!is_collection_link("https://youtu.be/abc"));
}

#[test]
fn test_flatten_playlist_entries() {
    let info = ExtractedInfo {
        title: Some("Some Playlist".to_string()),
        uploader: Some("Channel".to_string()),
        entries: Some(vec![
            create_test_entry("id1", "First", Some("Uploader A")),
            create_test_entry("id2", "Second", None),
        ]),
        ..Default::default()
    };

    let tracks = flatten_info(info, true);
    assert_eq!(tracks.len(), 2);

    assert_eq!(tracks[0].title, "First");
    assert_eq!(tracks[0].contributor, "Uploader A");
    // flat playlist entries carry bare ids; they are rebuilt into watch URLs
    assert_eq!(
        tracks[0].source_url.as_deref(),
        Some("https://www.youtube.com/watch?v=id1")
    );

    // entries without their own uploader inherit the parent document's
    assert_eq!(tracks[1].contributor, "Channel");
}

#[test]
fn test_flatten_prefers_webpage_url() {
    let mut entry = create_test_entry("id1", "First", Some("Uploader"));
    entry.webpage_url = Some("https://www.youtube.com/watch?v=id1".to_string());

    let info = ExtractedInfo {
        entries: Some(vec![entry]),
        ..Default::default()
    };

    let tracks = flatten_info(info, true);
    assert_eq!(
        tracks[0].source_url.as_deref(),
        Some("https://www.youtube.com/watch?v=id1")
    );
}

#[test]
fn test_flatten_single_video_fallback() {
    // A single-video extraction has no entries; the document itself is the item
    let info = ExtractedInfo {
        id: Some("dQw4w9WgXcQ".to_string()),
        title: Some("Some Video".to_string()),
        uploader: Some("Some Channel".to_string()),
        webpage_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        ..Default::default()
    };

    let tracks = flatten_info(info, true);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Some Video");
    assert_eq!(tracks[0].contributor, "Some Channel");
    assert_eq!(
        tracks[0].source_url.as_deref(),
        Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
    );
}

#[test]
fn test_flatten_soundcloud_tracks_shape() {
    // SoundCloud sets can surface their items under "tracks"
    let mut entry = create_test_entry("123", "SC Song", Some("SC Artist"));
    entry.url = Some("https://soundcloud.com/sc-artist/sc-song".to_string());

    let info = ExtractedInfo {
        title: Some("Some Set".to_string()),
        tracks: Some(vec![entry]),
        ..Default::default()
    };

    let tracks = flatten_info(info, false);
    assert_eq!(tracks.len(), 1);
    assert_eq!(
        tracks[0].source_url.as_deref(),
        Some("https://soundcloud.com/sc-artist/sc-song")
    );
}

#[test]
fn test_flatten_empty_collection_stays_empty() {
    // an empty playlist must not degrade into a pseudo-track built from
    // the playlist document itself
    let info = ExtractedInfo {
        doc_type: Some("playlist".to_string()),
        id: Some("PLabc".to_string()),
        title: Some("Empty Playlist".to_string()),
        webpage_url: Some("https://www.youtube.com/playlist?list=PLabc".to_string()),
        entries: Some(vec![]),
        ..Default::default()
    };

    assert!(flatten_info(info, true).is_empty());
}

#[test]
fn test_flatten_empty_result() {
    // No entries, no tracks, no title: nothing to build a track from
    let tracks = flatten_info(ExtractedInfo::default(), true);
    assert!(tracks.is_empty());

    // Entries without any link information are skipped
    let info = ExtractedInfo {
        entries: Some(vec![ExtractedEntry {
            title: Some("Linkless".to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    };
    assert!(flatten_info(info, true).is_empty());
}

#[test]
fn test_flatten_decodes_yt_dlp_json() {
    // trimmed -J output for a flat playlist extraction
    let raw = r#"{
        "id": "PLabc",
        "title": "Mix",
        "uploader": "Mix Channel",
        "_type": "playlist",
        "entries": [
            {"id": "v1", "title": "Song One", "uploader": "One", "duration": 210},
            {"id": "v2", "title": "Song Two", "view_count": 1000}
        ]
    }"#;

    let info: ExtractedInfo = serde_json::from_str(raw).unwrap();
    let tracks = flatten_info(info, true);

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Song One");
    assert_eq!(tracks[0].contributor, "One");
    assert_eq!(tracks[1].contributor, "Mix Channel");
}

#[test]
fn test_parse_search_page() {
    let raw = concat!(
        r#"{"id": "a1", "title": "First Hit", "channel": "Chan", "uploader": "Up", "url": "https://www.youtube.com/watch?v=a1"}"#,
        "\n",
        "not json at all\n",
        r#"{"id": "b2", "title": "Second Hit", "uploader": "Only Uploader"}"#,
        "\n",
    );

    let results = parse_search_page(raw);
    assert_eq!(results.len(), 2);

    // channel name is preferred over the uploader
    assert_eq!(results[0].contributor, "Chan");
    assert_eq!(
        results[0].source_url.as_deref(),
        Some("https://www.youtube.com/watch?v=a1")
    );

    assert_eq!(results[1].contributor, "Only Uploader");
    // no url in the entry: rebuilt from the id
    assert_eq!(
        results[1].source_url.as_deref(),
        Some("https://www.youtube.com/watch?v=b2")
    );
}

#[test]
fn test_parse_search_page_empty() {
    assert!(parse_search_page("").is_empty());
}

#[test]
fn test_entry_descriptor_title_fallback() {
    let entry = SearchEntry {
        id: Some("xyz".to_string()),
        ..Default::default()
    };

    let desc = entry_descriptor(entry);
    assert_eq!(desc.title, "xyz");
    assert_eq!(desc.contributor, "");
}

#[test]
fn test_target_path_derivation() {
    let path = target_path(Path::new("/music"), "Imagine Dragons - Believer");
    assert_eq!(
        path,
        Path::new("/music/Imagine Dragons - Believer.mp3")
    );

    // unsafe characters vanish from the file name, extension is fixed
    let path = target_path(Path::new("/music"), "AC/DC: T.N.T?");
    assert_eq!(path, Path::new("/music/ACDC T.N.T.mp3"));
    assert_eq!(AUDIO_CODEC, "mp3");
}

#[test]
fn test_target_path_deterministic() {
    // the executor's skip check relies on the derivation being stable
    let first = target_path(Path::new("/music"), "Song (Remix) [HQ]");
    let second = target_path(Path::new("/music"), "Song (Remix) [HQ]");
    assert_eq!(first, second);
}
