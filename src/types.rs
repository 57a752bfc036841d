use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracks {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub tracks: AlbumTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub url: Option<String>,
    pub webpage_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedInfo {
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub url: Option<String>,
    pub webpage_url: Option<String>,
    pub entries: Option<Vec<ExtractedEntry>>,
    pub tracks: Option<Vec<ExtractedEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub url: Option<String>,
    pub webpage_url: Option<String>,
}

/// Normalized track record flowing through the pipeline. Every resolver
/// and locator emits this at its boundary; downstream code never depends
/// on tuple positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDescriptor {
    pub title: String,
    pub contributor: String,
    pub source_url: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Title")]
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    Spotify,
    YouTube,
    SoundCloud,
    SearchResults,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Spotify => write!(f, "Spotify"),
            Source::YouTube => write!(f, "YouTube"),
            Source::SoundCloud => write!(f, "SoundCloud"),
            Source::SearchResults => write!(f, "Search Results"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Show,
    Download,
}

#[derive(Debug, Clone)]
pub enum SourceInput {
    Link(String),
    Query(String),
}

/// Options governing one invocation. Constructed once in `main` from user
/// input and passed by reference to every component that needs it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub source: SourceInput,
    pub limit: Option<u64>,
    pub search_limit: Option<u64>,
    pub output_dir: PathBuf,
    pub overwrite: bool,
}
