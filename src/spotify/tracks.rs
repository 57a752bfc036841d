use reqwest::Client;

use crate::{
    config,
    types::{
        AlbumObject, PlaylistTracksResponse, TopTracksResponse, TrackDescriptor, TrackObject,
    },
    utils::{self, LinkKind},
};

/// Maximum number of tracks returned for an artist link, regardless of the
/// artist's true catalog size.
pub const ARTIST_TOP_LIMIT: usize = 15;

/// Resolves a classified Spotify link into track descriptors.
///
/// Dispatches to the read operation matching the entity kind and returns
/// the provider's items in original order. Any transport or API error
/// aborts the whole resolve step; the caller reports it and the run ends
/// with no tracks.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `kind` - Entity kind produced by the link classifier
/// * `link` - The (normalized) Spotify link; the entity ID is its last
///   path segment
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackDescriptor>)` - normalized descriptors in provider order
/// - `Err(reqwest::Error)` - network error, API error, or other
///   HTTP-related error
pub async fn resolve(
    token: &str,
    kind: LinkKind,
    link: &str,
) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let id = utils::spotify_id(link).unwrap_or_default();

    match kind {
        LinkKind::SpotifyTrack => get_track(token, &id).await,
        LinkKind::SpotifyAlbum => get_album_tracks(token, &id).await,
        LinkKind::SpotifyPlaylist => get_playlist_tracks(token, &id).await,
        LinkKind::SpotifyArtist => get_artist_top_tracks(token, &id).await,
        _ => Ok(Vec::new()),
    }
}

async fn get_track(token: &str, id: &str) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let api_url = format!("{uri}/tracks/{id}", uri = &config::spotify_apiurl());

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<TrackObject>()
        .await?;

    Ok(vec![descriptor(&res)])
}

async fn get_album_tracks(token: &str, id: &str) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let api_url = format!("{uri}/albums/{id}", uri = &config::spotify_apiurl());

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<AlbumObject>()
        .await?;

    Ok(album_descriptors(&res))
}

async fn get_playlist_tracks(
    token: &str,
    id: &str,
) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<PlaylistTracksResponse>()
        .await?;

    Ok(playlist_descriptors(&res))
}

async fn get_artist_top_tracks(
    token: &str,
    id: &str,
) -> Result<Vec<TrackDescriptor>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market=US",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<TopTracksResponse>()
        .await?;

    Ok(top_track_descriptors(&res))
}

/// Normalizes a provider track object into a descriptor: title plus the
/// first listed artist as contributor, empty when the artist array is empty.
pub fn descriptor(track: &TrackObject) -> TrackDescriptor {
    TrackDescriptor {
        title: track.name.clone(),
        contributor: track
            .artists
            .first()
            .map(|artist| artist.name.clone())
            .unwrap_or_default(),
        source_url: None,
    }
}

pub fn album_descriptors(album: &AlbumObject) -> Vec<TrackDescriptor> {
    album.tracks.items.iter().map(descriptor).collect()
}

/// Playlist items may carry a null track (removed or unavailable entries);
/// those are skipped at this boundary.
pub fn playlist_descriptors(playlist: &PlaylistTracksResponse) -> Vec<TrackDescriptor> {
    playlist
        .items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(descriptor)
        .collect()
}

pub fn top_track_descriptors(top: &TopTracksResponse) -> Vec<TrackDescriptor> {
    top.tracks
        .iter()
        .take(ARTIST_TOP_LIMIT)
        .map(descriptor)
        .collect()
}
