use std::time::{Duration, Instant};

use colored::Colorize;

use crate::{
    cli::show_table,
    info, spotify, success,
    types::{Mode, RunConfig, Source, TrackDescriptor},
    utils::{self, LinkKind},
    warning, ytdlp,
};

const SLOW_OP: Duration = Duration::from_secs(10);

pub async fn process_link(run: &RunConfig, link: &str) {
    let kind = utils::classify_link(link);
    let link = normalize_link(link, kind);

    match kind {
        LinkKind::YouTube | LinkKind::SoundCloud => from_media_link(run, &link, kind).await,
        LinkKind::SpotifyTrack
        | LinkKind::SpotifyAlbum
        | LinkKind::SpotifyPlaylist
        | LinkKind::SpotifyArtist => from_spotify_link(run, &link, kind).await,
        LinkKind::Unknown => warning!("No tracks found."),
    }
}

/// Watch-style YouTube links keep only their video-id parameter; every
/// other link loses its query string entirely. Both rewrites exist to
/// avoid shell-quoting issues downstream.
fn normalize_link(link: &str, kind: LinkKind) -> String {
    if kind == LinkKind::YouTube && link.contains("watch") {
        return match utils::clean_watch_link(link) {
            Some(clean) => {
                warning!("Stripping extra YouTube parameters.");
                info!("Using: {}", clean.cyan());
                clean
            }
            None => {
                warning!("No v= parameter found in YouTube URL; using base.");
                utils::strip_query(link)
            }
        };
    }

    if link.contains('?') {
        let base = utils::strip_query(link);
        warning!("Stripping query parameters from URL to avoid shell errors.");
        info!("Using: {}", base.cyan());
        return base;
    }

    link.to_string()
}

async fn from_media_link(run: &RunConfig, link: &str, kind: LinkKind) {
    let source = if kind == LinkKind::YouTube {
        Source::YouTube
    } else {
        Source::SoundCloud
    };

    let start = Instant::now();
    let tracks = ytdlp::extract::locate(link, kind).await;
    if start.elapsed() > SLOW_OP {
        warning!("This operation took longer than 10 seconds, please be patient...");
    }

    if tracks.is_empty() {
        warning!("No tracks found.");
        return;
    }
    let tracks = utils::apply_limit(tracks, run.limit);

    match run.mode {
        Mode::Show => show_table(&tracks, source),
        Mode::Download => {
            download_all(&tracks, run).await;
            success!("All downloads completed.");
        }
    }
}

async fn from_spotify_link(run: &RunConfig, link: &str, kind: LinkKind) {
    let token = match spotify::auth::request_token().await {
        Ok(token) => token,
        Err(e) => {
            report_spotify_error(&e);
            return;
        }
    };

    let start = Instant::now();
    let tracks = match spotify::tracks::resolve(&token.access_token, kind, link).await {
        Ok(tracks) => tracks,
        Err(e) => {
            report_spotify_error(&e);
            return;
        }
    };
    if start.elapsed() > SLOW_OP {
        warning!("This operation took longer than 10 seconds, please be patient...");
    }

    if tracks.is_empty() {
        warning!("No tracks found.");
        return;
    }
    let tracks = utils::apply_limit(tracks, run.limit);

    match run.mode {
        Mode::Show => show_table(&tracks, Source::Spotify),
        Mode::Download => {
            info!("Downloading Spotify tracks:");
            for track in &tracks {
                println!(
                    "→ {} - {}",
                    track.contributor.cyan(),
                    track.title.magenta()
                );
                locate_and_download(track, run).await;
            }
            success!("All downloads completed.");
        }
    }
}

/// One YouTube lookup per Spotify track. A missing result or a failed
/// lookup is reported and the batch continues.
async fn locate_and_download(track: &TrackDescriptor, run: &RunConfig) {
    let full = utils::display_title(track);
    let query = format!("{} {}", track.title, track.contributor);

    match ytdlp::search::search_first(&query).await {
        Ok(Some(result)) => match result.source_url {
            Some(url) => {
                ytdlp::download::download_audio(&url, &full, &run.output_dir, run.overwrite).await
            }
            None => warning!("No YouTube result for: {}", full),
        },
        Ok(None) => warning!("No YouTube result for: {}", full),
        Err(e) => warning!("Search failed for {}: {}", full, e),
    }
}

async fn download_all(tracks: &[TrackDescriptor], run: &RunConfig) {
    for track in tracks {
        let full = utils::display_title(track);
        match &track.source_url {
            Some(url) => {
                ytdlp::download::download_audio(url, &full, &run.output_dir, run.overwrite).await
            }
            None => warning!("No source URL for: {}", full),
        }
    }
}

fn report_spotify_error(e: &reqwest::Error) {
    warning!("Spotify error: unable to reach the Spotify API ({})", e);
    warning!("Please check your internet connection or your client credentials.");
}
