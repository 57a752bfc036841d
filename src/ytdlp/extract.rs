use tokio::process::Command;

use crate::{
    types::{ExtractedEntry, ExtractedInfo, TrackDescriptor},
    utils::LinkKind,
    warning,
};

/// Returns true for YouTube links that address a collection rather than a
/// single video.
pub fn is_collection_link(link: &str) -> bool {
    link.contains("playlist?") || link.contains("&list=")
}

/// Resolves a YouTube or SoundCloud link into a flat track list.
///
/// Runs one `yt-dlp -J` extraction with options chosen per source:
/// SoundCloud uses the generic extractor, YouTube collection links are
/// extracted flat, single videos need no extra flags. The returned JSON
/// tree is flattened by [`flatten_info`].
///
/// Failures never abort the run: a spawn error, a non-zero exit and
/// undecodable output are each reported with a category label and yield an
/// empty list. A structurally empty extraction result is not an error
/// either; the caller surfaces the uniform zero-tracks outcome.
pub async fn locate(link: &str, kind: LinkKind) -> Vec<TrackDescriptor> {
    let mut args = vec!["-J", "--no-warnings"];
    match kind {
        LinkKind::SoundCloud => args.push("--force-generic-extractor"),
        LinkKind::YouTube if is_collection_link(link) => args.push("--flat-playlist"),
        _ => {}
    }
    args.push(link);

    let output = match Command::new("yt-dlp").args(&args).output().await {
        Ok(output) => output,
        Err(e) => {
            warning!("Extraction error: {}", e);
            return Vec::new();
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warning!("Extraction error: {}", stderr.trim());
        return Vec::new();
    }

    let info: ExtractedInfo = match serde_json::from_slice(&output.stdout) {
        Ok(info) => info,
        Err(e) => {
            warning!("Unexpected error parsing URL response: {}", e);
            return Vec::new();
        }
    };

    flatten_info(info, kind == LinkKind::YouTube)
}

/// Flattens an extraction result into track descriptors.
///
/// Entries come from `entries`, else `tracks` (the SoundCloud set shape),
/// else the document itself when it describes a single item. A collection
/// document with no entries stays empty. Per entry the source URL falls
/// back `webpage_url` → `url` → `id`, with bare YouTube ids rebuilt into
/// full watch URLs; the contributor falls back to the parent document's
/// uploader.
pub fn flatten_info(info: ExtractedInfo, is_youtube: bool) -> Vec<TrackDescriptor> {
    let parent_uploader = info.uploader.clone();
    let is_collection = info.doc_type.as_deref() == Some("playlist");

    let mut entries = info
        .entries
        .or(info.tracks)
        .unwrap_or_default();

    // single item fallback
    if entries.is_empty() && !is_collection && info.title.is_some() {
        entries.push(ExtractedEntry {
            id: info.id,
            title: info.title,
            uploader: info.uploader,
            channel: None,
            url: info.url,
            webpage_url: info.webpage_url,
        });
    }

    entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id;
            let mut link = entry.webpage_url.or(entry.url).or_else(|| id.clone())?;
            if is_youtube && !link.starts_with("http") {
                link = format!("https://www.youtube.com/watch?v={}", link);
            }

            let title = entry.title.or(id).unwrap_or_default();
            let contributor = entry
                .uploader
                .or(entry.channel)
                .or_else(|| parent_uploader.clone())
                .unwrap_or_default();

            Some(TrackDescriptor {
                title,
                contributor,
                source_url: Some(link),
            })
        })
        .collect()
}
