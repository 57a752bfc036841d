use tokio::process::Command;

use crate::{
    Res,
    types::{SearchEntry, TrackDescriptor},
};

/// Fixed number of results requested per search page.
pub const PAGE_SIZE: usize = 20;

/// Searches YouTube for a free-text query, returning up to `count` results.
///
/// Pages through `ytsearch` in fixed windows of [`PAGE_SIZE`] via
/// `--playlist-items` until the requested count is reached or a page comes
/// back empty or short (no further pages), then truncates to exactly
/// `count`. Results keep the service's ranking order.
///
/// Unlike extraction, this path has no catch-and-contain handling: spawn,
/// exit-status and decode errors propagate to the caller.
pub async fn search(query: &str, count: usize) -> Res<Vec<TrackDescriptor>> {
    let mut results: Vec<TrackDescriptor> = Vec::new();

    while results.len() < count {
        let window_start = results.len() + 1;
        let window_end = results.len() + PAGE_SIZE;

        let output = Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--flat-playlist",
                "--no-warnings",
                "--playlist-items",
                &format!("{}-{}", window_start, window_end),
                &format!("ytsearch{}:{}", window_end, query),
            ])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("yt-dlp search failed: {}", stderr.trim()).into());
        }

        let page = parse_search_page(&String::from_utf8_lossy(&output.stdout));
        if page.is_empty() {
            break; // no more pages
        }

        let page_len = page.len();
        results.extend(page);
        if page_len < PAGE_SIZE {
            break;
        }
    }

    results.truncate(count);
    Ok(results)
}

/// Looks up the single best search result for a query.
///
/// Used once per Spotify track in the download flow to locate a source URL.
pub async fn search_first(query: &str) -> Res<Option<TrackDescriptor>> {
    let output = Command::new("yt-dlp")
        .args([
            "--dump-json",
            "--flat-playlist",
            "--no-warnings",
            &format!("ytsearch1:{}", query),
        ])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("yt-dlp search failed: {}", stderr.trim()).into());
    }

    let mut page = parse_search_page(&String::from_utf8_lossy(&output.stdout));
    Ok(if page.is_empty() {
        None
    } else {
        Some(page.remove(0))
    })
}

/// Decodes one search page: one JSON entry per stdout line, undecodable
/// lines skipped.
pub fn parse_search_page(raw: &str) -> Vec<TrackDescriptor> {
    raw.lines()
        .filter_map(|line| serde_json::from_str::<SearchEntry>(line).ok())
        .map(entry_descriptor)
        .collect()
}

/// Normalizes a search entry into a descriptor. The contributor prefers the
/// channel name over the uploader; the source URL falls back
/// `url` → `webpage_url` → rebuilt watch URL from the id.
pub fn entry_descriptor(entry: SearchEntry) -> TrackDescriptor {
    let id = entry.id;
    let link = entry
        .url
        .or(entry.webpage_url)
        .or_else(|| {
            id.clone()
                .map(|id| format!("https://www.youtube.com/watch?v={}", id))
        });

    TrackDescriptor {
        title: entry.title.or(id).unwrap_or_default(),
        contributor: entry.channel.or(entry.uploader).unwrap_or_default(),
        source_url: link,
    }
}
