use crate::{
    Res,
    cli::show_table,
    info, success,
    types::{Mode, RunConfig, Source},
    utils, warning, ytdlp,
};

/// Number of search results fetched when neither `--search-limit` nor
/// `--limit` is given.
const DEFAULT_SEARCH_COUNT: u64 = 5;

pub async fn process_search(run: &RunConfig, query: &str) -> Res<()> {
    let count = run
        .search_limit
        .or(run.limit)
        .unwrap_or(DEFAULT_SEARCH_COUNT) as usize;

    info!("Searching YouTube: {} (showing top {})", query, count);
    let results = ytdlp::search::search(query, count).await?;

    if results.is_empty() {
        warning!("No tracks found.");
        return Ok(());
    }

    show_table(&results, Source::SearchResults);

    // download mode fetches every search result, regardless of --limit
    if run.mode == Mode::Download {
        for track in &results {
            let full = utils::display_title(track);
            match &track.source_url {
                Some(url) => {
                    ytdlp::download::download_audio(url, &full, &run.output_dir, run.overwrite)
                        .await
                }
                None => warning!("No source URL for: {}", full),
            }
        }
        success!("All downloads completed.");
    }

    Ok(())
}
