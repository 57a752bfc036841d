use colored::Colorize;
use tabled::Table;

use crate::types::{Source, TrackDescriptor, TrackTableRow};

/// Renders a track list as a numbered table with a colored source label.
pub fn show_table(tracks: &[TrackDescriptor], source: Source) {
    let label = match source {
        Source::Spotify => source.to_string().green().bold(),
        Source::YouTube => source.to_string().red().bold(),
        Source::SoundCloud => source.to_string().yellow().bold(),
        Source::SearchResults => source.to_string().blue().bold(),
    };

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            index: i + 1,
            artist: if track.contributor.is_empty() {
                "—".to_string()
            } else {
                track.contributor.clone()
            },
            title: track.title.clone(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{} Tracks\n{}", label, table);
}
