use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotgrab::{cli, config, error, types, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
#[clap(group = clap::ArgGroup::new("mode").multiple(false))]
struct Cli {
    /// Download MP3s
    #[clap(short = 'd', long, group = "mode")]
    download: bool,

    /// Show track list only
    #[clap(short = 's', long, group = "mode")]
    show: bool,

    /// Search YouTube manually and process the results
    #[clap(long, value_name = "QUERY")]
    search: Option<String>,

    /// Limit number of tracks to process/download
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Number of YouTube search results to fetch (default: uses --limit or 5)
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    search_limit: Option<u64>,

    /// Custom output directory for downloads
    #[clap(short = 'o', long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Redownload even if the file exists
    #[clap(long)]
    overwrite: bool,

    /// Get shell completions
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Spotify, YouTube, or SoundCloud URL
    link: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file: {}", e);
    }

    let args = Cli::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if !args.download && !args.show {
        error!("Either --download or --show is required.");
    }
    let mode = if args.download {
        types::Mode::Download
    } else {
        types::Mode::Show
    };

    // fatal configuration gate, before any network call
    if let Err(e) = config::validate() {
        error!("{}", e);
    }

    let output_dir = match args.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => {
            let preferred = PathBuf::from(config::preferred_dir());
            if preferred.exists() {
                preferred
            } else {
                config::fallback_dir()
            }
        }
    };
    if let Err(e) = async_fs::create_dir_all(&output_dir).await {
        error!(
            "Cannot create output directory {}: {}",
            output_dir.display(),
            e
        );
    }

    let source = match (args.search, args.link) {
        (Some(query), _) => types::SourceInput::Query(query),
        (None, Some(link)) => types::SourceInput::Link(link),
        (None, None) => {
            error!("No link provided.");
        }
    };

    let run = types::RunConfig {
        mode,
        source,
        limit: args.limit,
        search_limit: args.search_limit,
        output_dir,
        overwrite: args.overwrite,
    };

    match &run.source {
        types::SourceInput::Query(query) => {
            if let Err(e) = cli::process_search(&run, query).await {
                error!("Search failed: {}", e);
            }
        }
        types::SourceInput::Link(link) => cli::process_link(&run, link).await,
    }
}
