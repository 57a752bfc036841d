use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::process::Command;

use crate::{config, success, utils, warning};

/// Target codec; the output file carries this extension.
pub const AUDIO_CODEC: &str = "mp3";

/// Target bitrate handed to the transcoding postprocessor.
pub const AUDIO_QUALITY: &str = "192K";

/// Computes the target path for a display title: `<dir>/<safe_name>.mp3`.
pub fn target_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{}.{}", utils::safe_filename(title), AUDIO_CODEC))
}

/// Fetches a source URL and transcodes it to an MP3 in `dir`.
///
/// When the target path already exists and `overwrite` is false the track
/// is skipped with a notice before any process is spawned, leaving the
/// existing file untouched. Otherwise yt-dlp is invoked with
/// best-available-audio selection, extraction to MP3 at [`AUDIO_QUALITY`]
/// and a postprocessor step that stamps the display title into the file's
/// metadata; yt-dlp appends the extension to the output template itself.
///
/// Failures are this executor's only containment logic: a spawn error or a
/// non-zero exit is reported with the title and the batch continues. No
/// retry, no abort.
pub async fn download_audio(url: &str, title: &str, dir: &Path, overwrite: bool) {
    let safe = utils::safe_filename(title);
    let mp3_path = target_path(dir, title);

    if mp3_path.exists() && !overwrite {
        warning!("Skipping: {}.{} already exists", safe, AUDIO_CODEC);
        return;
    }

    let output_template = dir.join(format!("{}.%(ext)s", safe));

    let mut cmd = Command::new("yt-dlp");
    cmd.args([
        "--format",
        "bestaudio/best",
        "--extract-audio",
        "--audio-format",
        AUDIO_CODEC,
        "--audio-quality",
        AUDIO_QUALITY,
        "--output",
        &output_template.to_string_lossy(),
        "--postprocessor-args",
        &format!("ffmpeg:-metadata title={}", title),
        "--quiet",
        "--no-warnings",
    ]);
    if let Some(ffmpeg) = config::ffmpeg_location() {
        cmd.args(["--ffmpeg-location", &ffmpeg]);
    }
    cmd.arg(url);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Downloading: {}", title));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = cmd.output().await;
    pb.finish_and_clear();

    match result {
        Ok(output) if output.status.success() => {
            success!("Downloaded: {}.{}", title, AUDIO_CODEC);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warning!("Failed: {} ({})", title, stderr.trim());
        }
        Err(e) => {
            warning!("Failed: {} ({})", title, e);
        }
    }
}
