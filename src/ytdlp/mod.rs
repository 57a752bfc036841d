//! # yt-dlp Integration Module
//!
//! This module drives the external `yt-dlp` tool, which serves as three of
//! the pipeline's collaborators at once: the extraction service that turns
//! a YouTube or SoundCloud page URL into media entries, the search service
//! behind free-text queries, and the fetch-and-transcode engine that
//! produces the final MP3 files.
//!
//! ## Submodules
//!
//! - [`extract`] - resolves a video/audio page URL into a flat track list
//!   (`yt-dlp -J`, per-source extractor options)
//! - [`search`] - paginated `ytsearch` queries plus the single-result
//!   lookup used for Spotify tracks
//! - [`download`] - fetches best-available audio and transcodes it to MP3
//!   at a fixed bitrate, stamping the display title into the file metadata
//!
//! ## Process Model
//!
//! Every operation is one synchronous `yt-dlp` child process awaited to
//! completion; JSON output is decoded into the typed structs of
//! [`crate::types`] at this boundary. Extraction failures are contained
//! here (reported, empty result); search failures propagate; download
//! failures are reported per track and the batch continues.

pub mod download;
pub mod extract;
pub mod search;
