//! # CLI Module
//!
//! This module implements the two user-facing flows of spotgrab and the
//! console presentation layer.
//!
//! ## Flows
//!
//! - [`process_link`] - resolves a positional Spotify, YouTube or
//!   SoundCloud link into a track list and either renders it as a table or
//!   feeds it track by track into the download executor
//! - [`process_search`] - runs a manual YouTube search, always renders the
//!   result table, and in download mode downloads every result
//!
//! ## Control Flow
//!
//! Both flows follow the same shape: produce a track list from exactly one
//! resolver, apply the uniform empty-result check ("No tracks found."),
//! truncate with `--limit` where it applies, then display or download.
//! Tracks are processed strictly one at a time in list order; a per-track
//! failure is reported and the batch continues.
//!
//! ## Error Presentation
//!
//! All failures surface as human-readable console messages through the
//! crate macros. Link-based resolution failures end the run gracefully
//! with zero tracks; only the free-text search path propagates its errors
//! to `main`.

mod link;
mod search;
mod table;

pub use link::process_link;
pub use search::process_search;
pub use table::show_table;
