//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! spotgrab: authenticating with the client-credentials grant and resolving
//! track, album, playlist and artist links into normalized track
//! descriptors. It is the metadata side of the pipeline; locating and
//! fetching audio is the concern of [`crate::ytdlp`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (link flow)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     └── Track Resolution (track, album, playlist, artist)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The tool performs read-only catalog lookups, so the OAuth
//! client-credentials grant is sufficient: the client ID and secret from
//! the configuration are exchanged for a short-lived bearer token at the
//! start of every Spotify resolution. No user authorization, no refresh
//! tokens, no persisted state.
//!
//! ## Error Handling Philosophy
//!
//! Any transport, authentication or HTTP error aborts the whole resolve
//! step and is propagated to the caller as a `reqwest::Error`. There are no
//! retries and no partial results: the CLI reports the failure and the run
//! ends gracefully with zero tracks.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token request
//! - `GET /tracks/{id}` - single track lookup
//! - `GET /albums/{id}` - album with embedded track listing
//! - `GET /playlists/{id}/tracks` - playlist items in provider order
//! - `GET /artists/{id}/top-tracks` - top tracks, capped at 15
//!
//! ## Boundary Normalization
//!
//! Responses are decoded into the typed structs of [`crate::types`] at the
//! HTTP boundary and immediately mapped into
//! [`crate::types::TrackDescriptor`] records (title, first-listed artist as
//! contributor). Nothing downstream ever sees the provider's raw JSON
//! shapes.

pub mod auth;
pub mod tracks;
