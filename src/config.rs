//! Configuration management for spotgrab.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! preferred download directory and optional endpoint overrides.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only)

use std::{env, path::PathBuf};

use dotenv;

/// Environment keys that must be present and non-empty before any network
/// call is made.
pub const REQUIRED_KEYS: [&str; 3] = [
    "SPOTIFY_API_CLIENT_ID",
    "SPOTIFY_API_CLIENT_SECRET",
    "PREFERRED_DIR",
];

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotgrab/.env`. This allows users to store
/// credentials without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotgrab/.env`
/// - macOS: `~/Library/Application Support/spotgrab/.env`
/// - Windows: `%LOCALAPPDATA%/spotgrab/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails. A missing file
/// is reported as an error string as well; callers may treat that as a
/// warning when the variables are already present in the real environment.
///
/// # Example
///
/// ```
/// use spotgrab::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration note: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotgrab/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Validates that all mandatory configuration keys are present.
///
/// Checks every key in [`REQUIRED_KEYS`] for presence and a non-empty value.
/// This is the fatal configuration gate: it must run (and pass) before the
/// first network call of a run.
///
/// # Returns
///
/// Returns `Ok(())` when all mandatory keys are usable, or an error string
/// naming the first missing key.
///
/// # Example
///
/// ```
/// if let Err(e) = config::validate() {
///     eprintln!("{}", e); // "Missing required 'SPOTIFY_API_CLIENT_ID' ..."
/// }
/// ```
pub fn validate() -> Result<(), String> {
    for key in REQUIRED_KEYS {
        match env::var(key) {
            Ok(value) if !value.trim().is_empty() => {}
            _ => return Err(format!("Missing required '{}' in configuration", key)),
        }
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_ID` environment variable is not set.
/// Run [`validate`] at startup to turn this into a proper error.
pub fn client_id() -> String {
    env::var("SPOTIFY_API_CLIENT_ID").expect("SPOTIFY_API_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_SECRET` environment variable is not set.
/// Run [`validate`] at startup to turn this into a proper error.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> String {
    env::var("SPOTIFY_API_CLIENT_SECRET").expect("SPOTIFY_API_CLIENT_SECRET must be set")
}

/// Returns the preferred download directory.
///
/// Retrieves the `PREFERRED_DIR` environment variable which names the
/// directory downloads are written to when no `--output-dir` override is
/// given. When the directory does not exist, callers fall back to
/// [`fallback_dir`].
///
/// # Panics
///
/// Panics if the `PREFERRED_DIR` environment variable is not set.
/// Run [`validate`] at startup to turn this into a proper error.
pub fn preferred_dir() -> String {
    env::var("PREFERRED_DIR").expect("PREFERRED_DIR must be set")
}

/// Returns the fallback download directory inside the local data directory.
///
/// Used when the configured preferred directory does not exist and no
/// `--output-dir` override was given, e.g. `~/.local/share/spotgrab/songs`
/// on Linux.
pub fn fallback_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotgrab/songs");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, defaulting to the
/// public Spotify Web API endpoint when unset.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting to
/// the public accounts endpoint when unset. Used for the client-credentials
/// grant at the start of every Spotify resolution.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the configured ffmpeg location, if any.
///
/// Retrieves the optional `FFMPEG_LOCATION` environment variable which is
/// handed to yt-dlp as `--ffmpeg-location` so the transcoding step can find
/// a non-PATH ffmpeg installation.
pub fn ffmpeg_location() -> Option<String> {
    env::var("FFMPEG_LOCATION").ok().filter(|v| !v.trim().is_empty())
}
