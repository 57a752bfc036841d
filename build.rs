//! Build script for spotgrab.
//!
//! Copies the configuration template to the user's local data directory so
//! that a ready-to-edit example sits next to the location where the
//! application looks for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the platform-specific
/// local data directory (`spotgrab/.env.example`).
///
/// # File Operations
///
/// ## Source Location
/// The script looks for `.env.example` in the crate root directory (where
/// Cargo.toml resides).
///
/// ## Destination Location
/// Templates are copied to the platform-specific local data directory:
/// - Linux: `~/.local/share/spotgrab/.env.example`
/// - macOS: `~/Library/Application Support/spotgrab/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotgrab/.env.example`
///
/// # Error Handling Strategy
///
/// A missing template produces a cargo warning and the build continues;
/// directory-creation and copy failures are critical and fail the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotgrab");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
