//! Build script for the Spotify token relay.
//!
//! Copies the `.env.example` template into the user's local data directory so
//! that a configuration skeleton sits next to the place where the relay looks
//! for its fallback `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to `<data_local_dir>/spotrelay/`.
///
/// A missing template only produces a cargo warning. Directory creation and
/// write failures abort the build.
///
/// Destination per platform:
/// - Linux: `~/.local/share/spotrelay/.env.example`
/// - macOS: `~/Library/Application Support/spotrelay/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotrelay/.env.example`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotrelay");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        let contents = fs::read_to_string(&template)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
