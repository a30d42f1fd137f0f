//! Configuration management for the Spotify token relay.
//!
//! Values come from environment variables, optionally seeded from `.env` files.
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/spotrelay/.env`)
//! 4. Compiled-in defaults
//!
//! The redirect URI, the frontend origin and the requested scope are compiled
//! in and cannot be changed from the environment.

use std::{env, path::PathBuf};

use crate::warning;

/// Where Spotify sends the user back to after consent.
pub const SPOTIFY_REDIRECT_URI: &str = "http://localhost:3000/auth/callback";

/// The only origin allowed to call the relay from a browser.
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Permissions requested for the web playback SDK.
pub const SPOTIFY_SCOPE: &str = "streaming user-read-email user-read-private";

/// Length of the anti-forgery state string sent with each login.
pub const STATE_LENGTH: usize = 16;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Runtime configuration shared by every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub frontend_origin: String,
    pub server_addr: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Config {
    /// Builds the configuration from the current process environment.
    ///
    /// Missing credentials are not fatal: they fall back to an empty string and
    /// a warning is printed, so the relay still starts but Spotify will refuse
    /// every login attempt.
    pub fn from_env() -> Self {
        Self {
            client_id: required_or_empty("SPOTIFY_CLIENT_ID"),
            client_secret: required_or_empty("SPOTIFY_CLIENT_SECRET"),
            redirect_uri: SPOTIFY_REDIRECT_URI.to_string(),
            frontend_origin: FRONTEND_ORIGIN.to_string(),
            server_addr: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: SPOTIFY_REDIRECT_URI.to_string(),
            frontend_origin: FRONTEND_ORIGIN.to_string(),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            auth_url: DEFAULT_SPOTIFY_AUTH_URL.to_string(),
            token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
        }
    }
}

/// Loads `.env` files into the process environment.
///
/// Variables already present in the environment win over file contents. An
/// absent file is skipped silently; a file that exists but cannot be parsed is
/// reported as an error.
pub fn load_env() -> Result<(), String> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(mut path) = dirs::data_local_dir() {
        path.push("spotrelay/.env");
        candidates.push(path);
    }

    for path in candidates.iter().filter(|p| p.is_file()) {
        dotenv::from_path(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
    }

    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required_or_empty(key: &str) -> String {
    match env::var(key) {
        Ok(value) => value,
        Err(_) => {
            warning!("{} is not set, Spotify will reject requests", key);
            String::new()
        }
    }
}
