//! # Spotify Integration Module
//!
//! Outbound calls from the relay to Spotify. Only two endpoints are used:
//!
//! - `POST /api/token` on the accounts service, see [`auth::exchange_code`]
//! - `GET /tracks/{id}` on the Web API, see [`tracks::get_track`]
//!
//! Both take a shared [`reqwest::Client`] and the relay [`Config`](crate::config::Config)
//! so that tests can point them at a local stand-in for Spotify.
//!
//! ## Error Handling
//!
//! Failures are reported as [`SpotifyError`]. Nothing is retried; a non-success
//! status is handed back together with the raw response body so callers can
//! decide whether to forward it or collapse it.

use reqwest::StatusCode;

pub mod auth;
pub mod tracks;

#[derive(Debug)]
pub enum SpotifyError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    Transport(reqwest::Error),
    /// Spotify answered with something other than 200.
    Upstream { status: StatusCode, body: String },
    /// A 200 response whose body did not have the expected shape.
    Decode(String),
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Transport(err)
    }
}

impl std::fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotifyError::Transport(e) => write!(f, "request to Spotify failed: {}", e),
            SpotifyError::Upstream { status, body } => {
                write!(f, "Spotify responded with {}: {}", status, body)
            }
            SpotifyError::Decode(msg) => write!(f, "unexpected Spotify response: {}", msg),
        }
    }
}

impl std::error::Error for SpotifyError {}
