use serde::{Deserialize, Serialize};

/// Token as stored by the relay after a successful code exchange.
///
/// Expiry is informational only; the relay never refreshes.
#[derive(Debug, Clone, Default)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Unix timestamp after which Spotify will reject the token.
    pub fn expires_at(&self) -> u64 {
        self.obtained_at + self.expires_in
    }
}

/// Body of a successful `POST /api/token` response from Spotify.
///
/// Only `access_token` is required. Other fields Spotify sends
/// (`token_type`, `refresh_token`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// The part of Spotify's track object the relay reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub uri: Option<String>,
}

/// Query of `GET /auth/callback`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Query of `GET /auth/play_by_url`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayByUrlParams {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenBody {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackUriBody {
    pub track_uri: String,
}
