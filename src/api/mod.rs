//! # API Module
//!
//! HTTP handlers of the relay. All routes live under `/auth` except the health
//! check:
//!
//! - [`login`] - `GET /auth/login`, redirects to Spotify's consent page
//! - [`callback`] - `GET /auth/callback`, exchanges the code for a token
//! - [`token`] - `GET /auth/token`, hands the stored token to the frontend
//! - [`play_by_url`] - `GET /auth/play_by_url`, resolves a shared link to a track URI
//! - [`health`] - `GET /health`, liveness plus whether a token is held
//!
//! Handlers share [`AppState`](crate::server::AppState) through axum's `State`
//! extractor. Errors are rendered by [`ApiError`].

mod callback;
mod error;
mod health;
mod login;
mod play_by_url;
mod token;

pub use callback::callback;
pub use error::ApiError;
pub use health::health;
pub use login::login;
pub use play_by_url::play_by_url;
pub use token::token;
