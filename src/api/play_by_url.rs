use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    api::ApiError,
    server::AppState,
    spotify::{self, SpotifyError},
    types::{PlayByUrlParams, TrackUriBody},
    utils, warning,
};

/// Resolves a shared track link to its `spotify:track:...` URI.
///
/// Uses whatever token is stored, empty or stale. Spotify's rejection is
/// forwarded with its own status and body.
pub async fn play_by_url(
    Query(params): Query<PlayByUrlParams>,
    State(state): State<AppState>,
) -> Result<Json<TrackUriBody>, ApiError> {
    let track_id = utils::track_id_from_url(&params.url);
    let token = state.session.access_token().await;

    let track = spotify::tracks::get_track(&state.http, &state.config, &token, track_id)
        .await
        .map_err(|e| {
            warning!("Track lookup for '{}' failed: {}", track_id, e);
            match e {
                SpotifyError::Upstream { status, body } => ApiError::Upstream { status, body },
                SpotifyError::Decode(_) => ApiError::bad_request("Track URI not found"),
                SpotifyError::Transport(err) => ApiError::BadGateway(err.to_string()),
            }
        })?;

    match track.uri {
        Some(track_uri) => Ok(Json(TrackUriBody { track_uri })),
        None => Err(ApiError::bad_request("Track URI not found")),
    }
}
