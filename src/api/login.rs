use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    api::ApiError,
    config::{SPOTIFY_SCOPE, STATE_LENGTH},
    info,
    server::AppState,
    utils,
};

/// Sends the browser to Spotify's consent page.
///
/// A new state string is generated and remembered for every call so the
/// callback can tell its own logins apart from forged ones.
pub async fn login(State(state): State<AppState>) -> Result<Response, ApiError> {
    let nonce = utils::generate_random_string(STATE_LENGTH);

    let auth_url = utils::build_authorize_url(
        &state.config.auth_url,
        &state.config.client_id,
        SPOTIFY_SCOPE,
        &state.config.redirect_uri,
        &nonce,
    )
    .map_err(ApiError::Internal)?;

    state.session.register_state(nonce).await;
    info!("Redirecting to Spotify authorization page");

    Ok(found(auth_url.as_str()))
}

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
