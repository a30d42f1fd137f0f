use axum::{
    extract::{Query, State},
    response::Response,
};

use crate::{
    api::{ApiError, login::found},
    server::AppState,
    spotify, success,
    types::CallbackParams,
    warning,
};

const AUTH_FAILED: &str = "Unable to authenticate";

/// Completes the login: validates the state, exchanges the code and stores
/// the token, then sends the browser back to the application root.
///
/// Every failure yields `400 {"error": ...}` and leaves the stored token
/// untouched. Spotify's status and error detail are only logged.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    if let Some(err) = params.error.as_deref() {
        warning!("Authorization was declined: {}", err);
        return Err(ApiError::bad_request(AUTH_FAILED));
    }

    if let Err(e) = state.session.take_state(params.state.as_deref()).await {
        warning!("Rejected callback: {}", e);
        return Err(ApiError::bad_request("State mismatch"));
    }

    let Some(code) = params.code.as_deref() else {
        warning!("Callback without authorization code");
        return Err(ApiError::bad_request(AUTH_FAILED));
    };

    match spotify::auth::exchange_code(&state.http, &state.config, code).await {
        Ok(response) => {
            let token = state.session.store(response).await;
            success!(
                "Authentication successful (scope: '{}'), token obtained at {} valid until {}",
                token.scope,
                token.obtained_at,
                token.expires_at()
            );
            Ok(found("/"))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Err(ApiError::bad_request(AUTH_FAILED))
        }
    }
}
