use axum::{Json, extract::State};

use crate::{server::AppState, types::AccessTokenBody};

/// Returns the stored access token, or an empty string before the first login.
pub async fn token(State(state): State<AppState>) -> Json<AccessTokenBody> {
    Json(AccessTokenBody {
        access_token: state.session.access_token().await,
    })
}
