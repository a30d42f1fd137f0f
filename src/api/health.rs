use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::server::AppState;

/// Liveness check. `authenticated` tells whether a token has been stored yet;
/// it does not say whether Spotify still accepts it.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": state.session.is_authenticated().await,
    }))
}
