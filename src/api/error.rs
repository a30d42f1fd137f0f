use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Failures surfaced by the relay's HTTP handlers.
///
/// Every variant renders as a JSON body with an `error` field, except
/// [`ApiError::Upstream`] which forwards Spotify's own JSON error body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream { status: StatusCode, body: String },
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    /// HTTP status the error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => *status,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) | ApiError::BadGateway(msg) | ApiError::Internal(msg) => {
                write!(f, "{}", msg)
            }
            ApiError::Upstream { status, body } => write!(f, "upstream {}: {}", status, body),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::BadGateway(msg) | ApiError::Internal(msg) => {
                json!({ "error": msg })
            }
            // Spotify errors are JSON already; anything else gets wrapped.
            ApiError::Upstream { body, .. } => serde_json::from_str::<Value>(&body)
                .unwrap_or_else(|_| json!({ "error": body })),
        };

        (status, Json(body)).into_response()
    }
}
