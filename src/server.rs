use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use axum::{Router, http::HeaderValue, routing::get};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::{Res, api, config::Config, info, management::SessionManager};

/// State handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: SessionManager,
    pub http: Client,
}

impl AppState {
    /// Fresh state with an empty session and a default HTTP client.
    pub fn new(config: Config) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Same as [`AppState::new`] with a caller supplied HTTP client.
    pub fn with_client(config: Config, http: Client) -> Self {
        Self {
            config: Arc::new(config),
            session: SessionManager::new(),
            http,
        }
    }
}

/// Builds the relay's router, CORS included.
///
/// Browsers may only call the relay from the configured frontend origin.
/// Any method and header is accepted from there; since credentials are
/// allowed, the requested method and headers are echoed back instead of `*`.
///
/// # Errors
///
/// Fails when the configured frontend origin is not a valid header value.
pub fn app(state: AppState) -> Res<Router> {
    let origin = HeaderValue::from_str(&state.config.frontend_origin)?;
    let cors = CorsLayer::new()
        .allow_origin([origin])
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(api::health))
        .route("/auth/login", get(api::login))
        .route("/auth/callback", get(api::callback))
        .route("/auth/token", get(api::token))
        .route("/auth/play_by_url", get(api::play_by_url))
        .layer(cors)
        .with_state(state))
}

/// Binds the listener for `addr` (`host:port`).
///
/// Port `0` picks a free port; read it back with `local_addr()`.
pub async fn bind(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    Ok(TcpListener::bind(&addr).await?)
}

/// Browser URL of the login route for a bound address.
///
/// A wildcard bind (`0.0.0.0`, `::`) is not reachable as a URL, so the
/// matching loopback address is used instead.
pub fn login_url(addr: SocketAddr) -> String {
    let mut addr = addr;
    if addr.ip().is_unspecified() {
        let loopback: IpAddr = match addr {
            SocketAddr::V4(_) => Ipv4Addr::LOCALHOST.into(),
            SocketAddr::V6(_) => Ipv6Addr::LOCALHOST.into(),
        };
        addr.set_ip(loopback);
    }
    format!("http://{}/auth/login", addr)
}

/// Serves the relay on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Res<()> {
    let app = app(state)?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Binds `SERVER_ADDRESS` from the config and serves on it.
pub async fn start_api_server(state: AppState) -> Res<()> {
    let listener = bind(&state.config.server_addr).await?;
    serve(listener, state).await
}
