use reqwest::{Client, StatusCode, header};

use crate::{config::Config, spotify::SpotifyError, types::TokenResponse, utils};

/// Exchanges an authorization code for an access token.
///
/// Sends a form-encoded `authorization_code` grant to the token endpoint,
/// authenticated with HTTP Basic built from the client id and secret. Any
/// status other than 200 is returned as [`SpotifyError::Upstream`].
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Relay configuration with credentials, token URL and redirect URI
/// * `code` - Authorization code received on the callback
///
/// # Errors
///
/// - [`SpotifyError::Transport`] when the token endpoint cannot be reached
/// - [`SpotifyError::Upstream`] when Spotify refuses the code or the credentials
/// - [`SpotifyError::Decode`] when a 200 body lacks `access_token`
///
/// # Example
///
/// ```ignore
/// let token = exchange_code(&client, &config, "AQA...auth_code").await?;
/// println!("Access token: {}", token.access_token);
/// ```
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenResponse, SpotifyError> {
    let res = client
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        return Err(SpotifyError::Upstream { status, body });
    }

    let body = res.text().await?;
    serde_json::from_str::<TokenResponse>(&body).map_err(|e| SpotifyError::Decode(e.to_string()))
}
