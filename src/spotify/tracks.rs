use reqwest::{Client, StatusCode};

use crate::{config::Config, spotify::SpotifyError, types::Track};

/// Fetches track metadata from `GET {api_url}/tracks/{id}`.
///
/// The bearer token is sent as-is, even when it is empty; Spotify's rejection
/// then comes back as [`SpotifyError::Upstream`] with the original body.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Relay configuration, provides the Web API base URL
/// * `token` - Bearer token for the request
/// * `track_id` - Spotify track id, e.g. `11dFghVXANMlKmJXsNCbNl`
///
/// # Errors
///
/// - [`SpotifyError::Transport`] when Spotify cannot be reached
/// - [`SpotifyError::Upstream`] for any status other than 200
/// - [`SpotifyError::Decode`] when a 200 body is not a JSON object
///
/// # Example
///
/// ```ignore
/// let track = get_track(&client, &config, &token, "11dFghVXANMlKmJXsNCbNl").await?;
/// println!("{:?}", track.uri);
/// ```
pub async fn get_track(
    client: &Client,
    config: &Config,
    token: &str,
    track_id: &str,
) -> Result<Track, SpotifyError> {
    let api_url = format!(
        "{uri}/tracks/{id}",
        uri = config.api_url.trim_end_matches('/'),
        id = track_id
    );

    let res = client.get(&api_url).bearer_auth(token).send().await?;

    let status = res.status();
    let body = res.text().await?;
    if status != StatusCode::OK {
        return Err(SpotifyError::Upstream { status, body });
    }

    serde_json::from_str::<Track>(&body).map_err(|e| SpotifyError::Decode(e.to_string()))
}
