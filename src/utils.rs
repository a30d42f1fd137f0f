use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;

/// Generates a random string of ASCII letters and digits.
///
/// Used for the anti-forgery `state` parameter of the authorization request.
///
/// # Arguments
///
/// * `length` - Number of characters to produce
///
/// # Example
///
/// ```ignore
/// let state = generate_random_string(16);
/// assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Value for the `Authorization` header of the token exchange.
///
/// Encodes `client_id:client_secret` with standard base64 as HTTP Basic
/// credentials.
///
/// # Example
///
/// ```ignore
/// assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Builds the Spotify authorization URL with every parameter percent-encoded.
///
/// # Arguments
///
/// * `auth_url` - Authorization endpoint, e.g. `https://accounts.spotify.com/authorize`
/// * `client_id` - Spotify application id
/// * `scope` - Space separated list of requested permissions
/// * `redirect_uri` - Where Spotify sends the browser back to
/// * `state` - Anti-forgery string the callback will receive again
///
/// # Errors
///
/// Returns a message when `auth_url` is not an absolute URL.
pub fn build_authorize_url(
    auth_url: &str,
    client_id: &str,
    scope: &str,
    redirect_uri: &str,
    state: &str,
) -> Result<Url, String> {
    Url::parse_with_params(
        auth_url,
        &[
            ("response_type", "code"),
            ("client_id", client_id),
            ("scope", scope),
            ("redirect_uri", redirect_uri),
            ("state", state),
        ],
    )
    .map_err(|e| format!("Invalid authorization endpoint {}: {}", auth_url, e))
}

/// Pulls the track id out of a shared link such as
/// `https://open.spotify.com/track/<id>?si=<share-id>`.
///
/// Takes whatever follows the last `/` and drops a trailing query string.
/// No further validation happens, so odd input yields an odd (possibly empty)
/// id.
///
/// # Example
///
/// ```ignore
/// let id = track_id_from_url("https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl?si=xyz");
/// assert_eq!(id, "11dFghVXANMlKmJXsNCbNl");
/// ```
pub fn track_id_from_url(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or_default();
    last.split('?').next().unwrap_or_default()
}
