use std::collections::HashMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use spotrelay::config::{SPOTIFY_REDIRECT_URI, SPOTIFY_SCOPE, STATE_LENGTH};
use spotrelay::utils::*;

#[test]
fn test_generate_random_string() {
    let state = generate_random_string(STATE_LENGTH);

    assert_eq!(state.len(), 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated strings should be different
    let state2 = generate_random_string(STATE_LENGTH);
    assert_ne!(state, state2);
}

#[test]
fn test_generate_random_string_zero_length() {
    assert_eq!(generate_random_string(0), "");
}

#[test]
fn test_basic_auth_header() {
    let header = basic_auth_header("my-client", "s3cr3t");

    assert!(header.starts_with("Basic "));
    let encoded = header.trim_start_matches("Basic ");
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "my-client:s3cr3t");
}

#[test]
fn test_build_authorize_url() {
    let url = build_authorize_url(
        "https://accounts.spotify.com/authorize",
        "client-123",
        SPOTIFY_SCOPE,
        SPOTIFY_REDIRECT_URI,
        "AbCdEf0123456789",
    )
    .unwrap();

    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");

    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["client_id"], "client-123");
    assert_eq!(params["scope"], "streaming user-read-email user-read-private");
    assert_eq!(params["redirect_uri"], "http://localhost:3000/auth/callback");
    assert_eq!(params["state"], "AbCdEf0123456789");
}

#[test]
fn test_build_authorize_url_escapes_reserved_characters() {
    let url = build_authorize_url(
        "https://accounts.spotify.com/authorize",
        "a&b=c",
        SPOTIFY_SCOPE,
        SPOTIFY_REDIRECT_URI,
        "state",
    )
    .unwrap();

    // The raw value must not leak into the query as extra parameters.
    assert!(!url.as_str().contains("a&b=c"));
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "a&b=c");
    assert!(!params.contains_key("b"));
}

#[test]
fn test_build_authorize_url_rejects_bad_endpoint() {
    assert!(build_authorize_url("not a url", "id", SPOTIFY_SCOPE, SPOTIFY_REDIRECT_URI, "s").is_err());
}

#[test]
fn test_track_id_from_url() {
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl?si=xyz"),
        "11dFghVXANMlKmJXsNCbNl"
    );
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl"),
        "11dFghVXANMlKmJXsNCbNl"
    );
    assert_eq!(
        track_id_from_url("https://open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC?si=1&utm=x"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_track_id_from_url_without_validation() {
    // No slash: the whole string is treated as the id
    assert_eq!(track_id_from_url("4uLU6hMCjMI75M1A2tKUQC"), "4uLU6hMCjMI75M1A2tKUQC");

    // Trailing slash or empty input yield an empty id
    assert_eq!(track_id_from_url("https://open.spotify.com/track/"), "");
    assert_eq!(track_id_from_url(""), "");
}
