use spotrelay::management::{MAX_PENDING_STATES, SessionManager, StateError};
use spotrelay::types::TokenResponse;

// Helper function to create a token response as Spotify would send it
fn create_token_response(token: &str) -> TokenResponse {
    TokenResponse {
        access_token: token.to_string(),
        scope: Some("streaming".to_string()),
        expires_in: Some(3600),
    }
}

#[tokio::test]
async fn test_session_starts_unauthenticated() {
    let session = SessionManager::new();

    assert_eq!(session.access_token().await, "");
    assert!(!session.is_authenticated().await);
    assert_eq!(session.pending_states().await, 0);
}

#[tokio::test]
async fn test_store_overwrites_token() {
    let session = SessionManager::new();
    session.store(create_token_response("first")).await;
    session.store(create_token_response("second")).await;

    let token = session.current_token().await;
    assert_eq!(token.access_token, "second");
    assert_eq!(token.scope, "streaming");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.expires_at(), token.obtained_at + 3600);
    assert!(session.is_authenticated().await);
}

#[tokio::test]
async fn test_store_without_optional_fields() {
    let session = SessionManager::new();
    let token = session
        .store(TokenResponse {
            access_token: "bare".to_string(),
            scope: None,
            expires_in: None,
        })
        .await;

    assert_eq!(token.scope, "");
    assert_eq!(token.expires_in, 0);
    assert_eq!(session.access_token().await, "bare");
}

#[tokio::test]
async fn test_shared_clones_see_same_token() {
    let session = SessionManager::new();
    let handle = session.clone();

    handle.store(create_token_response("shared")).await;
    assert_eq!(session.access_token().await, "shared");
}

#[tokio::test]
async fn test_state_is_single_use() {
    let session = SessionManager::new();
    session.register_state("abc".to_string()).await;

    assert_eq!(session.take_state(Some("abc")).await, Ok(()));
    assert_eq!(
        session.take_state(Some("abc")).await,
        Err(StateError::Unknown("abc".to_string()))
    );
    assert_eq!(session.take_state(None).await, Err(StateError::Missing));
}

#[tokio::test]
async fn test_oldest_state_is_evicted() {
    let session = SessionManager::new();
    for i in 0..=MAX_PENDING_STATES {
        session.register_state(format!("state-{}", i)).await;
    }

    assert_eq!(session.pending_states().await, MAX_PENDING_STATES);
    assert!(session.take_state(Some("state-0")).await.is_err());
    assert!(session.take_state(Some("state-1")).await.is_ok());
}
