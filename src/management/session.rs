use std::{collections::VecDeque, sync::Arc};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::types::{Token, TokenResponse};

/// Upper bound on login attempts awaiting their callback.
pub const MAX_PENDING_STATES: usize = 32;

/// Why a callback's `state` was refused.
#[derive(Debug, PartialEq, Eq)]
pub enum StateError {
    Missing,
    Unknown(String),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::Missing => write!(f, "missing state parameter"),
            StateError::Unknown(state) => write!(f, "unknown state parameter '{}'", state),
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    token: Token,
    pending_states: VecDeque<String>,
}

/// Process-wide session shared by all handlers.
///
/// Holds exactly one token slot, so every caller sees the same credential.
/// Serving several users would need one slot per session id.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    inner: Arc<Mutex<Session>>,
}

impl SessionManager {
    /// Empty session: no token, no outstanding logins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers a freshly issued state string, evicting the oldest one when
    /// more than [`MAX_PENDING_STATES`] are outstanding.
    pub async fn register_state(&self, state: String) {
        let mut session = self.inner.lock().await;
        if session.pending_states.len() >= MAX_PENDING_STATES {
            session.pending_states.pop_front();
        }
        session.pending_states.push_back(state);
    }

    /// Checks a returned state against the issued ones and consumes it.
    ///
    /// # Errors
    ///
    /// - [`StateError::Missing`] when the callback carried no state
    /// - [`StateError::Unknown`] when it was never issued, already used, or evicted
    pub async fn take_state(&self, state: Option<&str>) -> Result<(), StateError> {
        let Some(state) = state else {
            return Err(StateError::Missing);
        };

        let mut session = self.inner.lock().await;
        match session.pending_states.iter().position(|s| s == state) {
            Some(idx) => {
                session.pending_states.remove(idx);
                Ok(())
            }
            None => Err(StateError::Unknown(state.to_string())),
        }
    }

    /// Number of logins still waiting for their callback.
    pub async fn pending_states(&self) -> usize {
        self.inner.lock().await.pending_states.len()
    }

    /// Overwrites the stored token with a fresh exchange result and returns
    /// what was stored. Last write wins.
    pub async fn store(&self, response: TokenResponse) -> Token {
        let token = Token {
            access_token: response.access_token,
            scope: response.scope.unwrap_or_default(),
            expires_in: response.expires_in.unwrap_or_default(),
            obtained_at: Utc::now().timestamp() as u64,
        };

        let mut session = self.inner.lock().await;
        session.token = token.clone();
        token
    }

    /// Current access token; empty until the first successful exchange.
    pub async fn access_token(&self) -> String {
        self.inner.lock().await.token.access_token.clone()
    }

    /// Snapshot of the stored token including its expiry metadata.
    pub async fn current_token(&self) -> Token {
        self.inner.lock().await.token.clone()
    }

    /// `true` once any exchange has succeeded. Expiry is not checked.
    pub async fn is_authenticated(&self) -> bool {
        !self.inner.lock().await.token.access_token.is_empty()
    }
}
