//! In-process admin session tokens. Process-scoped on purpose: restarting
//! the service logs the admin out, matching the short-lived session
//! semantics of a browser session flag.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new session and returns its bearer token.
    pub async fn open(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.write().await.insert(token.clone());
        token
    }

    /// Revokes a session token. Returns whether the token was active.
    pub async fn close(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token)
    }

    pub async fn is_active(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_then_check_then_close() {
        let sessions = SessionStore::new();
        let token = sessions.open().await;
        assert!(sessions.is_active(&token).await);
        assert!(sessions.close(&token).await);
        assert!(!sessions.is_active(&token).await);
    }

    #[tokio::test]
    async fn test_unknown_token_is_inactive() {
        let sessions = SessionStore::new();
        assert!(!sessions.is_active("not-a-token").await);
        assert!(!sessions.close("not-a-token").await);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let sessions = SessionStore::new();
        let first = sessions.open().await;
        let second = sessions.open().await;
        assert_ne!(first, second);
        sessions.close(&first).await;
        assert!(sessions.is_active(&second).await);
    }
}
