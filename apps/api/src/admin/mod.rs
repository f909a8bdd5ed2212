// Admin access: one shared password, short-lived bearer-token sessions.
// Every mutating route calls `require_admin` before touching state.

pub mod auth;
pub mod handlers;
pub mod sessions;

use axum::http::{header, HeaderMap};

use crate::errors::AppError;
use crate::state::AppState;

/// Rejects the request unless it carries an active admin session token.
pub async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    if state.sessions.is_active(token).await {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc-123"),
        );
        assert_eq!(bearer_token(&headers), Some("abc-123"));
    }

    #[test]
    fn test_missing_or_malformed_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc-123"));
        assert_eq!(bearer_token(&headers), None);
    }
}
