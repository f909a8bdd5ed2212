use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::admin::auth::{self, AdminAuthError};
use crate::admin::require_admin;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/v1/admin/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !auth::verify_password(&state.db, &req.password).await? {
        return Err(AppError::Unauthorized);
    }
    let token = state.sessions.open().await;
    info!("admin session opened");
    Ok(Json(LoginResponse { token }))
}

/// POST /api/v1/admin/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;
    if let Some(token) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        state.sessions.close(token).await;
        info!("admin session closed");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/password
pub async fn handle_change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;

    if !auth::verify_password(&state.db, &req.current_password).await? {
        return Err(AppError::Unauthorized);
    }

    auth::set_password(&state.db, &req.new_password)
        .await
        .map_err(|e| match e {
            AdminAuthError::TooShort => AppError::Validation(e.to_string()),
            AdminAuthError::Database(e) => AppError::Database(e),
        })?;

    info!("admin password changed");
    Ok(StatusCode::NO_CONTENT)
}
