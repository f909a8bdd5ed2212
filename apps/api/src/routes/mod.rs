pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::admin::handlers as admin_handlers;
use crate::chat::handlers as chat_handlers;
use crate::content::handlers as content_handlers;
use crate::extraction::handlers as extraction_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public content + chat
        .route(
            "/api/v1/content/:language",
            get(content_handlers::handle_get_content).put(content_handlers::handle_save_content),
        )
        .route("/api/v1/chat", post(chat_handlers::handle_chat))
        // Admin content management
        .route(
            "/api/v1/content/sync",
            post(content_handlers::handle_sync_content),
        )
        .route(
            "/api/v1/content/:language/reset",
            post(content_handlers::handle_reset_content),
        )
        .route(
            "/api/v1/content/:language/export",
            get(content_handlers::handle_export_content),
        )
        .route(
            "/api/v1/content/:language/import",
            post(content_handlers::handle_import_content),
        )
        // PDF extraction
        .route(
            "/api/v1/extraction",
            post(extraction_handlers::handle_extract),
        )
        .route(
            "/api/v1/extraction/confirm",
            post(extraction_handlers::handle_extract_confirm),
        )
        // Admin sessions
        .route("/api/v1/admin/login", post(admin_handlers::handle_login))
        .route("/api/v1/admin/logout", post(admin_handlers::handle_logout))
        .route(
            "/api/v1/admin/password",
            put(admin_handlers::handle_change_password),
        )
        .with_state(state)
}
