mod admin;
mod chat;
mod config;
mod content;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;
mod translation;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::admin::sessions::SessionStore;
use crate::config::Config;
use crate::content::store::ContentStore;
use crate::extraction::pdf::MAX_UPLOAD_BYTES;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::translation::translator::{LlmTranslator, RecordTranslator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and the content store
    let db = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db).await?;
    let store = ContentStore::new(db.clone());

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let translator: Arc<dyn RecordTranslator> = Arc::new(LlmTranslator::new(llm.clone()));
    let sessions = SessionStore::new();

    let state = AppState {
        db,
        store,
        llm,
        translator,
        sessions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // single-operator tool behind the owner's own domain
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
