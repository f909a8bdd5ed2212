use std::sync::Arc;

use sqlx::SqlitePool;

use crate::admin::sessions::SessionStore;
use crate::content::store::ContentStore;
use crate::llm_client::LlmClient;
use crate::translation::translator::RecordTranslator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub store: ContentStore,
    pub llm: LlmClient,
    /// Pluggable record translator. Production uses `LlmTranslator`; tests
    /// substitute stubs.
    pub translator: Arc<dyn RecordTranslator>,
    pub sessions: SessionStore,
}
