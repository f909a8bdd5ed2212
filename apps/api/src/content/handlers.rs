use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::admin::require_admin;
use crate::content::models::{ContentRecord, Language};
use crate::errors::AppError;
use crate::state::AppState;
use crate::translation::orchestrator::{save_with_auto_translation, SyncEvent, SyncReport};
use crate::upload::read_file_field;

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub report: SyncReport,
    pub events: Vec<SyncEvent>,
}

/// GET /api/v1/content/:language
pub async fn handle_get_content(
    State(state): State<AppState>,
    Path(language): Path<Language>,
) -> Json<ContentRecord> {
    Json(state.store.load_or_default(language).await)
}

/// PUT /api/v1/content/:language
///
/// Plain whole-record save for one language, without auto-translation.
pub async fn handle_save_content(
    State(state): State<AppState>,
    Path(language): Path<Language>,
    headers: HeaderMap,
    Json(record): Json<ContentRecord>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;
    state.store.save(language, &record).await?;
    info!(language = %language, "record saved");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/content/sync
///
/// Saves the canonical (Korean) record, then translates and persists the
/// derived languages, tolerating partial failure. The response carries the
/// progress events in order alongside the final report.
pub async fn handle_sync_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(record): Json<ContentRecord>,
) -> Result<Json<SyncResponse>, AppError> {
    require_admin(&state, &headers).await?;

    let mut events = Vec::new();
    let report = save_with_auto_translation(
        &state.store,
        state.translator.as_ref(),
        record,
        |event| events.push(event),
    )
    .await?;

    Ok(Json(SyncResponse { report, events }))
}

/// POST /api/v1/content/:language/reset
pub async fn handle_reset_content(
    State(state): State<AppState>,
    Path(language): Path<Language>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;
    state.store.reset(language).await?;
    info!(language = %language, "record reset to defaults");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/content/:language/export
///
/// Serves the persisted-or-default record as a JSON file download.
pub async fn handle_export_content(
    State(state): State<AppState>,
    Path(language): Path<Language>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let json = state.store.export_json(language).await?;
    let filename = format!("portfolio_{}_{}.json", language, Utc::now().format("%Y-%m-%d"));

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        json,
    ))
}

/// POST /api/v1/content/:language/import
///
/// Parses an uploaded JSON document as a full record and persists it.
/// Malformed documents are rejected with a 422 and leave the stored record
/// untouched.
pub async fn handle_import_content(
    State(state): State<AppState>,
    Path(language): Path<Language>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<ContentRecord>, AppError> {
    require_admin(&state, &headers).await?;

    let bytes = read_file_field(multipart).await?;
    let record = state.store.import_json(language, &bytes).await?;
    info!(language = %language, "record imported");
    Ok(Json(record))
}
