use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::admin::require_admin;
use crate::content::models::Language;
use crate::errors::AppError;
use crate::extraction::dedup::{find_duplicates, DuplicateScan};
use crate::extraction::extractor::extract_candidates;
use crate::extraction::pdf;
use crate::extraction::ExtractedProjectCandidate;
use crate::state::AppState;
use crate::translation::orchestrator::{save_with_auto_translation, SyncEvent, SyncReport};
use crate::upload::read_file_field;

#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub candidates: Vec<ExtractedProjectCandidate>,
    #[serde(flatten)]
    pub scan: DuplicateScan,
}

fn default_skip_duplicates() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub candidates: Vec<ExtractedProjectCandidate>,
    /// When set (the default), candidates that duplicate an existing project
    /// are skipped instead of appended.
    #[serde(default = "default_skip_duplicates")]
    pub skip_duplicates: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub added: usize,
    pub skipped_duplicates: usize,
    pub sync: SyncReport,
    pub events: Vec<SyncEvent>,
}

/// POST /api/v1/extraction
///
/// Uploads a resume PDF, extracts project candidates through the model
/// (falling back to the line scanner on unparseable output), and flags
/// candidates that duplicate projects already in the canonical record.
pub async fn handle_extract(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    require_admin(&state, &headers).await?;

    let bytes = read_file_field(multipart).await?;
    let text = pdf::extract_text(&bytes)?;
    info!("extracted {} characters of PDF text", text.chars().count());

    let candidates = extract_candidates(&state.llm, &text).await?;

    let existing = state.store.load_or_default(Language::CANONICAL).await;
    let scan = find_duplicates(&candidates, &existing.projects);
    info!(
        "{} candidates, {} flagged as duplicates",
        candidates.len(),
        scan.duplicates.len()
    );

    Ok(Json(ExtractionResponse { candidates, scan }))
}

/// POST /api/v1/extraction/confirm
///
/// Promotes admin-selected candidates to project records on the canonical
/// record, then runs the auto-translate orchestrator. Ids are time-based,
/// matching the rest of the admin tooling.
pub async fn handle_extract_confirm(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, AppError> {
    require_admin(&state, &headers).await?;

    let mut record = state.store.load_or_default(Language::CANONICAL).await;
    let scan = find_duplicates(&req.candidates, &record.projects);

    let base_id = Utc::now().timestamp_millis();
    let mut added = 0usize;
    let mut skipped_duplicates = 0usize;

    for (index, candidate) in req.candidates.into_iter().enumerate() {
        if req.skip_duplicates && scan.duplicates.contains(&index) {
            skipped_duplicates += 1;
            continue;
        }
        let id = (base_id + added as i64).to_string();
        record.projects.push(candidate.into_project_record(id));
        added += 1;
    }

    info!(added, skipped_duplicates, "confirmed extracted projects");

    let mut events = Vec::new();
    let sync = save_with_auto_translation(
        &state.store,
        state.translator.as_ref(),
        record,
        |event| events.push(event),
    )
    .await?;

    Ok(Json(ConfirmResponse {
        added,
        skipped_duplicates,
        sync,
        events,
    }))
}
