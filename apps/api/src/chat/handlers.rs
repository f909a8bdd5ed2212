use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::turn::answer_question;
use crate::content::models::Language;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.question.trim().is_empty() {
        return Err(AppError::Validation("question must not be empty".to_string()));
    }

    let record = state.store.load_or_default(req.language).await;
    let answer = answer_question(&state.llm, &record, req.language, &req.question).await;
    Ok(Json(ChatResponse { answer }))
}
