// Resume-document extraction: PDF → text → structured project candidates.
// The LLM path in `extractor` is the primary contract; `fallback` is a
// clearly degraded line scanner used only when the model's output cannot
// be parsed. Candidates never reach the store without explicit admin
// confirmation.

pub mod dedup;
pub mod extractor;
pub mod fallback;
pub mod handlers;
pub mod pdf;
pub mod prompts;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::models::{ProjectCategory, ProjectRecord};
use crate::extraction::pdf::MAX_UPLOAD_BYTES;
use crate::llm_client::LlmError;

/// A project-like record recovered from an uploaded document. Ephemeral:
/// promoted to a `ProjectRecord` only when the admin confirms it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProjectCandidate {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl ExtractedProjectCandidate {
    /// Promotes a confirmed candidate to a full project record. The admin
    /// fills in role, tags, and category afterwards through the normal edit
    /// flow.
    pub fn into_project_record(self, id: String) -> ProjectRecord {
        ProjectRecord {
            id,
            client: self.company,
            role: String::new(),
            period: self.period,
            description: self.description,
            tasks: self.tasks,
            results: None,
            tags: Vec::new(),
            category: ProjectCategory::Project,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded file is too large ({size} bytes, max {MAX_UPLOAD_BYTES})")]
    FileTooLarge { size: usize },

    #[error("could not read the PDF: {0}")]
    Pdf(String),

    #[error("the PDF contains no extractable text; it may be an image-only scan")]
    EmptyText,

    #[error("AI extraction failed: {message}")]
    Llm { message: String },

    #[error("no project records could be recovered from the document")]
    Unusable,
}

impl ExtractionError {
    /// Builds the admin-facing message for an upstream failure, appending a
    /// credential hint when the failure looks credential-related.
    pub fn from_llm(error: LlmError) -> Self {
        let mut message = error.to_string();
        if error.is_credential_failure() {
            message.push_str(" (check that ANTHROPIC_API_KEY is set and valid)");
        }
        ExtractionError::Llm { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_maps_candidate_fields() {
        let candidate = ExtractedProjectCandidate {
            period: "2025.01".to_string(),
            company: "Acme".to_string(),
            project_name: "리브랜딩 캠페인".to_string(),
            description: "브랜드 리뉴얼 론칭 캠페인".to_string(),
            tasks: vec!["캠페인 기획".to_string(), "매체 집행".to_string()],
        };

        let record = candidate.into_project_record("1754400000000".to_string());
        assert_eq!(record.id, "1754400000000");
        assert_eq!(record.client, "Acme");
        assert_eq!(record.period, "2025.01");
        assert_eq!(record.category, ProjectCategory::Project);
        assert!(record.role.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.tasks.len(), 2);
        assert!(record.results.is_none());
    }

    #[test]
    fn test_credential_hint_appended_for_auth_failures() {
        let error = ExtractionError::from_llm(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        });
        assert!(error.to_string().contains("ANTHROPIC_API_KEY"));

        let error = ExtractionError::from_llm(LlmError::EmptyContent);
        assert!(!error.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_candidate_deserializes_with_missing_fields() {
        let candidate: ExtractedProjectCandidate =
            serde_json::from_str(r#"{"period": "2024.08", "projectName": "이름만"}"#).unwrap();
        assert_eq!(candidate.period, "2024.08");
        assert_eq!(candidate.project_name, "이름만");
        assert!(candidate.company.is_empty());
        assert!(candidate.tasks.is_empty());
    }
}
