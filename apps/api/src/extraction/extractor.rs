//! AI extraction adapter — converts raw resume text into project candidates
//! through the hosted model, with a structured-output contract.

use tracing::{info, warn};

use crate::extraction::fallback::scan_candidates;
use crate::extraction::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::extraction::{ExtractedProjectCandidate, ExtractionError};
use crate::llm_client::{LlmClient, LlmError};

/// Safety ceiling on the text excerpt sent upstream, in characters.
pub const MAX_EXCERPT_CHARS: usize = 50_000;

/// Extracts project candidates from document text.
///
/// The model is asked for a JSON array matching the candidate schema. When
/// its response is unusable as JSON, the line scanner takes over as a
/// best-effort safety net; if that also finds nothing, the whole operation
/// fails. An empty result is never passed off as a successful extraction.
/// Upstream call failures (network, credentials) are surfaced as
/// `ExtractionError` for the admin UI.
pub async fn extract_candidates(
    llm: &LlmClient,
    document_text: &str,
) -> Result<Vec<ExtractedProjectCandidate>, ExtractionError> {
    let excerpt = truncate_excerpt(document_text);
    let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", excerpt);

    match llm
        .call_json::<Vec<ExtractedProjectCandidate>>(&prompt, EXTRACTION_SYSTEM)
        .await
    {
        Ok(raw) => {
            let candidates = sanitize_candidates(raw);
            info!("AI extraction produced {} candidates", candidates.len());
            Ok(candidates)
        }
        Err(e @ (LlmError::Parse(_) | LlmError::EmptyContent)) => {
            warn!(error = %e, "model response was not usable JSON, falling back to line scanner");
            let candidates = sanitize_candidates(scan_candidates(document_text));
            if candidates.is_empty() {
                Err(ExtractionError::Unusable)
            } else {
                info!("fallback scanner recovered {} candidates", candidates.len());
                Ok(candidates)
            }
        }
        Err(e) => Err(ExtractionError::from_llm(e)),
    }
}

/// Truncates to the request-size ceiling without splitting a character.
pub(crate) fn truncate_excerpt(text: &str) -> &str {
    match text.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Drops candidates missing any of {period, company, projectName} and
/// defaults empty descriptions to the project name.
pub(crate) fn sanitize_candidates(
    raw: Vec<ExtractedProjectCandidate>,
) -> Vec<ExtractedProjectCandidate> {
    raw.into_iter()
        .filter(|c| {
            !c.period.trim().is_empty()
                && !c.company.trim().is_empty()
                && !c.project_name.trim().is_empty()
        })
        .map(|mut c| {
            if c.description.trim().is_empty() {
                c.description = c.project_name.clone();
            }
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(period: &str, company: &str, name: &str) -> ExtractedProjectCandidate {
        ExtractedProjectCandidate {
            period: period.to_string(),
            company: company.to_string(),
            project_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sanitize_drops_incomplete_candidates() {
        let raw = vec![
            candidate("2024.08", "한빛유통", "채널 통합"),
            candidate("", "회사", "이름"),
            candidate("2024.09", "", "이름"),
            candidate("2024.10", "회사", ""),
        ];
        let kept = sanitize_candidates(raw);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].company, "한빛유통");
    }

    #[test]
    fn test_sanitize_defaults_description_to_project_name() {
        let kept = sanitize_candidates(vec![candidate("2024.08", "회사", "브랜드 개편")]);
        assert_eq!(kept[0].description, "브랜드 개편");
    }

    #[test]
    fn test_sanitize_keeps_existing_description() {
        let mut c = candidate("2024.08", "회사", "브랜드 개편");
        c.description = "상세 설명".to_string();
        let kept = sanitize_candidates(vec![c]);
        assert_eq!(kept[0].description, "상세 설명");
    }

    #[test]
    fn test_truncate_excerpt_caps_length() {
        let text = "a".repeat(MAX_EXCERPT_CHARS + 100);
        assert_eq!(truncate_excerpt(&text).len(), MAX_EXCERPT_CHARS);
    }

    #[test]
    fn test_truncate_excerpt_counts_characters_not_bytes() {
        // Hangul syllables are 3 bytes each in UTF-8.
        let text = "가".repeat(MAX_EXCERPT_CHARS + 10);
        let excerpt = truncate_excerpt(&text);
        assert_eq!(excerpt.chars().count(), MAX_EXCERPT_CHARS);
        assert!(excerpt.is_char_boundary(excerpt.len()));
    }

    #[test]
    fn test_truncate_excerpt_passes_short_text_through() {
        assert_eq!(truncate_excerpt("짧은 텍스트"), "짧은 텍스트");
    }
}
