//! Translation adapter — translates the free-text fields of a content record
//! into a target language, leaving structural fields (ids, periods, dates,
//! tags, categories, links) untouched.
//!
//! Every field is best-effort: a failed translation keeps the original text
//! and is recorded in the per-record report instead of aborting the record.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::content::models::{ContentRecord, Language};
use crate::llm_client::{LlmClient, LlmError};
use crate::translation::prompts::{build_batch_prompt, build_text_prompt, TRANSLATION_SYSTEM};

/// Lists longer than this are translated as one newline-joined request
/// instead of one request per element.
pub const BATCH_THRESHOLD: usize = 5;

/// Outcome of translating a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldResult {
    Translated(String),
    /// The original text was kept; `reason` says why.
    Degraded { original: String, reason: String },
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Llm(#[from] LlmError),
}

/// Per-record aggregation of field outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationReport {
    pub target: Language,
    pub translated_fields: usize,
    pub degraded_fields: usize,
    /// Labels of fields that kept their original text.
    pub degraded: Vec<String>,
}

impl TranslationReport {
    pub fn new(target: Language) -> Self {
        Self {
            target,
            translated_fields: 0,
            degraded_fields: 0,
            degraded: Vec::new(),
        }
    }

    /// Records the outcome for `label` and unwraps it to the field value.
    fn take(&mut self, label: &str, result: FieldResult) -> String {
        match result {
            FieldResult::Translated(value) => {
                self.translated_fields += 1;
                value
            }
            FieldResult::Degraded { original, reason } => {
                self.degraded_fields += 1;
                self.degraded.push(label.to_string());
                debug!(field = label, reason = %reason, "kept original text");
                original
            }
        }
    }

    fn take_list(&mut self, label: &str, results: Vec<FieldResult>) -> Vec<String> {
        results
            .into_iter()
            .enumerate()
            .map(|(i, result)| self.take(&format!("{label}[{i}]"), result))
            .collect()
    }
}

/// A translated record together with its field-level report.
#[derive(Debug, Clone)]
pub struct TranslatedRecord {
    pub record: ContentRecord,
    pub report: TranslationReport,
}

/// Seam between the orchestrator and the hosted model; tests substitute
/// stub implementations.
#[async_trait]
pub trait RecordTranslator: Send + Sync {
    async fn translate_record(
        &self,
        source: &ContentRecord,
        target: Language,
    ) -> Result<TranslatedRecord, TranslationError>;
}

/// LLM-backed translator.
pub struct LlmTranslator {
    llm: LlmClient,
}

impl LlmTranslator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Translates one free-text field. Empty input passes through; any
    /// failure degrades to the original text.
    async fn translate_text(
        &self,
        text: &str,
        target: Language,
        context: Option<&str>,
    ) -> FieldResult {
        if text.trim().is_empty() {
            return FieldResult::Translated(text.to_string());
        }
        let prompt = build_text_prompt(text, target, context);
        match self.llm.call_text(&prompt, TRANSLATION_SYSTEM).await {
            Ok(translated) => FieldResult::Translated(translated),
            Err(e) => FieldResult::Degraded {
                original: text.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Translates an ordered list. Short lists go element-by-element for
    /// accuracy; longer lists are joined into a single request to bound
    /// request volume, then re-split preserving element count.
    async fn translate_list(
        &self,
        items: &[String],
        target: Language,
        context: Option<&str>,
    ) -> Vec<FieldResult> {
        if items.is_empty() {
            return Vec::new();
        }
        if items.len() <= BATCH_THRESHOLD {
            let mut results = Vec::with_capacity(items.len());
            for item in items {
                results.push(self.translate_text(item, target, context).await);
            }
            return results;
        }

        let prompt = build_batch_prompt(items, target, context);
        match self.llm.call_text(&prompt, TRANSLATION_SYSTEM).await {
            Ok(response) => realign_batch(items, &response),
            Err(e) => items
                .iter()
                .map(|item| FieldResult::Degraded {
                    original: item.clone(),
                    reason: e.to_string(),
                })
                .collect(),
        }
    }
}

/// Re-splits a batched response by line, preserving the input element count:
/// missing tail lines are padded with the untranslated originals, surplus
/// lines are dropped.
pub(crate) fn realign_batch(originals: &[String], response: &str) -> Vec<FieldResult> {
    let lines: Vec<&str> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    originals
        .iter()
        .enumerate()
        .map(|(i, original)| match lines.get(i) {
            Some(line) => FieldResult::Translated((*line).to_string()),
            None => FieldResult::Degraded {
                original: original.clone(),
                reason: "batch response had fewer lines than inputs".to_string(),
            },
        })
        .collect()
}

#[async_trait]
impl RecordTranslator for LlmTranslator {
    async fn translate_record(
        &self,
        source: &ContentRecord,
        target: Language,
    ) -> Result<TranslatedRecord, TranslationError> {
        let mut report = TranslationReport::new(target);
        let mut record = source.clone();

        // Profile: identity and contact fields stay as-is.
        let summary = self
            .translate_text(&source.profile.summary, target, Some("Profile summary"))
            .await;
        record.profile.summary = report.take("profile.summary", summary);

        for (i, project) in record.projects.iter_mut().enumerate() {
            let label = format!("projects[{i}]");
            let client = self
                .translate_text(&project.client, target, Some("Company/client name"))
                .await;
            project.client = report.take(&format!("{label}.client"), client);

            let role = self
                .translate_text(&project.role, target, Some("Project role"))
                .await;
            project.role = report.take(&format!("{label}.role"), role);

            let description = self
                .translate_text(&project.description, target, Some("Project description"))
                .await;
            project.description = report.take(&format!("{label}.description"), description);

            let tasks = self
                .translate_list(&project.tasks, target, Some("Project tasks"))
                .await;
            project.tasks = report.take_list(&format!("{label}.tasks"), tasks);

            if let Some(results) = project.results.take() {
                let translated = self
                    .translate_list(&results, target, Some("Project results"))
                    .await;
                project.results =
                    Some(report.take_list(&format!("{label}.results"), translated));
            }
            // tags stay as-is (technical terms)
        }

        for (i, career) in record.career_history.iter_mut().enumerate() {
            let label = format!("careerHistory[{i}]");
            let company = self
                .translate_text(&career.company, target, Some("Company name"))
                .await;
            career.company = report.take(&format!("{label}.company"), company);

            let role = self
                .translate_text(&career.role, target, Some("Job role"))
                .await;
            career.role = report.take(&format!("{label}.role"), role);

            if let Some(description) = career.description.take() {
                let translated = self
                    .translate_text(&description, target, Some("Career description"))
                    .await;
                career.description =
                    Some(report.take(&format!("{label}.description"), translated));
            }

            let details = self
                .translate_list(&career.details, target, Some("Career details"))
                .await;
            career.details = report.take_list(&format!("{label}.details"), details);
        }

        for (i, skill) in record.skills.iter_mut().enumerate() {
            let label = format!("skills[{i}]");
            let name = self
                .translate_text(&skill.name, target, Some("Skill category name"))
                .await;
            skill.name = report.take(&format!("{label}.name"), name);

            let items = self
                .translate_list(&skill.items, target, Some("Skill items"))
                .await;
            skill.items = report.take_list(&format!("{label}.items"), items);
        }

        for (i, certification) in record.certifications.iter_mut().enumerate() {
            let label = format!("certifications[{i}]");
            let name = self
                .translate_text(&certification.name, target, Some("Certification name"))
                .await;
            certification.name = report.take(&format!("{label}.name"), name);

            if let Some(issuer) = certification.issuer.take() {
                let translated = self
                    .translate_text(&issuer, target, Some("Certification issuer"))
                    .await;
                certification.issuer =
                    Some(report.take(&format!("{label}.issuer"), translated));
            }
            // date stays as-is
        }

        for (i, lecture) in record.lectures.iter_mut().enumerate() {
            let label = format!("lectures[{i}]");
            let title = self
                .translate_text(&lecture.title, target, Some("Lecture title"))
                .await;
            lecture.title = report.take(&format!("{label}.title"), title);

            let organizer = self
                .translate_text(&lecture.organizer, target, Some("Lecture organizer"))
                .await;
            lecture.organizer = report.take(&format!("{label}.organizer"), organizer);

            let role = self
                .translate_text(&lecture.role, target, Some("Lecture role"))
                .await;
            lecture.role = report.take(&format!("{label}.role"), role);

            let description = self
                .translate_text(&lecture.description, target, Some("Lecture description"))
                .await;
            lecture.description = report.take(&format!("{label}.description"), description);

            let details = self
                .translate_list(&lecture.details, target, Some("Lecture details"))
                .await;
            lecture.details = report.take_list(&format!("{label}.details"), details);
            // tags stay as-is (technical terms)
        }

        Ok(TranslatedRecord { record, report })
    }
}
