//! Auto-translate orchestrator — keeps the three per-language records
//! consistent when the canonical record is edited.
//!
//! Ordering: the canonical save strictly precedes translation. A failure on
//! one derived language never blocks the other and never rolls back the
//! canonical save; only a canonical-save failure raises.

use serde::Serialize;
use tracing::{info, warn};

use crate::content::models::{ContentRecord, Language};
use crate::content::store::{ContentStore, StorageError};
use crate::translation::translator::{RecordTranslator, TranslationReport};

/// Progress notifications delivered to the caller-supplied callback after
/// each step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    CanonicalSaved { language: Language },
    TranslationStarted { language: Language },
    TranslationCompleted { language: Language },
    TranslationFailed { language: Language, error: String },
}

/// Summary of one orchestrated save.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub canonical: Language,
    pub translated: Vec<Language>,
    pub failed: Vec<Language>,
    pub reports: Vec<TranslationReport>,
}

/// Persists the canonical record, then translates and persists each derived
/// language independently. Derived-language failures (translation or
/// persistence) are reported through the callback and the returned report;
/// they do not abort the operation.
pub async fn save_with_auto_translation<F>(
    store: &ContentStore,
    translator: &dyn RecordTranslator,
    canonical: ContentRecord,
    mut on_progress: F,
) -> Result<SyncReport, StorageError>
where
    F: FnMut(SyncEvent),
{
    let canonical_language = Language::CANONICAL;
    store.save(canonical_language, &canonical).await?;
    info!(language = %canonical_language, "canonical record saved");
    on_progress(SyncEvent::CanonicalSaved {
        language: canonical_language,
    });

    let mut report = SyncReport {
        canonical: canonical_language,
        translated: Vec::new(),
        failed: Vec::new(),
        reports: Vec::new(),
    };

    for target in Language::derived() {
        on_progress(SyncEvent::TranslationStarted { language: target });

        let translated = match translator.translate_record(&canonical, target).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(language = %target, error = %e, "translation failed, keeping previous data");
                on_progress(SyncEvent::TranslationFailed {
                    language: target,
                    error: e.to_string(),
                });
                report.failed.push(target);
                continue;
            }
        };

        match store.save(target, &translated.record).await {
            Ok(()) => {
                info!(
                    language = %target,
                    translated = translated.report.translated_fields,
                    degraded = translated.report.degraded_fields,
                    "translated record saved"
                );
                on_progress(SyncEvent::TranslationCompleted { language: target });
                report.translated.push(target);
                report.reports.push(translated.report);
            }
            Err(e) => {
                warn!(language = %target, error = %e, "failed to persist translation, keeping previous data");
                on_progress(SyncEvent::TranslationFailed {
                    language: target,
                    error: e.to_string(),
                });
                report.failed.push(target);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::content::defaults::default_record;
    use crate::content::models::{ProjectCategory, ProjectRecord};
    use crate::llm_client::LlmError;
    use crate::translation::translator::{TranslatedRecord, TranslationError};

    async fn memory_store() -> ContentStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::run_migrations(&pool).await.unwrap();
        ContentStore::new(pool)
    }

    /// Marks translated free text with the target language; structural
    /// fields pass through untouched, like the real adapter.
    struct StubTranslator {
        fail_on: Option<Language>,
    }

    #[async_trait]
    impl RecordTranslator for StubTranslator {
        async fn translate_record(
            &self,
            source: &ContentRecord,
            target: Language,
        ) -> Result<TranslatedRecord, TranslationError> {
            if self.fail_on == Some(target) {
                return Err(TranslationError::Llm(LlmError::EmptyContent));
            }
            let mut record = source.clone();
            record.profile.summary = format!("[{target}] {}", source.profile.summary);
            for project in &mut record.projects {
                project.description = format!("[{target}] {}", project.description);
            }
            Ok(TranslatedRecord {
                record,
                report: TranslationReport::new(target),
            })
        }
    }

    fn acme_project() -> ProjectRecord {
        ProjectRecord {
            id: "1754300000000".to_string(),
            client: "Acme".to_string(),
            role: "컨설턴트".to_string(),
            period: "2025.01".to_string(),
            description: "신규 시장 진입 전략 수립".to_string(),
            tasks: vec!["시장 조사".to_string()],
            results: None,
            tags: vec![],
            category: ProjectCategory::Consulting,
        }
    }

    #[tokio::test]
    async fn test_all_languages_saved_on_success() {
        let store = memory_store().await;
        let translator = StubTranslator { fail_on: None };
        let mut events = Vec::new();

        let mut canonical = default_record(Language::Ko);
        canonical.projects.push(acme_project());

        let report = save_with_auto_translation(&store, &translator, canonical.clone(), |e| {
            events.push(e)
        })
        .await
        .unwrap();

        assert_eq!(report.translated, vec![Language::En, Language::Ja]);
        assert!(report.failed.is_empty());
        assert_eq!(store.load(Language::Ko).await.unwrap(), Some(canonical));
        assert!(store.load(Language::En).await.unwrap().is_some());
        assert!(store.load(Language::Ja).await.unwrap().is_some());

        assert!(matches!(events[0], SyncEvent::CanonicalSaved { .. }));
        assert_eq!(events.len(), 5); // canonical + (start, done) x 2
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_the_other_language() {
        let store = memory_store().await;
        let translator = StubTranslator {
            fail_on: Some(Language::En),
        };
        let mut events = Vec::new();

        let mut canonical = default_record(Language::Ko);
        canonical.projects.push(acme_project());

        let report = save_with_auto_translation(&store, &translator, canonical.clone(), |e| {
            events.push(e)
        })
        .await
        .unwrap();

        // Canonical save survives the English failure.
        assert_eq!(store.load(Language::Ko).await.unwrap(), Some(canonical));
        assert_eq!(report.failed, vec![Language::En]);
        assert_eq!(report.translated, vec![Language::Ja]);
        assert!(store.load(Language::En).await.unwrap().is_none());
        assert!(store.load(Language::Ja).await.unwrap().is_some());

        assert!(events.iter().any(|e| matches!(
            e,
            SyncEvent::TranslationFailed {
                language: Language::En,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_failed_translation_keeps_previous_derived_record() {
        let store = memory_store().await;

        // A previous successful sync left an English record behind.
        let mut stale_en = default_record(Language::En);
        stale_en.profile.summary = "previous translation".to_string();
        store.save(Language::En, &stale_en).await.unwrap();

        let translator = StubTranslator {
            fail_on: Some(Language::En),
        };
        save_with_auto_translation(
            &store,
            &translator,
            default_record(Language::Ko),
            |_| {},
        )
        .await
        .unwrap();

        // The stale English record is untouched, not deleted or overwritten.
        assert_eq!(store.load(Language::En).await.unwrap(), Some(stale_en));
    }

    #[tokio::test]
    async fn test_translated_records_preserve_ids_and_periods() {
        let store = memory_store().await;
        let translator = StubTranslator { fail_on: None };

        let mut canonical = default_record(Language::Ko);
        canonical.projects.push(acme_project());

        save_with_auto_translation(&store, &translator, canonical.clone(), |_| {})
            .await
            .unwrap();

        let ja = store.load(Language::Ja).await.unwrap().unwrap();
        let added = ja.projects.last().unwrap();
        assert_eq!(added.id, "1754300000000");
        assert_eq!(added.period, "2025.01");
        assert!(added.description.starts_with("[ja]"));
    }

    #[test]
    fn test_sync_event_serializes_with_tag() {
        let event = SyncEvent::TranslationFailed {
            language: Language::En,
            error: "timeout".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"translation_failed\""));
        assert!(json.contains("\"language\":\"en\""));
    }
}
