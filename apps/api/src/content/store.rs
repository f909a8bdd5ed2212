use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{error, warn};

use crate::content::defaults::default_record;
use crate::content::models::{ContentRecord, Language, SCHEMA_VERSION};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raised when an imported document is not a well-formed content record.
/// The store is left unmodified in every failure case.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("uploaded document is not UTF-8 text")]
    NotText,

    #[error("uploaded document is not a valid content record: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (expected {SCHEMA_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("failed to persist imported record: {0}")]
    Storage(#[from] StorageError),
}

/// Keyed persistence of one `ContentRecord` per language, plus whole-record
/// import/export. One row per language; a missing row means "use the
/// built-in default".
#[derive(Clone)]
pub struct ContentStore {
    pool: SqlitePool,
}

impl ContentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the persisted record for `language`, or `None` when nothing
    /// has been saved. A stored row that no longer parses, or that carries a
    /// foreign schema version, is treated as absent so callers fall back to
    /// the built-in default instead of failing.
    pub async fn load(&self, language: Language) -> Result<Option<ContentRecord>, StorageError> {
        let raw: Option<String> =
            sqlx::query_scalar("SELECT data FROM content_records WHERE language = ?")
                .bind(language.as_str())
                .fetch_optional(&self.pool)
                .await?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<ContentRecord>(&raw) {
            Ok(record) if record.schema_version == SCHEMA_VERSION => Ok(Some(record)),
            Ok(record) => {
                warn!(
                    language = %language,
                    found = record.schema_version,
                    "stored record has unsupported schema version, serving defaults"
                );
                Ok(None)
            }
            Err(e) => {
                warn!(
                    language = %language,
                    error = %e,
                    "stored record is corrupt, serving defaults"
                );
                Ok(None)
            }
        }
    }

    /// The persisted record, or the built-in default when absent.
    /// Storage failures degrade to the default as well (logged).
    pub async fn load_or_default(&self, language: Language) -> ContentRecord {
        match self.load(language).await {
            Ok(Some(record)) => record,
            Ok(None) => default_record(language),
            Err(e) => {
                error!(language = %language, error = %e, "failed to load record, serving defaults");
                default_record(language)
            }
        }
    }

    /// Serializes and persists the full record, replacing any prior value
    /// for that language. There is no partial-field update.
    pub async fn save(&self, language: Language, record: &ContentRecord) -> Result<(), StorageError> {
        let data = serde_json::to_string(record)?;
        sqlx::query(
            r#"
            INSERT INTO content_records (language, data, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(language) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(language.as_str())
        .bind(&data)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Deletes the persisted record, reverting subsequent loads to the
    /// built-in default.
    pub async fn reset(&self, language: Language) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM content_records WHERE language = ?")
            .bind(language.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Pretty-printed JSON of the persisted-or-default record, suitable for
    /// a file download.
    pub async fn export_json(&self, language: Language) -> Result<String, StorageError> {
        let record = self.load_or_default(language).await;
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// Parses an uploaded document as a full record and persists it.
    /// Any failure leaves the previously stored record untouched.
    pub async fn import_json(
        &self,
        language: Language,
        bytes: &[u8],
    ) -> Result<ContentRecord, ParseError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ParseError::NotText)?;
        let record: ContentRecord = serde_json::from_str(text)?;
        if record.schema_version != SCHEMA_VERSION {
            return Err(ParseError::UnsupportedVersion {
                found: record.schema_version,
            });
        }
        self.save(language, &record).await?;
        Ok(record)
    }
}
