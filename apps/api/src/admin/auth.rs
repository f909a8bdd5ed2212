//! Shared admin password, stored as a SHA-256 hex hash. Raw passwords are
//! never persisted.
//!
//! First-use bootstrap: while no hash is stored, the built-in default
//! credential succeeds once and persists its own hash, after which only the
//! stored hash governs.

use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PASSWORD: &str = "admin";
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum AdminAuthError {
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Checks a login attempt against the stored hash, seeding the default
/// credential's hash on first use.
pub async fn verify_password(pool: &SqlitePool, password: &str) -> Result<bool, sqlx::Error> {
    let stored: Option<String> =
        sqlx::query_scalar("SELECT password_hash FROM admin_credentials WHERE id = 1")
            .fetch_optional(pool)
            .await?;

    match stored {
        Some(hash) => Ok(hash == hash_password(password)),
        None => {
            if password == DEFAULT_PASSWORD {
                store_hash(pool, &hash_password(DEFAULT_PASSWORD)).await?;
                info!("seeded default admin credential hash");
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }
}

/// Replaces the admin password. The caller must have verified the current
/// password first.
pub async fn set_password(pool: &SqlitePool, password: &str) -> Result<(), AdminAuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AdminAuthError::TooShort);
    }
    store_hash(pool, &hash_password(password)).await?;
    Ok(())
}

async fn store_hash(pool: &SqlitePool, hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO admin_credentials (id, password_hash, updated_at)
        VALUES (1, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            password_hash = excluded.password_hash,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(hash)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;
    Ok(())
}
