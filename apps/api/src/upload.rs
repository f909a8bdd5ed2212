//! Multipart upload helper shared by the import and extraction routes.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// Reads the bytes of the `file` field from a multipart payload.
pub async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            return field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read uploaded file: {e}")));
        }
    }
    Err(AppError::Validation(
        "multipart payload is missing a 'file' field".to_string(),
    ))
}
