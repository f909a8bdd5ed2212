//! PDF → plain text. The only module that touches document bytes.

use crate::extraction::ExtractionError;

/// Uploads above this size are rejected before any processing begins.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Extracts the text content of an uploaded PDF.
///
/// Oversized files and image-only scans are explicit errors; the caller
/// surfaces them to the admin verbatim.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ExtractionError::FileTooLarge { size: bytes.len() });
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyText);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_upload_is_rejected_before_parsing() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(
            extract_text(&bytes),
            Err(ExtractionError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_garbage_bytes_are_a_pdf_error() {
        assert!(matches!(
            extract_text(b"not a pdf at all"),
            Err(ExtractionError::Pdf(_))
        ));
    }
}
