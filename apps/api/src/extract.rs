//! Document text extraction — thin wrapper over `pdf-extract`.

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF document.
/// A document that parses but yields no text is treated as a failure so the
/// session never holds an empty resume.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to process the PDF file: {e}")))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Extraction(
            "The PDF contains no extractable text".to_string(),
        ));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = extract_resume_text(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = extract_resume_text(&[]);
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
