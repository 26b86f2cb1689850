//! OCR error types

use axum::http::StatusCode;

/// Errors surfaced by the recognition step.
///
/// All of these are terminal for the request; the handler performs a single
/// best-effort attempt with no retry.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR engine not found at '{0}'. Install Tesseract or set TESSERACT_PATH")]
    EngineNotFound(String),

    #[error("OCR engine failed: {0}")]
    EngineFailed(String),

    #[error("Cannot decode image: {0}")]
    ImageDecode(String),

    #[error("IO error during recognition: {0}")]
    Io(#[from] std::io::Error),
}

impl OcrError {
    pub fn status_code(&self) -> StatusCode {
        // The whole taxonomy is a server-side failure; the upload itself was
        // well-formed by the time recognition starts.
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_are_server_errors() {
        let errors = [
            OcrError::EngineNotFound("tesseract".into()),
            OcrError::EngineFailed("boom".into()),
            OcrError::ImageDecode("not an image".into()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn engine_not_found_names_the_binary() {
        let err = OcrError::EngineNotFound("/opt/tesseract/bin/tesseract".into());
        assert!(err.to_string().contains("/opt/tesseract/bin/tesseract"));
    }
}
