//! Error types for the Ezhuthu server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::ocr::OcrError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Failed to read upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFilePart | AppError::EmptyFilename | AppError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Ocr(e) => e.status_code(),
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body: `{"error": "<message>"}`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        assert_eq!(
            AppError::MissingFilePart.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EmptyFilename.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn engine_errors_are_server_errors() {
        let err = AppError::Ocr(OcrError::EngineFailed("bad image".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_the_upload_contract() {
        assert_eq!(AppError::MissingFilePart.to_string(), "No file part");
        assert_eq!(AppError::EmptyFilename.to_string(), "No selected file");
    }
}
