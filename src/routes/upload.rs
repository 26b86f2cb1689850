//! Upload-and-recognize endpoint
//!
//! `POST /upload` takes a multipart form with a single `file` field, saves it
//! to scoped temporary storage, runs it through the configured recognizer,
//! and returns the extracted text. One request, one attempt: no retry, no
//! timeout, no partial results.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::ocr::OcrError;
use crate::state::AppState;

/// Uploads larger than this are rejected before reaching the handler.
const MAX_UPLOAD_SIZE: usize = 20 * 1024 * 1024;

#[derive(Serialize)]
pub struct RecognizeResponse {
    pub success: bool,
    pub text: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
}

/// POST /upload
async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecognizeResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await?;
            file = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) = file.ok_or(AppError::MissingFilePart)?;
    if filename.is_empty() {
        return Err(AppError::EmptyFilename);
    }

    // Reject non-images before spending an engine invocation on them, and so
    // the decode error reaches the client rather than Tesseract's wording.
    image::load_from_memory(&data).map_err(|e| OcrError::ImageDecode(e.to_string()))?;

    // Guard deletes the file when it goes out of scope, on every exit path.
    let saved = state.uploads().save(&filename, &data)?;
    let text = state.recognizer().recognize(saved.path()).await?;

    tracing::info!(
        filename = %filename,
        bytes = data.len(),
        chars = text.chars().count(),
        "Recognition complete"
    );

    Ok(Json(RecognizeResponse {
        success: true,
        text,
    }))
}
