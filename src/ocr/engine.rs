//! Tesseract engine invocation
//!
//! Runs the configured binary as a subprocess:
//!
//! ```text
//! tesseract <input> stdout -l tam --tessdata-dir <dir> --psm 6
//! ```
//!
//! Writing to `stdout` avoids a second temp file for the result. The text is
//! returned exactly as the engine produced it, trailing newlines included.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use super::types::OcrError;
use crate::config::OcrConfig;

/// Text recognition backend.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extract text from an image file on disk.
    async fn recognize(&self, image_path: &Path) -> Result<String, OcrError>;

    /// Whether the backend can actually run on this host.
    async fn is_available(&self) -> bool;
}

/// Tesseract CLI backend configured for a single language.
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    fn command(&self, image_path: &Path) -> Command {
        let mut cmd = Command::new(&self.config.engine_path);
        cmd.arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .arg("--tessdata-dir")
            .arg(&self.config.tessdata_dir)
            .arg("--psm")
            .arg(self.config.page_seg_mode.to_string());
        cmd
    }
}

#[async_trait]
impl TextRecognizer for TesseractEngine {
    async fn recognize(&self, image_path: &Path) -> Result<String, OcrError> {
        let output = self.command(image_path).output().await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                OcrError::EngineNotFound(self.config.engine_path.display().to_string())
            } else {
                OcrError::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(stderr.trim().to_string()));
        }

        // Verbatim engine output; callers decide whether to trim.
        String::from_utf8(output.stdout)
            .map_err(|e| OcrError::EngineFailed(format!("engine produced invalid UTF-8: {}", e)))
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.config.engine_path)
            .arg("--version")
            .output()
            .await
            .is_ok()
    }
}

/// Stub recognizer for handler tests.
#[cfg(test)]
pub struct MockRecognizer {
    pub response: Result<String, &'static str>,
}

#[cfg(test)]
impl MockRecognizer {
    pub fn text(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            response: Err(message),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl TextRecognizer for MockRecognizer {
    async fn recognize(&self, _image_path: &Path) -> Result<String, OcrError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(OcrError::EngineFailed(message.to_string())),
        }
    }

    async fn is_available(&self) -> bool {
        true
    }
}
