//! OCR Module
//!
//! Wraps the external Tesseract engine behind a small trait so the HTTP
//! handler can be exercised without a Tesseract installation. The engine is
//! invoked as a subprocess with an explicit tessdata directory, which allows
//! running against a local `tam.traineddata` without a system-wide install.

mod engine;
mod types;

pub use engine::{TesseractEngine, TextRecognizer};
pub use types::OcrError;

#[cfg(test)]
pub use engine::MockRecognizer;
