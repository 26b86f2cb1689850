//! Configuration management for Ezhuthu Server
//!
//! Everything the OCR handler needs (engine binary, tessdata directory,
//! language, page-segmentation mode) is resolved here once at startup and
//! injected, rather than discovered lazily inside the request path.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Tesseract binary. Either an absolute path or a bare name resolved
    /// through `PATH`.
    pub engine_path: PathBuf,
    /// Directory holding the trained data (`tam.traineddata`).
    pub tessdata_dir: PathBuf,
    /// Tesseract language code.
    pub language: String,
    /// Page-segmentation mode passed as `--psm`.
    pub page_seg_mode: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Directory uploads are written to for the duration of a request.
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            ocr: OcrConfig {
                engine_path: PathBuf::from("tesseract"),
                tessdata_dir: PathBuf::from("."),
                language: "tam".to_string(),
                page_seg_mode: 6,
            },
            upload: UploadConfig {
                dir: PathBuf::from("uploads"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Every variable is
    /// optional; malformed numeric values are logged and fall back to the
    /// default rather than failing startup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT", lookup("SERVER_PORT"), defaults.server.port),
            },
            ocr: OcrConfig {
                engine_path: lookup("TESSERACT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.ocr.engine_path),
                tessdata_dir: lookup("TESSDATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.ocr.tessdata_dir),
                language: lookup("OCR_LANGUAGE").unwrap_or(defaults.ocr.language),
                page_seg_mode: parse_var("OCR_PSM", lookup("OCR_PSM"), defaults.ocr.page_seg_mode),
            },
            upload: UploadConfig {
                dir: lookup("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.upload.dir),
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}='{}', using default", key, value);
                default
            }
        },
    }
}
