//! Application state management

use std::sync::Arc;

use crate::ocr::TextRecognizer;
use crate::upload::UploadStore;

/// Shared application state
///
/// The config itself is fully consumed at startup (engine construction,
/// upload store, bind address), so only the live collaborators are kept.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    uploads: UploadStore,
    recognizer: Arc<dyn TextRecognizer>,
}

impl AppState {
    pub fn new(uploads: UploadStore, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                uploads,
                recognizer,
            }),
        }
    }

    pub fn uploads(&self) -> &UploadStore {
        &self.inner.uploads
    }

    pub fn recognizer(&self) -> &Arc<dyn TextRecognizer> {
        &self.inner.recognizer
    }
}
