//! Scoped temporary storage for uploads
//!
//! Each upload lives in the store only for the duration of its request. The
//! [`TempUpload`] guard deletes the file when dropped, so cleanup happens on
//! success and on every error path alike. Names are prefixed with a UUID so
//! concurrent uploads of the same filename cannot overwrite one another.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Upload directory handle.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Write `bytes` under a unique name derived from `filename`.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<TempUpload> {
        let name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(filename));
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        Ok(TempUpload { path })
    }
}

/// A saved upload that removes itself when dropped.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("Failed to remove upload {}: {}", self.path.display(), e);
        }
    }
}

/// Strip path components and anything outside `[A-Za-z0-9._-]`.
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_writes_and_drop_removes() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let upload = store.save("page.png", b"fake image bytes").unwrap();
        let path = upload.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"fake image bytes");

        drop(upload);
        assert!(!path.exists());
    }

    #[test]
    fn identical_filenames_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();

        let first = store.save("scan.png", b"one").unwrap();
        let second = store.save("scan.png", b"two").unwrap();

        assert_ne!(first.path(), second.path());
        assert_eq!(fs::read(first.path()).unwrap(), b"one");
        assert_eq!(fs::read(second.path()).unwrap(), b"two");
    }

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\scan.png"), "scan.png");
        assert_eq!(sanitize_filename("ப௫.png"), "__.png");
        assert_eq!(sanitize_filename("///"), "upload");
    }

    #[test]
    fn store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("uploads").join("deep");
        let store = UploadStore::new(&nested).unwrap();
        assert!(nested.exists());

        let upload = store.save("a.png", b"x").unwrap();
        assert!(upload.path().starts_with(&nested));
    }
}
