use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

/// Writes uploaded album covers to a local folder.
#[derive(Clone)]
pub struct StorageService {
    folder: PathBuf,
    public_base: String,
}

impl StorageService {
    pub fn new(folder: PathBuf, public_base: String) -> Self {
        Self {
            folder,
            public_base,
        }
    }

    /// Stores `bytes` as `{millis}{file name}` and returns the stored name.
    pub async fn write_file(&self, file_name: &str, bytes: &[u8]) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.folder).await?;
        let base_name = Path::new(file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("cover");
        let stored_name = format!("{}{}", Utc::now().timestamp_millis(), base_name);
        tokio::fs::write(self.folder.join(&stored_name), bytes).await?;
        info!("Stored cover {}", stored_name);
        Ok(stored_name)
    }

    pub fn public_url(&self, stored_name: &str) -> String {
        format!("{}/albums/covers/{}", self.public_base, stored_name)
    }

    /// Maps a stored name back to its path. Names that could escape the
    /// covers folder resolve to nothing.
    pub fn resolve(&self, stored_name: &str) -> Option<PathBuf> {
        let path = Path::new(stored_name);
        if stored_name.is_empty() || path.file_name()? != path.as_os_str() {
            return None;
        }
        Some(self.folder.join(path))
    }
}

/// Content type for a served cover, from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_none, assert_ok, assert_some};

    use super::*;

    #[tokio::test]
    async fn stored_names_are_timestamp_prefixed() {
        let folder = tempfile::tempdir().unwrap();
        let storage = StorageService::new(
            folder.path().to_path_buf(),
            "http://localhost:5000".to_string(),
        );
        let stored = assert_ok!(storage.write_file("../../etc/cover.png", b"png").await);
        assert!(stored.ends_with("cover.png"));
        assert!(stored.trim_end_matches("cover.png").parse::<i64>().is_ok());
        let path = assert_some!(storage.resolve(&stored));
        assert_eq!(std::fs::read(path).unwrap(), b"png");
        assert_eq!(
            storage.public_url(&stored),
            format!("http://localhost:5000/albums/covers/{}", stored)
        );
    }

    #[test]
    fn traversal_is_not_resolved() {
        let storage = StorageService::new(PathBuf::from("covers"), String::new());
        assert_none!(storage.resolve("../secret"));
        assert_none!(storage.resolve("a/b.png"));
        assert_none!(storage.resolve(""));
        assert_eq!(content_type_for(Path::new("x.JPG")), "image/jpeg");
    }
}
