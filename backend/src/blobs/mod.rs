//! Blob storage for uploaded gallery images.
//!
//! Files land under `<root>/gallery/<timestamp>_<name>` and are served back by
//! `actix_files` under the configured public prefix.

use crate::error::GatewayError;
use chrono::Utc;
use common::requests::UploadResponse;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const GALLERY_DIR: &str = "gallery";
const FALLBACK_NAME: &str = "image";

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid file name pattern"));

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
    public_prefix: String,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes an uploaded gallery image after checking that the bytes are an image.
    pub fn write_gallery_image(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<UploadResponse, GatewayError> {
        if bytes.is_empty() {
            return Err(GatewayError::InvalidUpload("file is empty".into()));
        }
        let format = image::guess_format(bytes)
            .map_err(|_| GatewayError::InvalidUpload("file is not a recognised image".into()))?;

        let uploaded_at = Utc::now().timestamp_millis();
        let path = gallery_blob_path(uploaded_at, original_name);
        let target = self.root.join(&path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, bytes)?;
        log::info!("stored {:?} image at {}", format, target.display());

        Ok(UploadResponse {
            url: format!("{}/{}", self.public_prefix.trim_end_matches('/'), path),
            path,
            uploaded_at,
        })
    }
}

/// `gallery/<timestamp>_<sanitised name>`; the name keeps only `[A-Za-z0-9._-]`.
pub fn gallery_blob_path(uploaded_at: i64, original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned = UNSAFE_CHARS.replace_all(base, "_");
    let cleaned = cleaned.trim_matches('.');
    let name = if cleaned.is_empty() { FALLBACK_NAME } else { cleaned };
    format!("{GALLERY_DIR}/{uploaded_at}_{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn sanitises_names() {
        assert_eq!(gallery_blob_path(42, "mill house.jpg"), "gallery/42_mill_house.jpg");
        assert_eq!(gallery_blob_path(42, "../../etc/passwd"), "gallery/42_passwd");
        assert_eq!(gallery_blob_path(42, "C:\\photos\\crane.png"), "gallery/42_crane.png");
        assert_eq!(gallery_blob_path(42, ".."), "gallery/42_image");
        assert_eq!(gallery_blob_path(42, ""), "gallery/42_image");
    }

    #[test]
    fn writes_image_and_builds_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path(), "/storage/");

        let stored = blobs.write_gallery_image("boiler.png", PNG_HEADER).unwrap();

        assert_eq!(stored.path, format!("gallery/{}_boiler.png", stored.uploaded_at));
        assert_eq!(stored.url, format!("/storage/{}", stored.path));
        assert_eq!(std::fs::read(dir.path().join(&stored.path)).unwrap(), PNG_HEADER);
    }

    #[test]
    fn rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path(), "/storage");

        let err = blobs.write_gallery_image("notes.txt", b"plain text").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidUpload(_)));
        let err = blobs.write_gallery_image("empty.png", b"").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidUpload(_)));
        assert!(!dir.path().join("gallery").exists());
    }
}
