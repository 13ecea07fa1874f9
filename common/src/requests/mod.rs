use serde::{Deserialize, Serialize};

/// Response of `POST /api/db/{collection}`: the key generated for the new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResponse {
    pub key: String,
}

/// Response of `DELETE /api/db/{collection}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub removed: usize,
}

/// Response of `POST /api/storage/gallery`.
///
/// `uploaded_at` is the timestamp embedded in `path`; the upload form stores it as
/// the record's `uploadedAt` so the blob and the record agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub path: String,
    pub url: String,
    pub uploaded_at: i64,
}
