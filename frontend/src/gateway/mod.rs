//! Client side of the document and blob store.
//!
//! Thin async wrappers over the backend's `/api/db`, `/api/storage` and
//! `/api/feed` endpoints. Every failure collapses into `GatewayError`; callers
//! log it with `gloo-console` and show one generic message.

pub mod feed;

use common::model::collection::Collection;
use common::model::Snapshot;
use common::requests::{PushResponse, RemoveResponse, UploadResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const DB_PATH: &str = "/api/db";
const STORAGE_PATH: &str = "/api/storage";
const FEED_PATH: &str = "/api/feed";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

pub fn collection_url(collection: Collection) -> String {
    format!("{DB_PATH}/{collection}")
}

pub fn feed_url(collection: Collection) -> String {
    format!("{FEED_PATH}/{collection}")
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Status { status, body });
    }
    Ok(response.json::<T>().await?)
}

/// One-shot read of a whole collection.
pub async fn fetch_snapshot(collection: Collection) -> Result<Snapshot, GatewayError> {
    let response = Request::get(&collection_url(collection)).send().await?;
    read_json(response).await
}

/// Appends `record` under a store-generated key and returns the key.
pub async fn push<T: Serialize>(collection: Collection, record: &T) -> Result<String, GatewayError> {
    let response = Request::post(&collection_url(collection))
        .json(record)?
        .send()
        .await?;
    let pushed: PushResponse = read_json(response).await?;
    Ok(pushed.key)
}

/// Deletes every record of `collection`.
pub async fn remove(collection: Collection) -> Result<usize, GatewayError> {
    let response = Request::delete(&collection_url(collection)).send().await?;
    let removed: RemoveResponse = read_json(response).await?;
    Ok(removed.removed)
}

/// Sends `file` as the `file` part of a multipart body to the gallery blob area.
pub async fn upload_gallery_image(file: &web_sys::File) -> Result<UploadResponse, GatewayError> {
    let form = web_sys::FormData::new().map_err(|e| GatewayError::Browser(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| GatewayError::Browser(format!("{e:?}")))?;

    let response = Request::post(&format!("{STORAGE_PATH}/gallery"))
        .body(form)?
        .send()
        .await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_urls() {
        assert_eq!(collection_url(Collection::Gallery), "/api/db/gallery");
        assert_eq!(feed_url(Collection::Products), "/api/feed/products");
    }
}
