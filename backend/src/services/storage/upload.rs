//! # Gallery Image Upload
//!
//! Backs `POST /api/storage/gallery`.
//!
//! ## Workflow
//!
//! 1.  **Multipart**: fields other than `file` are drained and ignored. A body without a
//!     `file` part answers `400`.
//! 2.  **Size**: chunks are counted while they stream in; passing 5 MiB stops the read
//!     with `413`.
//! 3.  **Store**: `BlobStore::write_gallery_image` checks the leading bytes are an image,
//!     writes `gallery/<timestamp>_<name>` and returns `{ path, url, uploadedAt }`.
//!
//! The gallery record itself is written afterwards by the client through
//! `POST /api/db/gallery`.

use crate::blobs::BlobStore;
use crate::error::GatewayError;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::forms::MAX_UPLOAD_BYTES;
use common::requests::UploadResponse;
use futures_util::StreamExt;

const FILE_FIELD: &str = "file";

/// Handles `POST /api/storage/gallery`.
///
/// - On success: `200 OK` with the stored blob's path, public URL and timestamp.
/// - Oversized bodies answer `413`; non-images and malformed bodies `400`.
pub async fn process(payload: Multipart, blobs: web::Data<BlobStore>) -> impl Responder {
    match receive_upload(payload, &blobs).await {
        Ok(stored) => {
            log::info!("Uploaded {}", stored.path);
            HttpResponse::Ok().json(stored)
        }
        Err(e) => {
            log::warn!("Upload rejected: {}", e);
            e.error_response()
        }
    }
}

/// Reads the `file` part of the multipart body, enforcing the size cap while streaming.
async fn receive_upload(
    mut payload: Multipart,
    blobs: &BlobStore,
) -> Result<UploadResponse, GatewayError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| GatewayError::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some(FILE_FIELD) {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| GatewayError::Multipart(e.to_string()))?;
            }
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| GatewayError::Multipart(e.to_string()))?;
            if (bytes.len() + chunk.len()) as u64 > MAX_UPLOAD_BYTES {
                return Err(GatewayError::PayloadTooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }
        return blobs.write_gallery_image(&filename, &bytes);
    }
    Err(GatewayError::InvalidUpload(format!("missing '{FILE_FIELD}' part")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    const BOUNDARY: &str = "csr-test-boundary";
    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/storage/gallery")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn stores_image_and_returns_location() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(BlobStore::new(dir.path(), "/storage")))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = upload_request(multipart_body("file", "cane carrier.png", PNG_HEADER)).to_request();
        let stored: UploadResponse = test::call_and_read_body_json(&app, req).await;

        assert!(stored.path.starts_with("gallery/"));
        assert!(stored.path.ends_with("_cane_carrier.png"));
        assert_eq!(stored.url, format!("/storage/{}", stored.path));
        assert!(dir.path().join(&stored.path).is_file());
    }

    #[actix_web::test]
    async fn rejects_oversized_upload() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(BlobStore::new(dir.path(), "/storage")))
                .service(super::super::configure_routes()),
        )
        .await;

        let mut content = PNG_HEADER.to_vec();
        content.resize(MAX_UPLOAD_BYTES as usize + 1, 0);
        let req = upload_request(multipart_body("file", "huge.png", &content)).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!dir.path().join("gallery").exists());
    }

    #[actix_web::test]
    async fn rejects_non_image_and_missing_part() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(BlobStore::new(dir.path(), "/storage")))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = upload_request(multipart_body("file", "notes.txt", b"hello")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = upload_request(multipart_body("attachment", "boiler.png", PNG_HEADER)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}
