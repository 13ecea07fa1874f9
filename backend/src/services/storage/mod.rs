//! # Blob Storage Service Module
//!
//! Accepts gallery image uploads under `/api/storage`. Stored blobs are served
//! as static files from the configured public prefix (see `main.rs`).

mod upload;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/storage";

/// *   **`POST /gallery`**: `upload::process`, multipart with a single `file`
///     part; answers `{ path, url, uploadedAt }`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/gallery", post().to(upload::process))
}
