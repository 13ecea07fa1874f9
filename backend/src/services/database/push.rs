//! # Record Push
//!
//! Backs `POST /api/db/{collection}`, the write-new-record operation.
//!
//! ## Workflow
//!
//! 1.  **Path**: the collection segment is parsed into `Collection`; anything outside the
//!     closed set answers `404`.
//! 2.  **Key**: `DocumentStore::push` generates a time-ordered key, so a later push always
//!     sorts after an earlier one in the next snapshot.
//! 3.  **Write**: the JSON body is stored as-is under that key and a change notice goes out
//!     on the feed.
//! 4.  **Response**: `{ "key": ... }` with `200 OK`. Store failures are logged here and
//!     surface as `503 Service Unavailable`.

use crate::error::GatewayError;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse};
use common::model::collection::Collection;
use common::requests::PushResponse;
use serde_json::Value;

/// Handles `POST /api/db/{collection}`: stores the body under a new key.
pub async fn process(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
    record: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let collection: Collection = path.parse()?;
    let key = store
        .push(collection, &record)
        .inspect_err(|e| log::error!("Failed to push into '{}': {}", collection, e))?;
    log::info!("Pushed {}/{}", collection, key);
    Ok(HttpResponse::Ok().json(PushResponse { key }))
}
