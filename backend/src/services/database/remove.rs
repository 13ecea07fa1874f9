//! # Subtree Removal
//!
//! Backs `DELETE /api/db/{collection}`, used by the clear-gallery form.
//!
//! Every record of the collection is deleted in one statement and subscribers receive
//! an empty snapshot. Files in blob storage are not touched. The response reports how
//! many records went away as `{ "removed": n }`.

use crate::error::GatewayError;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse};
use common::model::collection::Collection;
use common::requests::RemoveResponse;

/// Handles `DELETE /api/db/{collection}`.
pub async fn process(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, GatewayError> {
    let collection: Collection = path.parse()?;
    let removed = store
        .remove_subtree(collection)
        .inspect_err(|e| log::error!("Failed to clear '{}': {}", collection, e))?;
    log::warn!("Cleared '{}' ({} records)", collection, removed);
    Ok(HttpResponse::Ok().json(RemoveResponse { removed }))
}
