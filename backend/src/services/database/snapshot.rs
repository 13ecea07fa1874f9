//! # One-shot Snapshot
//!
//! Backs `GET /api/db/{collection}`: the full key -> record object of a collection,
//! `{}` when it is empty. Keys come back in store order, which is push order.

use crate::error::GatewayError;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse};
use common::model::collection::Collection;

/// Handles `GET /api/db/{collection}`.
pub async fn process(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, GatewayError> {
    let collection: Collection = path.parse()?;
    let snapshot = store
        .snapshot(collection)
        .inspect_err(|e| log::error!("Failed to read '{}': {}", collection, e))?;
    Ok(HttpResponse::Ok().json(snapshot))
}
