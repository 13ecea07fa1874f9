//! # Single Record Access
//!
//! Backs `GET` and `PUT /api/db/{collection}/{key}`.
//!
//! ## Workflow
//!
//! - **Read** (`get`): looks the key up and returns the stored JSON, or `404` when the
//!   collection has no such key.
//! - **Overwrite** (`overwrite`): replaces the whole record. Only JSON objects are
//!   accepted; arrays and scalars answer `400`. A successful write publishes a change
//!   notice and echoes the stored body.

use crate::error::GatewayError;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse};
use common::model::collection::Collection;
use serde_json::Value;

/// Handles `GET /api/db/{collection}/{key}`.
pub async fn get(
    path: web::Path<(String, String)>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, GatewayError> {
    let (collection, key) = path.into_inner();
    let collection: Collection = collection.parse()?;
    match store.get(collection, &key)? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(GatewayError::NotFound),
    }
}

/// Handles `PUT /api/db/{collection}/{key}`: replaces the record with the body.
pub async fn overwrite(
    path: web::Path<(String, String)>,
    store: web::Data<DocumentStore>,
    record: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let (collection, key) = path.into_inner();
    let collection: Collection = collection.parse()?;
    store
        .set(collection, &key, &record)
        .inspect_err(|e| log::warn!("Rejected write to {}/{}: {}", collection, key, e))?;
    Ok(HttpResponse::Ok().json(record.into_inner()))
}
