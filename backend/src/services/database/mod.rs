//! # Document Store Service Module
//!
//! Exposes the hosted document store under `/api/db`. A path segment names the
//! collection (`products` or `gallery`); anything else answers 404.
//!
//! ## Sub-modules:
//! - `snapshot`: reads a whole collection.
//! - `record`: reads or overwrites a single record.
//! - `push`: appends a record under a generated, time-ordered key.
//! - `remove`: deletes a whole collection.

mod push;
mod record;
mod remove;
mod snapshot;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all document store endpoints.
const API_PATH: &str = "/api/db";

/// Configures and returns the Actix `Scope` for the document store routes.
///
/// # Registered Routes:
///
/// *   **`GET /{collection}`**: `snapshot::process`, the key → record object (`{}` when empty).
/// *   **`POST /{collection}`**: `push::process`, answers `{ "key": … }`.
/// *   **`DELETE /{collection}`**: `remove::process`, answers `{ "removed": n }`.
/// *   **`GET /{collection}/{key}`**: `record::get`, 404 when the record is absent.
/// *   **`PUT /{collection}/{key}`**: `record::overwrite`, full replacement.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{collection}", get().to(snapshot::process))
        .route("/{collection}", post().to(push::process))
        .route("/{collection}", delete().to(remove::process))
        .route("/{collection}/{key}", get().to(record::get))
        .route("/{collection}/{key}", put().to(record::overwrite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::state::FeedHub;
    use crate::store::DocumentStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::collection::Collection;
    use common::requests::{PushResponse, RemoveResponse};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn store() -> DocumentStore {
        DocumentStore::open_in_memory(FeedHub::default()).unwrap()
    }

    #[actix_web::test]
    async fn push_then_read_back() {
        let store = store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/db/gallery")
            .set_json(json!({"title": "Crystallizer", "uploadedAt": 5}))
            .to_request();
        let pushed: PushResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/api/db/gallery").to_request();
        let snapshot: Value = test::call_and_read_body_json(&app, req).await;
        let mut expected = serde_json::Map::new();
        expected.insert(pushed.key.clone(), json!({"title": "Crystallizer", "uploadedAt": 5}));
        assert_eq!(snapshot, Value::Object(expected));

        let req = test::TestRequest::get()
            .uri(&format!("/api/db/gallery/{}", pushed.key))
            .to_request();
        let record: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record["title"], "Crystallizer");
    }

    #[actix_web::test]
    async fn empty_collection_is_empty_object() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/db/products").to_request();
        let snapshot: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot, json!({}));
    }

    #[actix_web::test]
    async fn unknown_collection_and_missing_record_are_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/db/users").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/db/products/nope").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn put_overwrites_and_rejects_non_objects() {
        let store = store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/db/products/evaporator")
            .set_json(json!({"name": "Evaporator", "category": "Boiling"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        assert_eq!(
            store.get(Collection::Products, "evaporator").unwrap(),
            Some(json!({"name": "Evaporator", "category": "Boiling"}))
        );

        let req = test::TestRequest::put()
            .uri("/api/db/products/evaporator")
            .set_json(json!([1, 2, 3]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_removes_whole_collection() {
        let store = store();
        store.push(Collection::Gallery, &json!({"title": "a"})).unwrap();
        store.push(Collection::Gallery, &json!({"title": "b"})).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/db/gallery").to_request();
        let removed: RemoveResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(removed, RemoveResponse { removed: 2 });
        assert!(store.snapshot(Collection::Gallery).unwrap().is_empty());
    }
}
