//! # Collection Feed
//!
//! Backs `GET /api/feed/{collection}` as a Server-Sent-Events stream.
//!
//! ## Workflow
//!
//! 1.  **Subscribe**: a broadcast receiver is taken from the store's `FeedHub` before
//!     anything is read, so a write landing between the two still produces a frame.
//! 2.  **First frame**: the current snapshot, sent immediately.
//! 3.  **Updates**: every change notice for this collection triggers a fresh snapshot
//!     read. Notices for other collections are skipped. A receiver that lagged behind
//!     the channel sends the latest snapshot instead of replaying what it missed.
//! 4.  **End**: the stream finishes when the hub closes or the client disconnects.
//!
//! Frames are `data: <FeedEvent JSON>\n\n`. A failed read becomes a
//! `FeedEvent::Error` frame; the stream stays open.

use crate::error::GatewayError;
use crate::store::DocumentStore;
use actix_web::http::header;
use actix_web::web::Bytes;
use actix_web::{web, HttpResponse};
use common::model::collection::Collection;
use common::model::feed::FeedEvent;
use futures_util::{future, stream, StreamExt};
use std::convert::Infallible;
use tokio::sync::broadcast::error::RecvError;

/// Handles `GET /api/feed/{collection}`.
pub async fn process(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, GatewayError> {
    let collection: Collection = path.parse()?;

    // Subscribe before reading so a write racing the first snapshot still yields a frame.
    let receiver = store.subscribe();
    let first = snapshot_frame(&store, collection);
    log::info!("Feed subscriber attached to '{}'", collection);

    let store = store.into_inner();
    let updates = stream::unfold((receiver, store), move |(mut receiver, store)| async move {
        loop {
            match receiver.recv().await {
                Ok(notice) if notice.collection != collection => continue,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    log::debug!("Feed on '{}' skipped {} notices", collection, skipped);
                }
                Err(RecvError::Closed) => return None,
            }
            let frame = snapshot_frame(&store, collection);
            return Some((Ok::<_, Infallible>(frame), (receiver, store)));
        }
    });
    let body = stream::once(future::ready(Ok::<_, Infallible>(first))).chain(updates);

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(body))
}

fn snapshot_frame(store: &DocumentStore, collection: Collection) -> Bytes {
    let event = match store.snapshot(collection) {
        Ok(data) => FeedEvent::Snapshot { data },
        Err(e) => {
            log::error!("Feed failed to read '{}': {}", collection, e);
            FeedEvent::Error {
                message: format!("failed to read {collection}"),
            }
        }
    };
    sse_frame(&event)
}

fn sse_frame(event: &FeedEvent) -> Bytes {
    match serde_json::to_string(event) {
        Ok(json) => Bytes::from(format!("data: {json}\n\n")),
        Err(e) => {
            log::error!("Failed to encode feed event: {}", e);
            Bytes::from_static(b"data: {\"kind\":\"error\",\"message\":\"encoding failed\"}\n\n")
        }
    }
}
