use super::{feed_url, fetch_snapshot, GatewayError};
use crate::helpers::show_toast;
use common::model::collection::Collection;
use common::model::feed::FeedEvent;
use gloo_console::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventSource, MessageEvent};
use yew::platform::spawn_local;
use yew::Callback;

/// A live subscription to one collection.
///
/// Delivers the current snapshot first, then a fresh snapshot after every change.
/// The stream is closed when the value is dropped, so a view owns it for exactly
/// as long as it is mounted.
pub struct FeedSubscription {
    source: EventSource,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
}

impl FeedSubscription {
    pub fn open(collection: Collection, on_event: Callback<FeedEvent>) -> Result<Self, GatewayError> {
        let source = EventSource::new(&feed_url(collection))
            .map_err(|e| GatewayError::Browser(format!("{e:?}")))?;

        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            match serde_json::from_str::<FeedEvent>(&text) {
                Ok(feed_event) => on_event.emit(feed_event),
                Err(e) => error!(format!("Undecodable feed event: {}", e)),
            }
        });
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // EventSource reconnects on its own; the error is only reported.
        let on_error = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            error!(format!("Feed for '{}' interrupted, reconnecting", collection));
        });
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self {
            source,
            _on_message: on_message,
            _on_error: on_error,
        })
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}

/// Opens a live subscription, or falls back to a single snapshot read when the
/// browser cannot create an `EventSource`.
pub fn subscribe_or_fetch(collection: Collection, on_event: Callback<FeedEvent>) -> Option<FeedSubscription> {
    match FeedSubscription::open(collection, on_event.clone()) {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            error!(format!("Live feed for '{}' unavailable: {}", collection, e));
            show_toast("Live updates are unavailable. Reload the page to see changes.");
            spawn_local(async move {
                let event = match fetch_snapshot(collection).await {
                    Ok(data) => FeedEvent::Snapshot { data },
                    Err(e) => FeedEvent::Error { message: e.to_string() },
                };
                on_event.emit(event);
            });
            None
        }
    }
}
