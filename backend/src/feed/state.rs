//! Change notification for live collection feeds.
//!
//! Every write to the document store publishes a `ChangeNotice` on a broadcast
//! channel. Each open `/api/feed/{collection}` stream owns a receiver and re-reads
//! the collection snapshot when a notice for its collection arrives.

use common::model::collection::Collection;
use tokio::sync::broadcast;

/// Notices buffered per subscriber before it starts lagging.
pub const FEED_CAPACITY: usize = 64;

/// Tells subscribers that `collection` has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotice {
    pub collection: Collection,
}

/// Clonable handle to the broadcast channel shared by the store and the feed handlers.
#[derive(Clone)]
pub struct FeedHub {
    tx: broadcast::Sender<ChangeNotice>,
}

impl FeedHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes a notice. Having no subscribers is not an error.
    pub fn publish(&self, collection: Collection) {
        let delivered = self.tx.send(ChangeNotice { collection }).unwrap_or(0);
        log::debug!("change on '{}' delivered to {} subscriber(s)", collection, delivered);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeNotice> {
        self.tx.subscribe()
    }
}

impl Default for FeedHub {
    fn default() -> Self {
        Self::new(FEED_CAPACITY)
    }
}
