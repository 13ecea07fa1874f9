use crate::model::Snapshot;
use serde::{Deserialize, Serialize};

/// Payload of one server-sent event on `/api/feed/{collection}`.
///
/// Subscribers receive the whole collection every time; there are no deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedEvent {
    Snapshot { data: Snapshot },
    Error { message: String },
}
