pub mod collection;
pub mod contact;
pub mod feed;
pub mod gallery;
pub mod product;

/// Full contents of one collection: store key -> raw record.
///
/// `serde_json::Map` keeps keys sorted, which matches the natural key order of the
/// store (push keys are time-ordered, so this is also insertion order).
pub type Snapshot = serde_json::Map<String, serde_json::Value>;
