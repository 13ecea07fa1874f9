//! SQLite-backed document store.
//!
//! Each record is a JSON object stored under `(collection, key)`. Writes publish a
//! change notice on the shared `FeedHub` once the statement has committed.

mod keys;

use crate::error::GatewayError;
use crate::feed::state::{ChangeNotice, FeedHub};
use common::model::collection::Collection;
use common::model::Snapshot;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;

pub use keys::next_key;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS records (
        collection TEXT NOT NULL,
        key        TEXT NOT NULL,
        body       TEXT NOT NULL,
        PRIMARY KEY (collection, key)
    );
";

#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
    feed: FeedHub,
}

impl DocumentStore {
    pub fn open(path: &Path, feed: FeedHub) -> Result<Self, GatewayError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::with_connection(Connection::open(path)?, feed)
    }

    pub fn open_in_memory(feed: FeedHub) -> Result<Self, GatewayError> {
        Self::with_connection(Connection::open_in_memory()?, feed)
    }

    fn with_connection(conn: Connection, feed: FeedHub) -> Result<Self, GatewayError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            feed,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, GatewayError> {
        self.conn.lock().map_err(|_| GatewayError::Unavailable)
    }

    /// Every record of `collection`, keyed by record key in key order.
    pub fn snapshot(&self, collection: Collection) -> Result<Snapshot, GatewayError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT key, body FROM records WHERE collection = ?1 ORDER BY key")?;
        let rows = stmt.query_map(params![collection.as_path()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut snapshot = Snapshot::new();
        for row in rows {
            let (key, body) = row?;
            snapshot.insert(key, serde_json::from_str(&body)?);
        }
        Ok(snapshot)
    }

    pub fn get(&self, collection: Collection, key: &str) -> Result<Option<Value>, GatewayError> {
        let conn = self.lock()?;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM records WHERE collection = ?1 AND key = ?2",
                params![collection.as_path(), key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body.map(|b| serde_json::from_str(&b)).transpose()?)
    }

    /// Stores `record` under a freshly generated time-ordered key and returns the key.
    pub fn push(&self, collection: Collection, record: &Value) -> Result<String, GatewayError> {
        let key = next_key();
        self.set(collection, &key, record)?;
        Ok(key)
    }

    /// Creates or fully replaces the record at `key`.
    pub fn set(&self, collection: Collection, key: &str, record: &Value) -> Result<(), GatewayError> {
        if !record.is_object() {
            return Err(GatewayError::InvalidRecord);
        }
        let body = serde_json::to_string(record)?;
        self.lock()?.execute(
            "INSERT OR REPLACE INTO records (collection, key, body) VALUES (?1, ?2, ?3)",
            params![collection.as_path(), key, body],
        )?;
        self.feed.publish(collection);
        Ok(())
    }

    /// Removes the whole collection and returns the number of records deleted.
    pub fn remove_subtree(&self, collection: Collection) -> Result<usize, GatewayError> {
        let removed = self.lock()?.execute(
            "DELETE FROM records WHERE collection = ?1",
            params![collection.as_path()],
        )?;
        self.feed.publish(collection);
        Ok(removed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeNotice> {
        self.feed.subscribe()
    }
}
