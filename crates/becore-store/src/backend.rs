//! Pluggable key-value persistence.
//!
//! The site only ever needs "string in, string out" under a handful of keys,
//! so both stores talk to storage through [`KeyValueStore`]. [`SqliteStore`]
//! is the durable backend; [`MemoryStore`](crate::memory::MemoryStore) is
//! the in-process one used for tests and throwaway sessions.

use std::path::Path;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::{Result, StoreError};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and parse the JSON document under `key`.
///
/// Read failures and malformed documents are logged and reported as `None`;
/// callers fall back to their default.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no persisted document");
            return None;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted document");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "persisted document is malformed, ignoring it");
            None
        }
    }
}

/// Serialize `value` and store it under `key`.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json).map_err(|e| {
        tracing::warn!(key, bytes = json.len(), error = %e, "failed to persist document");
        e
    })
}

/// [`KeyValueStore`] over the SQLite `kv` table.
pub struct SqliteStore {
    db: Mutex<Database>,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    /// Open the database at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(Database::open_at(path)?))
    }

    /// Open the database in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Database::new()?))
    }

    fn with_db<T>(&self, f: impl FnOnce(&Database) -> Result<T>) -> Result<T> {
        let db = self
            .db
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("Lock poisoned: {e}")))?;
        f(&db)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_db(|db| db.get_value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_db(|db| db.put_value(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set("messages", "[]").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("messages").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("siteConfig").unwrap(), None);
    }

    #[test]
    fn read_json_is_fail_soft() {
        let store = MemoryStore::new();
        assert_eq!(read_json::<Vec<u32>>(&store, "missing"), None);

        store.set("bad", "{not json").unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "bad"), None);

        store.set("wrong-shape", "{\"a\":1}").unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "wrong-shape"), None);

        write_json(&store, "good", &[1u32, 2, 3]).unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "good"), Some(vec![1, 2, 3]));
    }
}
